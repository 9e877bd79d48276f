/// Build identifier of the dispatched binaries when none is given at build time.
const DEFAULT_BINARY_VERSION: &str = "4731466a6b";

fn main() {
    println!("cargo:rerun-if-env-changed=BINSHIM_BINARY_VERSION");

    let binary_version = std::env::var("BINSHIM_BINARY_VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BINARY_VERSION.to_string());
    println!("cargo:rustc-env=BINSHIM_BINARY_VERSION={}", binary_version);
}
