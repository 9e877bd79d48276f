use binshim::launcher::{FAILURE_EXIT_CODE, Launcher, report};
use binshim::platform::HostPlatformDetector;
use binshim::runtime::RealRuntime;
use binshim::table::BinaryTable;
use clap::Parser;
use clap::builder::FalseyValueParser;
use std::ffi::OsString;

/// binshim - platform dispatch launcher
///
/// Runs the bundled `dist/main-<os>-<arch>-<version>` binary that matches the
/// host platform, forwarding arguments, stdio and exit status.
///
/// A leading `--` ends the launcher's own options and is not forwarded, so
/// `binshim -- --binshim-no-forward` passes that flag through to the binary.
///
/// Launcher diagnostics are controlled by BINSHIM_LOG (default: warn).
#[derive(Parser, Debug)]
#[command(
    about,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Do not forward arguments to the selected binary (also via BINSHIM_NO_FORWARD)
    #[arg(
        long = "binshim-no-forward",
        env = "BINSHIM_NO_FORWARD",
        value_parser = FalseyValueParser::new(),
        hide = true
    )]
    no_forward: bool,

    /// Arguments passed through to the selected binary
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<OsString>,
}

impl Cli {
    fn forwarded_args(&self) -> &[OsString] {
        if self.no_forward { &[] } else { &self.args }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("BINSHIM_LOG", "warn"))
        .init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(FAILURE_EXIT_CODE);
        }
    };

    let launcher = Launcher::new(RealRuntime, HostPlatformDetector, BinaryTable::builtin());
    let outcome = launcher.run(cli.forwarded_args());
    let code = report(&outcome, &mut std::io::stderr());

    std::process::exit(code);
}
