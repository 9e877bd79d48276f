//! Fixed mapping from platform to the bundled binary that serves it.

use log::debug;
use std::path::{Path, PathBuf};

use crate::launcher::LaunchError;
use crate::platform::Platform;

/// Build identifier embedded in every bundled binary's file name.
pub const BINARY_VERSION: &str = env!("BINSHIM_BINARY_VERSION");

/// Directory, relative to the launcher, that holds the bundled binaries.
pub const DIST_DIR: &str = "dist";

/// Platforms a binary is shipped for, in lookup order.
pub const SUPPORTED: [(&str, &str); 4] = [
    ("linux", "x64"),
    ("linux", "arm64"),
    ("windows", "x64"),
    ("windows", "arm64"),
];

/// Architecture name as it appears in binary file names.
pub fn arch_alias(arch: &str) -> &str {
    match arch {
        "x64" => "amd64",
        other => other,
    }
}

/// File name of the bundled binary for a platform, e.g. `main-linux-amd64-4731466a6b`.
pub fn binary_file_name(os: &str, arch: &str, version: &str) -> String {
    format!("main-{}-{}-{}", os, arch_alias(arch), version)
}

/// Immutable association list from platform to relative binary path.
///
/// Lookups are exact matches on both os and arch; the first matching entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryTable {
    entries: Vec<(Platform, PathBuf)>,
}

impl BinaryTable {
    /// The table for the binaries this launcher was built to ship with.
    pub fn builtin() -> Self {
        Self::for_version(BINARY_VERSION)
    }

    /// The supported platform list, pinned to the given build identifier.
    pub fn for_version(version: &str) -> Self {
        Self::from_entries(SUPPORTED.iter().map(|(os, arch)| {
            (
                Platform::new(*os, *arch),
                Path::new(DIST_DIR).join(binary_file_name(os, arch, version)),
            )
        }))
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Platform, PathBuf)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Platform, &Path)> {
        self.entries.iter().map(|(p, path)| (p, path.as_path()))
    }

    pub fn lookup(&self, platform: &Platform) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(key, _)| key == platform)
            .map(|(_, path)| path.as_path())
    }

    /// Resolve a platform to its relative binary path.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, platform: &Platform) -> Result<&Path, LaunchError> {
        let Some(path) = self.lookup(platform) else {
            let supported: Vec<String> = self.entries().map(|(p, _)| p.to_string()).collect();
            debug!("No binary for {}; shipped for {}", platform, supported.join(", "));
            return Err(LaunchError::UnsupportedPlatform {
                os: platform.os.clone(),
                arch: platform.arch.clone(),
            });
        };
        debug!("Resolved {} to {}", platform, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_paths_for_supported_platforms() {
        let table = BinaryTable::for_version("4731466a6b");

        let cases = [
            ("linux", "x64", "dist/main-linux-amd64-4731466a6b"),
            ("linux", "arm64", "dist/main-linux-arm64-4731466a6b"),
            ("windows", "x64", "dist/main-windows-amd64-4731466a6b"),
            ("windows", "arm64", "dist/main-windows-arm64-4731466a6b"),
        ];

        for (os, arch, expected) in cases {
            let path = table.resolve(&Platform::new(os, arch)).unwrap();
            assert_eq!(path, Path::new(expected), "{}-{}", os, arch);
        }
    }

    #[test]
    fn test_builtin_embeds_baked_version() {
        let table = BinaryTable::builtin();
        assert!(!BINARY_VERSION.is_empty());

        for (_, path) in table.entries() {
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(name.ends_with(&format!("-{}", BINARY_VERSION)), "{}", name);
            assert!(path.starts_with(DIST_DIR));
        }
        assert_eq!(table.entries().count(), SUPPORTED.len());
    }

    #[test]
    fn test_unsupported_platform() {
        let table = BinaryTable::for_version("v1");

        let err = table.resolve(&Platform::new("darwin", "x64")).unwrap_err();
        assert_eq!(
            err,
            LaunchError::UnsupportedPlatform {
                os: "darwin".into(),
                arch: "x64".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unsupported platform (darwin) and architecture (x64)"
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = BinaryTable::for_version("v1");

        // Aliases and Rust target names are not accepted as keys
        assert!(table.lookup(&Platform::new("linux", "amd64")).is_none());
        assert!(table.lookup(&Platform::new("linux", "x86_64")).is_none());
        assert!(table.lookup(&Platform::new("Linux", "x64")).is_none());
        assert!(table.lookup(&Platform::new("linux", "x64")).is_some());
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let table = BinaryTable::from_entries([
            (Platform::new("linux", "x64"), PathBuf::from("first")),
            (Platform::new("linux", "x64"), PathBuf::from("second")),
        ]);

        assert_eq!(
            table.lookup(&Platform::new("linux", "x64")),
            Some(Path::new("first"))
        );
    }

    #[test]
    fn test_arch_alias() {
        assert_eq!(arch_alias("x64"), "amd64");
        assert_eq!(arch_alias("arm64"), "arm64");
        assert_eq!(arch_alias("ia32"), "ia32");
    }

    #[test]
    fn test_binary_file_name() {
        assert_eq!(
            binary_file_name("linux", "x64", "abc"),
            "main-linux-amd64-abc"
        );
        assert_eq!(
            binary_file_name("windows", "arm64", "abc"),
            "main-windows-arm64-abc"
        );
    }
}
