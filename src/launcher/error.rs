use std::fmt;
use std::path::PathBuf;

/// Reasons the launcher could not hand control to a bundled binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// No bundled binary is listed for this (platform, architecture) pair
    UnsupportedPlatform { os: String, arch: String },
    /// The launcher could not determine its own install directory
    LauncherDirUnavailable(String),
    /// The resolved binary is not present next to the launcher
    MissingBinary(PathBuf),
    /// The binary exists but could not be started
    SpawnFailed { path: PathBuf, reason: String },
    /// The binary terminated without a numeric exit status
    NoExitCode { path: PathBuf, signal: Option<i32> },
}

impl LaunchError {
    /// Whether this error happened after a binary was selected.
    pub fn is_launch_failure(&self) -> bool {
        !matches!(self, LaunchError::UnsupportedPlatform { .. })
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::UnsupportedPlatform { os, arch } => {
                write!(f, "Unsupported platform ({}) and architecture ({})", os, arch)
            }
            LaunchError::LauncherDirUnavailable(reason) => {
                write!(f, "Cannot locate launcher directory: {}", reason)
            }
            LaunchError::MissingBinary(path) => {
                write!(f, "Binary not found: {}", path.display())
            }
            LaunchError::SpawnFailed { path, reason } => {
                write!(f, "Failed to launch {}: {}", path.display(), reason)
            }
            LaunchError::NoExitCode {
                path,
                signal: Some(signal),
            } => {
                write!(f, "{} was terminated by signal {}", path.display(), signal)
            }
            LaunchError::NoExitCode { path, signal: None } => {
                write!(f, "{} terminated without an exit status", path.display())
            }
        }
    }
}

impl std::error::Error for LaunchError {}
