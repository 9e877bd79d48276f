//! Binary selection and launch
//!
//! The launcher resolves the host platform to a bundled binary next to the
//! launcher executable and runs it with inherited stdio. Every path ends in an
//! [`Outcome`] so callers decide when the process actually exits.

mod error;

pub use error::LaunchError;

use log::{debug, error, info};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::platform::PlatformDetector;
use crate::runtime::Runtime;
use crate::table::BinaryTable;

/// Exit status used whenever no child status can be propagated.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Result of a launcher run
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The child ran and reported this exit status
    Exited(i32),
    /// No child status is available
    Failed(LaunchError),
}

impl Outcome {
    /// Status the launcher process should exit with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Exited(code) => *code,
            Outcome::Failed(_) => FAILURE_EXIT_CODE,
        }
    }
}

/// Report a finished run and return the status the launcher should exit with.
///
/// An unsupported platform is reported as a plain message on `stderr`; other
/// failures go to the error log.
pub fn report<W: Write>(outcome: &Outcome, stderr: &mut W) -> i32 {
    match outcome {
        Outcome::Exited(_) => {}
        Outcome::Failed(err) if err.is_launch_failure() => error!("{}", err),
        Outcome::Failed(err) => {
            let _ = writeln!(stderr, "{}", err);
        }
    }
    outcome.exit_code()
}

pub struct Launcher<R: Runtime, D: PlatformDetector> {
    runtime: R,
    detector: D,
    table: BinaryTable,
}

impl<R: Runtime, D: PlatformDetector> Launcher<R, D> {
    pub fn new(runtime: R, detector: D, table: BinaryTable) -> Self {
        Self {
            runtime,
            detector,
            table,
        }
    }

    /// Directory containing the launcher executable.
    pub fn launcher_dir(&self) -> Result<PathBuf, LaunchError> {
        let exe = self
            .runtime
            .current_exe()
            .map_err(|e| LaunchError::LauncherDirUnavailable(format!("{:#}", e)))?;

        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            LaunchError::LauncherDirUnavailable(format!("{} has no parent", exe.display()))
        })
    }

    /// Absolute path of the bundled binary for the host platform.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self) -> Result<PathBuf, LaunchError> {
        let platform = self.detector.detect();
        debug!("Detected platform {}", platform);

        let relative = self.table.resolve(&platform)?;
        Ok(self.launcher_dir()?.join(relative))
    }

    /// Run `binary` to completion and report how it ended.
    #[tracing::instrument(skip(self))]
    pub fn launch(&self, binary: &Path, args: &[OsString]) -> Outcome {
        if !self.runtime.is_file(binary) {
            return Outcome::Failed(LaunchError::MissingBinary(binary.to_path_buf()));
        }

        info!("Launching {}", binary.display());
        match self.runtime.run_inherited(binary, args) {
            Ok(exit) => match exit.code() {
                Some(code) => Outcome::Exited(code),
                None => Outcome::Failed(LaunchError::NoExitCode {
                    path: binary.to_path_buf(),
                    signal: exit.signal(),
                }),
            },
            Err(e) => Outcome::Failed(LaunchError::SpawnFailed {
                path: binary.to_path_buf(),
                reason: format!("{:#}", e),
            }),
        }
    }

    /// Resolve the host binary and launch it.
    pub fn run(&self, args: &[OsString]) -> Outcome {
        match self.resolve() {
            Ok(binary) => self.launch(&binary, args),
            Err(e) => Outcome::Failed(e),
        }
    }
}
