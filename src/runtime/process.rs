//! Child process execution.

use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::RealRuntime;

/// How a child process terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Exited normally with a numeric status
    Code(i32),
    /// Killed by a signal (unix only)
    Signal(i32),
    /// Terminated without a numeric status or a signal number
    Unknown,
}

impl ChildExit {
    pub fn code(&self) -> Option<i32> {
        match self {
            ChildExit::Code(code) => Some(*code),
            _ => None,
        }
    }

    pub fn signal(&self) -> Option<i32> {
        match self {
            ChildExit::Signal(signal) => Some(*signal),
            _ => None,
        }
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildExit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ChildExit::Signal(signal);
            }
        }

        ChildExit::Unknown
    }
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_inherited_impl(&self, program: &Path, args: &[OsString]) -> Result<ChildExit> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to start {}", program.display()))?;

        debug!("{} finished with {}", program.display(), status);
        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::ChildExit;
    use crate::runtime::{RealRuntime, Runtime};
    use std::path::Path;

    #[test]
    fn test_child_exit_code() {
        assert_eq!(ChildExit::Code(7).code(), Some(7));
        assert_eq!(ChildExit::Signal(9).code(), None);
        assert_eq!(ChildExit::Unknown.code(), None);

        assert_eq!(ChildExit::Signal(9).signal(), Some(9));
        assert_eq!(ChildExit::Code(7).signal(), None);
        assert_eq!(ChildExit::Unknown.signal(), None);
    }

    #[test]
    fn test_run_inherited_missing_program() {
        let runtime = RealRuntime;
        let dir = tempfile::tempdir().unwrap();

        let result = runtime.run_inherited(&dir.path().join("does-not-exist"), &[]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_inherited_propagates_code() {
        let runtime = RealRuntime;

        let exit = runtime
            .run_inherited(Path::new("/bin/sh"), &["-c".into(), "exit 7".into()])
            .unwrap();
        assert_eq!(exit, ChildExit::Code(7));

        let exit = runtime
            .run_inherited(Path::new("/bin/sh"), &["-c".into(), "exit 0".into()])
            .unwrap();
        assert_eq!(exit, ChildExit::Code(0));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_inherited_reports_signal() {
        let runtime = RealRuntime;

        let exit = runtime
            .run_inherited(Path::new("/bin/sh"), &["-c".into(), "kill -9 $$".into()])
            .unwrap();
        assert_eq!(exit, ChildExit::Signal(9));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_exit_status() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        // Wait status encoding: exit code in the high byte, signal in the low bits
        assert_eq!(ChildExit::from(ExitStatus::from_raw(3 << 8)), ChildExit::Code(3));
        assert_eq!(ChildExit::from(ExitStatus::from_raw(15)), ChildExit::Signal(15));
    }
}
