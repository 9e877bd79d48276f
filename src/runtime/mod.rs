//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the side effects the
//! launcher performs, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Information about the running launcher process
//! - `fs` - File system queries
//! - `process` - Child process execution with inherited stdio

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use process::ChildExit;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Process
    /// Full path of the running launcher executable.
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn is_file(&self, path: &Path) -> bool;

    // Child processes
    /// Run `program` to completion with stdin, stdout and stderr inherited from
    /// this process. Returns how the child terminated.
    fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<ChildExit>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<ChildExit> {
        self.run_inherited_impl(program, args)
    }
}
