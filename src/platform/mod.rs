//! Platform detection module
//!
//! This module detects the host operating system and processor architecture
//! and normalizes them into the names used by the dispatched binaries
//! (`linux`/`windows`/`darwin`, `x64`/`arm64`).

mod detection;

#[cfg(test)]
pub use detection::MockPlatformDetector;
pub use detection::{HostPlatformDetector, Platform, PlatformDetector, normalize_arch, normalize_os};
