//! Post-build UPX compression for Tauri application binaries.
//!
//! This library locates a system-installed UPX or downloads a release into
//! a local cache, then runs it against the freshly built executable.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod compress;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, CompressorError, Result};
