//! Top-level error types for the CLI.
//!
//! Domain failures live in [`crate::compress::Error`]; this layer adds
//! argument errors and wraps everything for `main`.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CompressorError>;

/// Main error type surfaced by the binary
#[derive(Error, Debug)]
pub enum CompressorError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// UPX acquisition or execution errors
    #[error("{0}")]
    Compress(#[from] crate::compress::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
