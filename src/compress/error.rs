//! Error types for UPX acquisition and invocation.

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Result type alias for compressor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the compressor.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with a context message wrapping another error.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// Filesystem operation failed for a specific path.
    #[error("{context} {path}: {error}")]
    Fs {
        /// What was being attempted.
        context: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying IO error.
        error: io::Error,
    },

    /// External command could not be spawned.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to start.
        command: String,
        /// Underlying IO error.
        error: io::Error,
    },

    /// The compression tool ran but exited unsuccessfully.
    #[error("`{command}` exited with status {status}")]
    ToolFailed {
        /// Rendered command line.
        command: String,
        /// Exit code, or `-1` if terminated by a signal.
        status: i32,
    },

    /// The release metadata endpoint could not be queried.
    #[error("failed to query latest UPX release: {0}")]
    TransportError(String),

    /// No command line can be assembled for this platform.
    #[error("unhandled platform `{0}`")]
    UnsupportedPlatform(String),

    /// UPX is not installed and cannot be downloaded on this platform.
    #[error("upx not found on PATH and automatic download is not supported on {0}")]
    ToolUnavailable(String),

    /// A release version that cannot be used as a path component.
    #[error("invalid UPX version `{0}`")]
    InvalidVersion(String),

    /// A required entry was missing from a downloaded archive.
    #[error("archive {archive} does not contain {entry}")]
    MissingArchiveEntry {
        /// Archive on disk.
        archive: PathBuf,
        /// Entry name that was looked up.
        entry: String,
    },

    /// Invalid URL supplied for a mirror or API endpoint.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Generic error message.
    #[error("{0}")]
    GenericError(String),
}

/// Attach path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Attach a message to a failure.
pub trait Context<T> {
    /// Wraps the failure with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::compress::Error::GenericError($msg.into()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::compress::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
