//! UPX command assembly and execution.

use crate::compress::{Result, error::Error, platform::Platform, settings::Settings};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Flag requesting UPX's strongest regular compression level.
pub const COMPRESSION_FLAG: &str = "-9";

/// A fully assembled UPX invocation.
///
/// Executed as program plus argument vector, never through a shell, so paths
/// containing spaces need no quoting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompressCommand {
    program: PathBuf,
    args: Vec<String>,
}

/// Captured result of running the compressor.
#[derive(Debug)]
pub struct ToolOutput {
    /// Exit code, or `None` if terminated by a signal.
    pub status: Option<i32>,
    /// Whether the process reported success.
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CompressCommand {
    /// Builds `<tool> -9 <target_dir>/<binary>` for the configured platform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] for any platform other than
    /// Windows, Linux or macOS.
    pub fn assemble(tool: &Path, settings: &Settings) -> Result<Self> {
        let file_name = match settings.platform() {
            Platform::Linux | Platform::MacOs => settings.binary_name().to_string(),
            Platform::Windows => format!("{}.exe", settings.binary_name()),
            Platform::Other(os) => return Err(Error::UnsupportedPlatform(os.clone())),
        };
        let target = settings.target_dir().join(file_name);

        Ok(Self {
            program: tool.to_path_buf(),
            args: vec![
                COMPRESSION_FLAG.to_string(),
                target.to_string_lossy().into_owned(),
            ],
        })
    }

    /// Returns the executable path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the arguments passed to the executable.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command to completion, capturing its output.
    ///
    /// There is no timeout; the call returns only when the child exits.
    pub async fn execute(&self) -> Result<ToolOutput> {
        log::info!("upx: executing '{}'", self);

        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: self.to_string(),
                error,
            })?;

        Ok(ToolOutput {
            status: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl fmt::Display for CompressCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
