//! Command line interface for the UPX compressor.

mod args;

pub use args::Args;

use crate::{
    compress::{Compressor, GithubClient, Outcome, SkipReason, TOOL_NAME, locate_tool},
    error::{CliError, Result},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with(Args::parse_args()).await
}

/// Executes the compressor for already parsed arguments.
pub async fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let mut settings = args.to_settings()?;
    if !settings.is_pipeline_guarded() {
        settings = settings.with_installed_tool(locate_tool(TOOL_NAME));
    }

    let compressor = Compressor::new(settings, GithubClient::new()?);

    match compressor.run().await? {
        Outcome::Skipped(SkipReason::PipelineGuard) => {
            log::debug!("upx: skipped, compression is handled by tauri build");
        }
        Outcome::Skipped(SkipReason::ToolUnavailable(platform)) => {
            log::debug!("upx: skipped, no upx available on {}", platform);
        }
        Outcome::Compressed(_) => {
            log::info!("✓ Compressed {}", compressor.settings().binary_name());
        }
    }

    Ok(0)
}
