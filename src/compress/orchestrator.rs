//! Top-level compression flow.
//!
//! Runs the stages in order: pipeline guard, locate-or-fetch, mirror
//! override, command assembly, execution. There are no retries and no loops;
//! the only early exits are the pipeline guard and an unobtainable tool.

use crate::compress::{
    Result,
    client::ReleaseClient,
    command::{CompressCommand, ToolOutput},
    error::Error,
    fetcher::{FetchOutcome, ToolFetcher},
    platform::Platform,
    settings::Settings,
    version::{VersionResolution, resolve_version},
};

/// Why a run finished without invoking UPX.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// Running inside `tauri build`, which compresses on its own.
    PipelineGuard,
    /// UPX is not on `PATH` and cannot be downloaded for this platform.
    ToolUnavailable(Platform),
}

/// What a run will do, decided before anything is executed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Plan {
    /// Nothing to do.
    Skip(SkipReason),
    /// Run this command.
    Run(CompressCommand),
}

/// Outcome of [`Compressor::run`].
#[derive(Debug)]
pub enum Outcome {
    /// UPX was not invoked.
    Skipped(SkipReason),
    /// UPX ran successfully.
    Compressed(ToolOutput),
}

/// Orchestrates locating, fetching and running UPX.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_upx::compress::{Compressor, GithubClient, SettingsBuilder};
///
/// # async fn example() -> kodegen_bundler_upx::compress::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let client = GithubClient::new()?;
/// let outcome = Compressor::new(settings, client).run().await?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
pub struct Compressor<C> {
    settings: Settings,
    client: C,
}

impl<C: ReleaseClient> Compressor<C> {
    /// Creates a compressor from resolved settings and a release client.
    pub fn new(settings: Settings, client: C) -> Self {
        Self { settings, client }
    }

    /// Returns the settings this compressor runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Decides what to run, downloading UPX if needed, without executing it.
    pub async fn prepare(&self) -> Result<Plan> {
        if self.settings.is_pipeline_guarded() {
            log::info!("upx: running inside tauri build, skipping compression");
            return Ok(Plan::Skip(SkipReason::PipelineGuard));
        }

        let tool = match self.settings.installed_tool() {
            Some(path) => {
                log::info!("upx: using upx from PATH ({})", path.display());
                path.to_path_buf()
            }
            None => {
                log::info!("upx: upx not found on PATH, downloading automatically");
                match self.fetch_tool().await? {
                    FetchOutcome::Ready(path) => path,
                    FetchOutcome::Unsupported(platform) => {
                        return self.tool_unavailable(platform);
                    }
                }
            }
        };

        CompressCommand::assemble(&tool, &self.settings).map(Plan::Run)
    }

    /// Prepares and, unless skipped, executes UPX, printing its output.
    ///
    /// # Errors
    ///
    /// Any failure while resolving, downloading or spawning is returned as
    /// is. A non-zero exit from UPX becomes [`Error::ToolFailed`] after its
    /// output has been printed.
    pub async fn run(&self) -> Result<Outcome> {
        let command = match self.prepare().await? {
            Plan::Skip(reason) => return Ok(Outcome::Skipped(reason)),
            Plan::Run(command) => command,
        };

        let output = command.execute().await?;
        print!("{}", output.stdout);
        eprint!("{}", output.stderr);

        if !output.success {
            return Err(Error::ToolFailed {
                command: command.to_string(),
                status: output.status.unwrap_or(-1),
            });
        }

        Ok(Outcome::Compressed(output))
    }

    async fn fetch_tool(&self) -> Result<FetchOutcome> {
        let version = match resolve_version(&self.client, self.settings.releases_api()).await {
            VersionResolution::Resolved(version) => version,
            VersionResolution::NotFound => {
                log::warn!(
                    "upx: no release tag found, falling back to {}",
                    self.settings.fallback_version()
                );
                self.settings.fallback_version().to_string()
            }
            VersionResolution::TransportError(detail) => {
                return Err(Error::TransportError(detail));
            }
        };

        ToolFetcher::new(&self.client, &self.settings)
            .fetch(&version, self.settings.download_host())
            .await
    }

    fn tool_unavailable(&self, platform: Platform) -> Result<Plan> {
        if self.settings.strict() {
            return Err(Error::ToolUnavailable(platform.to_string()));
        }
        log::warn!(
            "upx: not available on {}, install it to enable compression; skipping",
            platform
        );
        Ok(Plan::Skip(SkipReason::ToolUnavailable(platform)))
    }
}
