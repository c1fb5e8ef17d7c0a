//! Core Settings struct.

use crate::compress::platform::{Arch, Platform};
use std::path::{Path, PathBuf};

use super::{DEFAULT_DOWNLOAD_HOST, PIPELINE_GUARD_PREFIX};

/// Resolved configuration for one compressor run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
#[derive(Clone, Debug)]
pub struct Settings {
    /// Value of `NPM_LIFECYCLE_SCRIPT`, if set.
    pub(super) lifecycle_script: Option<String>,

    /// Alternate download host replacing `https://github.com`.
    pub(super) mirror: Option<String>,

    /// UPX already found on `PATH`.
    pub(super) installed_tool: Option<PathBuf>,

    /// Directory caching the downloaded executable across runs.
    pub(super) cache_dir: PathBuf,

    /// Directory containing the application binary.
    pub(super) target_dir: PathBuf,

    /// Application binary name without extension.
    pub(super) binary_name: String,

    /// Latest-release metadata endpoint.
    pub(super) releases_api: String,

    /// Version substituted when no release tag is available.
    pub(super) fallback_version: String,

    pub(super) platform: Platform,
    pub(super) arch: Arch,

    /// Fail instead of skipping when UPX cannot be obtained.
    pub(super) strict: bool,
}

impl Settings {
    /// Whether this run happens inside a pipeline that already compresses.
    pub fn is_pipeline_guarded(&self) -> bool {
        self.lifecycle_script
            .as_deref()
            .is_some_and(|script| script.starts_with(PIPELINE_GUARD_PREFIX))
    }

    /// Base URL for release archive downloads, without a trailing slash.
    pub fn download_host(&self) -> &str {
        self.mirror
            .as_deref()
            .unwrap_or(DEFAULT_DOWNLOAD_HOST)
            .trim_end_matches('/')
    }

    /// Records the UPX found on `PATH`.
    pub fn with_installed_tool(mut self, tool: Option<PathBuf>) -> Self {
        self.installed_tool = tool;
        self
    }

    /// UPX found on `PATH`, if any.
    pub fn installed_tool(&self) -> Option<&Path> {
        self.installed_tool.as_deref()
    }

    /// Returns the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the directory containing the application binary.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Returns the application binary name.
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    /// Returns the release metadata endpoint.
    pub fn releases_api(&self) -> &str {
        &self.releases_api
    }

    /// Returns the fallback version.
    pub fn fallback_version(&self) -> &str {
        &self.fallback_version
    }

    /// Returns the target platform.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Returns the process architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Whether an unobtainable tool is fatal.
    pub fn strict(&self) -> bool {
        self.strict
    }
}
