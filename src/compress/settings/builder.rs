//! Builder for constructing Settings.

use super::{
    CACHE_DIR_NAME, DEFAULT_BINARY_NAME, DEFAULT_RELEASES_API, DEFAULT_TARGET_DIR,
    DEFAULT_VERSION, Settings,
};
use crate::compress::{
    Result,
    platform::{Arch, Platform},
};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field has a default matching the Tauri project layout, so
/// `SettingsBuilder::new().build()` is a valid configuration for the host.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_upx::compress::SettingsBuilder;
///
/// # fn example() -> kodegen_bundler_upx::compress::Result<()> {
/// let settings = SettingsBuilder::new()
///     .target_dir("src-tauri/target/release")
///     .mirror(Some("https://ghproxy.example.com".into()))
///     .build()?;
/// assert_eq!(settings.download_host(), "https://ghproxy.example.com");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    lifecycle_script: Option<String>,
    mirror: Option<String>,
    installed_tool: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    target_dir: Option<PathBuf>,
    binary_name: Option<String>,
    releases_api: Option<String>,
    fallback_version: Option<String>,
    platform: Option<Platform>,
    arch: Option<Arch>,
    strict: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the observed `NPM_LIFECYCLE_SCRIPT` value.
    pub fn lifecycle_script(mut self, script: Option<String>) -> Self {
        self.lifecycle_script = script;
        self
    }

    /// Sets the download mirror host.
    ///
    /// Empty strings are treated as unset.
    pub fn mirror(mut self, mirror: Option<String>) -> Self {
        self.mirror = mirror.filter(|m| !m.trim().is_empty());
        self
    }

    /// Sets the UPX executable already present on `PATH`.
    pub fn installed_tool(mut self, tool: Option<PathBuf>) -> Self {
        self.installed_tool = tool;
        self
    }

    /// Sets the cache directory.
    ///
    /// Default: `<system temp>/chatgpt-client`
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory containing the application binary.
    ///
    /// Default: `src-tauri/target/release`
    pub fn target_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.target_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application binary name (without `.exe`).
    ///
    /// Default: `chatgpt-client`
    pub fn binary_name(mut self, name: impl Into<String>) -> Self {
        self.binary_name = Some(name.into());
        self
    }

    /// Sets the latest-release metadata endpoint.
    pub fn releases_api(mut self, url: impl Into<String>) -> Self {
        self.releases_api = Some(url.into());
        self
    }

    /// Sets the version used when no release tag is available.
    ///
    /// Default: `4.0.2`
    pub fn fallback_version(mut self, version: impl Into<String>) -> Self {
        self.fallback_version = Some(version.into());
        self
    }

    /// Overrides the detected platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Overrides the detected architecture.
    pub fn arch(mut self, arch: Arch) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Makes an unobtainable tool a fatal error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror or release endpoint is not a valid URL,
    /// or if the binary name is empty.
    pub fn build(self) -> Result<Settings> {
        if let Some(mirror) = &self.mirror {
            url::Url::parse(mirror)?;
        }

        let releases_api = self
            .releases_api
            .unwrap_or_else(|| DEFAULT_RELEASES_API.to_string());
        url::Url::parse(&releases_api)?;

        let binary_name = self
            .binary_name
            .unwrap_or_else(|| DEFAULT_BINARY_NAME.to_string());
        if binary_name.trim().is_empty() {
            crate::bail!("binary name cannot be empty");
        }

        Ok(Settings {
            lifecycle_script: self.lifecycle_script,
            mirror: self.mirror,
            installed_tool: self.installed_tool,
            cache_dir: self
                .cache_dir
                .unwrap_or_else(|| std::env::temp_dir().join(CACHE_DIR_NAME)),
            target_dir: self
                .target_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR)),
            binary_name,
            releases_api,
            fallback_version: self
                .fallback_version
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            platform: self.platform.unwrap_or_else(Platform::current),
            arch: self.arch.unwrap_or_else(Arch::current),
            strict: self.strict,
        })
    }
}
