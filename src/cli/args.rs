//! Command line argument parsing and validation.
//!
//! Every option has an environment fallback so the compressor can run as an
//! npm `postbuild` script without arguments.

use crate::compress::{
    self, DEFAULT_BINARY_NAME, DEFAULT_RELEASES_API, DEFAULT_TARGET_DIR, DEFAULT_VERSION,
    Settings, SettingsBuilder,
};
use clap::Parser;
use std::path::PathBuf;

/// Locate or download UPX and compress the built application binary
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_upx",
    version,
    about = "Locate or download UPX and compress the built application binary",
    long_about = "Compresses a freshly built application binary with `upx -9`.

Uses upx from PATH when available. Otherwise resolves the latest UPX release
from GitHub and downloads it into a cache under the system temp directory
(Windows only). Does nothing when invoked from within `tauri build`.

Usage:
  kodegen_bundler_upx
  kodegen_bundler_upx --target-dir target/release --binary-name myapp
  GITHUB_MIRROR=https://ghproxy.example.com kodegen_bundler_upx"
)]
pub struct Args {
    /// Directory containing the built application binary
    #[arg(long, env = "UPX_TARGET_DIR", default_value = DEFAULT_TARGET_DIR)]
    pub target_dir: PathBuf,

    /// Application binary name, without `.exe`
    #[arg(long, env = "UPX_BINARY_NAME", default_value = DEFAULT_BINARY_NAME)]
    pub binary_name: String,

    /// Cache directory for the downloaded UPX [default: <temp>/chatgpt-client]
    #[arg(long, env = "UPX_CACHE_DIR", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Alternate host replacing https://github.com for archive downloads
    #[arg(long, env = "GITHUB_MIRROR", value_name = "URL")]
    pub mirror: Option<String>,

    /// Latest-release metadata endpoint
    #[arg(long, env = "UPX_RELEASES_API", value_name = "URL", default_value = DEFAULT_RELEASES_API)]
    pub releases_api: String,

    /// Version downloaded when no release tag can be found
    #[arg(long, env = "UPX_FALLBACK_VERSION", default_value = DEFAULT_VERSION)]
    pub fallback_version: String,

    /// Fail instead of skipping when UPX cannot be obtained
    #[arg(long, env = "UPX_STRICT", value_parser = clap::builder::BoolishValueParser::new())]
    pub strict: bool,

    /// npm lifecycle script currently running
    #[arg(long, env = "NPM_LIFECYCLE_SCRIPT", hide = true, allow_hyphen_values = true)]
    pub lifecycle_script: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.fallback_version.trim().is_empty() {
            return Err("Fallback version cannot be empty".to_string());
        }

        Ok(())
    }

    /// Builds compressor settings from the parsed arguments.
    pub fn to_settings(&self) -> compress::Result<Settings> {
        let mut builder = SettingsBuilder::new()
            .lifecycle_script(self.lifecycle_script.clone())
            .mirror(self.mirror.clone())
            .target_dir(&self.target_dir)
            .binary_name(self.binary_name.clone())
            .releases_api(self.releases_api.clone())
            .fallback_version(self.fallback_version.clone())
            .strict(self.strict);

        if let Some(cache_dir) = &self.cache_dir {
            builder = builder.cache_dir(cache_dir);
        }

        builder.build()
    }
}
