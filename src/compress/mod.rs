//! UPX acquisition and invocation for post-build binary compression.
//!
//! This module ensures the UPX executable packer is available and runs it
//! against a freshly built application binary:
//!
//! 1. Skip when running inside `tauri build` (it already compresses)
//! 2. Prefer `upx` from `PATH`
//! 3. Otherwise resolve the latest release and download it (Windows only),
//!    caching the executable under the system temp directory
//! 4. Run `upx -9 <target>` and print its output
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_upx::compress::{Compressor, GithubClient, Outcome, SettingsBuilder};
//!
//! # async fn example() -> kodegen_bundler_upx::compress::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .installed_tool(kodegen_bundler_upx::compress::locate_tool("upx"))
//!     .build()?;
//!
//! match Compressor::new(settings, GithubClient::new()?).run().await? {
//!     Outcome::Skipped(reason) => println!("skipped: {:?}", reason),
//!     Outcome::Compressed(_) => println!("compressed"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod command;
mod error;
mod fetcher;
mod locator;
mod orchestrator;
mod platform;
mod settings;
mod utils;
mod version;

pub use client::{GithubClient, ReleaseClient};
pub use command::{COMPRESSION_FLAG, CompressCommand, ToolOutput};
pub use error::{Context, Error, ErrorExt, Result};
pub use fetcher::{FetchOutcome, ToolFetcher, release_folder, release_url};
pub use locator::{TOOL_NAME, locate_tool};
pub use orchestrator::{Compressor, Outcome, Plan, SkipReason};
pub use platform::{Arch, Platform};
pub use settings::{
    CACHE_DIR_NAME, DEFAULT_BINARY_NAME, DEFAULT_DOWNLOAD_HOST, DEFAULT_RELEASES_API,
    DEFAULT_TARGET_DIR, DEFAULT_VERSION, PIPELINE_GUARD_PREFIX, Settings, SettingsBuilder,
};
pub use version::{VersionResolution, resolve_version};
