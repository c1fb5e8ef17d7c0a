//! Configuration for locating, fetching, and running UPX.
//!
//! [`Settings`] is built once at startup (normally from CLI arguments and
//! their environment fallbacks) and passed by reference to every stage, so
//! no stage reads process environment on its own.

mod builder;
mod core;

pub use self::builder::SettingsBuilder;
pub use self::core::Settings;

/// Prefix of `NPM_LIFECYCLE_SCRIPT` that marks a run inside `tauri build`,
/// which already compresses the binary.
pub const PIPELINE_GUARD_PREFIX: &str = "tauri build ";

/// Host used for release archive downloads when no mirror is configured.
pub const DEFAULT_DOWNLOAD_HOST: &str = "https://github.com";

/// Release metadata endpoint for the latest published UPX version.
pub const DEFAULT_RELEASES_API: &str = "https://api.github.com/repos/upx/upx/releases/latest";

/// Version used when the release endpoint reports no usable tag.
pub const DEFAULT_VERSION: &str = "4.0.2";

/// Name of the cache directory under the system temp root.
pub const CACHE_DIR_NAME: &str = "chatgpt-client";

/// Directory holding the freshly built application.
pub const DEFAULT_TARGET_DIR: &str = "src-tauri/target/release";

/// Application binary name without platform extension.
pub const DEFAULT_BINARY_NAME: &str = "chatgpt-client";
