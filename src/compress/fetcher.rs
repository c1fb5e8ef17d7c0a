//! UPX download and cache management.
//!
//! Only Windows release archives are fetched. On Linux and macOS the fetcher
//! reports [`FetchOutcome::Unsupported`] without touching the filesystem or
//! the network, leaving the caller to decide whether that is fatal.
//!
//! # Cache layout
//!
//! ```text
//! <cache_dir>/
//! ├── upx.exe                     persistent, reused across runs
//! ├── upx.zip                     transient download
//! └── upx-<version>-<win64|win32>/upx.exe   transient extraction
//! ```
//!
//! The cache is not keyed by version: an existing `upx.exe` is returned
//! as-is without checking which release it came from.

use crate::compress::{
    Result,
    client::ReleaseClient,
    error::{Context, Error, ErrorExt},
    platform::{Arch, Platform},
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// File name of the downloaded archive inside the cache directory.
const ARCHIVE_FILE_NAME: &str = "upx.zip";

/// Result of asking the fetcher for a usable UPX.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchOutcome {
    /// Executable ready at this path.
    Ready(PathBuf),
    /// Automatic download is not available on this platform.
    Unsupported(Platform),
}

/// Name of the top-level folder inside a UPX Windows release archive.
pub fn release_folder(version: &str, arch: Arch) -> String {
    format!("upx-{}-{}", version, arch.windows_suffix())
}

/// Download URL of a UPX Windows release archive on `host`.
pub fn release_url(host: &str, version: &str, arch: Arch) -> String {
    format!(
        "{}/upx/upx/releases/download/v{}/{}.zip",
        host.trim_end_matches('/'),
        version,
        release_folder(version, arch)
    )
}

/// Obtains UPX for the configured platform.
pub struct ToolFetcher<'a, C> {
    client: &'a C,
    settings: &'a Settings,
}

impl<'a, C: ReleaseClient> ToolFetcher<'a, C> {
    /// Creates a fetcher using `client` for all network access.
    pub fn new(client: &'a C, settings: &'a Settings) -> Self {
        Self { client, settings }
    }

    /// Returns a path to a usable UPX for `version`, downloading from
    /// `download_host` when nothing is cached.
    pub async fn fetch(&self, version: &str, download_host: &str) -> Result<FetchOutcome> {
        match self.settings.platform() {
            Platform::MacOs => {
                log::info!("upx: automatic download is not supported on macOS");
                Ok(FetchOutcome::Unsupported(Platform::MacOs))
            }
            Platform::Linux => {
                log::info!("upx: automatic download is not yet supported on Linux");
                Ok(FetchOutcome::Unsupported(Platform::Linux))
            }
            Platform::Windows => self
                .fetch_windows(version, download_host)
                .await
                .map(FetchOutcome::Ready),
            other => {
                log::info!("upx: automatic download is not supported on {}", other);
                Ok(FetchOutcome::Unsupported(other.clone()))
            }
        }
    }

    async fn fetch_windows(&self, version: &str, download_host: &str) -> Result<PathBuf> {
        validate_version(version)?;

        let cache_dir = self.settings.cache_dir();
        fs::create_dir_all(cache_dir).await?;

        let exe_path = cache_dir.join(Platform::Windows.tool_file_name());
        if exe_path.exists() {
            log::debug!("upx already cached at {}", exe_path.display());
            return Ok(exe_path);
        }

        let arch = self.settings.arch();
        let url = release_url(download_host, version, arch);
        let folder = release_folder(version, arch);
        let archive_path = cache_dir.join(ARCHIVE_FILE_NAME);

        log::info!("upx: downloading {} -> {}", url, archive_path.display());
        let data = self
            .client
            .download(&url)
            .await
            .context("failed to download UPX release archive")?;
        tokio::fs::write(&archive_path, &data)
            .await
            .fs_context("writing UPX archive", &archive_path)?;
        log::info!("upx: downloaded {}", archive_path.display());

        let entry = format!("{}/{}", folder, Platform::Windows.tool_file_name());
        let extracted = extract_entry(&archive_path, &entry, cache_dir)
            .await
            .context("failed to extract upx.exe")?;

        fs::move_file(&extracted, &exe_path).await?;
        fs::remove_dir_all(&cache_dir.join(&folder)).await?;
        fs::remove_file(&archive_path).await?;

        Ok(exe_path)
    }
}

/// Rejects versions that would escape the cache directory once used in
/// the release folder name.
fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() || version.contains(['/', '\\']) || version.contains("..") {
        return Err(Error::InvalidVersion(version.to_string()));
    }
    Ok(())
}

/// Extracts the single archive entry `entry` beneath `dest_dir`, preserving
/// its relative path, and returns where it was written.
async fn extract_entry(archive: &Path, entry: &str, dest_dir: &Path) -> Result<PathBuf> {
    let archive = archive.to_path_buf();
    let entry = entry.to_string();
    let dest_dir = dest_dir.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<PathBuf> {
        let file = std::fs::File::open(&archive).fs_context("opening UPX archive", &archive)?;
        let mut zip = zip::ZipArchive::new(file)?;

        let mut zipped = match zip.by_name(&entry) {
            Ok(zipped) => zipped,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::MissingArchiveEntry {
                    archive: archive.clone(),
                    entry: entry.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let out_path = dest_dir.join(&entry);
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).fs_context("creating extraction directory", parent)?;
        }
        let mut out =
            std::fs::File::create(&out_path).fs_context("creating extracted file", &out_path)?;
        std::io::copy(&mut zipped, &mut out).fs_context("extracting archive entry", &out_path)?;

        Ok(out_path)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive extraction task panicked: {}", e)))?
}
