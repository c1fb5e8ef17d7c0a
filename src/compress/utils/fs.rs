//! File system utilities for the UPX cache directory.
//!
//! Creation and removal are idempotent so a half-populated cache from an
//! interrupted run never blocks the next one.

use crate::compress::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Moves a file, replacing any existing file at the destination.
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::try_exists(to).await.unwrap_or(false) {
        remove_file(to).await?;
    }
    fs::rename(from, to).await.fs_context("moving file", from)
}
