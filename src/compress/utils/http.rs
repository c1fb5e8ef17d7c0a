//! HTTP utilities for downloading UPX and querying its releases.

use crate::compress::error::Result;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Downloads a file from a URL.
///
/// Returns the response body. Non-success statuses are errors.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Bytes> {
    log::info!("Downloading {}", url);

    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(bytes)
}

/// Fetches and decodes a JSON document.
///
/// Non-success statuses, transport failures and bodies that do not decode
/// into `T` are errors.
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    log::debug!("GET {}", url);

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
