//! Network access to UPX releases.
//!
//! The [`ReleaseClient`] trait is the only way the resolver and fetcher reach
//! the network, which keeps both testable without a live GitHub.

use crate::compress::{Result, utils::http};
use bytes::Bytes;
use serde::Deserialize;
use std::future::Future;

/// Source of UPX release metadata and archives.
pub trait ReleaseClient {
    /// Returns the `tag_name` of the latest release published at `api_url`.
    fn latest_release_tag(&self, api_url: &str) -> impl Future<Output = Result<String>> + Send;

    /// Downloads the file at `url`.
    fn download(&self, url: &str) -> impl Future<Output = Result<Bytes>> + Send;
}

impl<T: ReleaseClient> ReleaseClient for &T {
    fn latest_release_tag(&self, api_url: &str) -> impl Future<Output = Result<String>> + Send {
        (**self).latest_release_tag(api_url)
    }

    fn download(&self, url: &str) -> impl Future<Output = Result<Bytes>> + Send {
        (**self).download(url)
    }
}

/// Subset of the GitHub release payload that the resolver reads.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// [`ReleaseClient`] backed by the GitHub REST API.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: reqwest::Client,
}

impl GithubClient {
    /// Creates a client with a `User-Agent`, which the GitHub API requires.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Wraps a preconfigured HTTP client.
    ///
    /// The client must send a `User-Agent` when talking to api.github.com.
    pub fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl ReleaseClient for GithubClient {
    async fn latest_release_tag(&self, api_url: &str) -> Result<String> {
        let release: LatestRelease = http::get_json(&self.http, api_url).await?;
        Ok(release.tag_name)
    }

    async fn download(&self, url: &str) -> Result<Bytes> {
        http::download(&self.http, url).await
    }
}
