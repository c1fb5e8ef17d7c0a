//! Shared fixtures for compressor integration tests

#![allow(dead_code)]

use bytes::Bytes;
use kodegen_bundler_upx::compress::{Error, ReleaseClient, Result};
use std::io::{Cursor, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the fake release endpoint answers
pub enum TagResponse {
    Tag(&'static str),
    Unreachable,
}

/// In-memory release client recording every request
pub struct MockClient {
    tag: TagResponse,
    archive: Bytes,
    tag_calls: AtomicUsize,
    downloads: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new(tag: TagResponse, archive: Bytes) -> Self {
        Self {
            tag,
            archive,
            tag_calls: AtomicUsize::new(0),
            downloads: Mutex::new(Vec::new()),
        }
    }

    /// Client whose endpoint is never expected to be hit
    pub fn offline() -> Self {
        Self::new(TagResponse::Unreachable, Bytes::new())
    }

    pub fn tag_calls(&self) -> usize {
        self.tag_calls.load(Ordering::SeqCst)
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }

    pub fn network_calls(&self) -> usize {
        self.tag_calls() + self.downloads().len()
    }
}

impl ReleaseClient for MockClient {
    async fn latest_release_tag(&self, _api_url: &str) -> Result<String> {
        self.tag_calls.fetch_add(1, Ordering::SeqCst);
        match self.tag {
            TagResponse::Tag(tag) => Ok(tag.to_string()),
            TagResponse::Unreachable => {
                Err(Error::GenericError("connection refused".to_string()))
            }
        }
    }

    async fn download(&self, url: &str) -> Result<Bytes> {
        self.downloads.lock().unwrap().push(url.to_string());
        Ok(self.archive.clone())
    }
}

/// Builds a ZIP shaped like a UPX Windows release
pub fn release_zip(folder: &str, exe_contents: &[u8]) -> Bytes {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();

    writer.add_directory(format!("{}/", folder), options).unwrap();
    writer.start_file(format!("{}/upx.exe", folder), options).unwrap();
    writer.write_all(exe_contents).unwrap();
    writer.start_file(format!("{}/README", folder), options).unwrap();
    writer.write_all(b"Ultimate Packer for eXecutables").unwrap();

    Bytes::from(writer.finish().unwrap().into_inner())
}
