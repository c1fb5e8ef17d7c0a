//! Tool fetcher behaviour against an in-memory release host

mod common;

use common::{MockClient, TagResponse, release_zip};
use kodegen_bundler_upx::compress::{
    Arch, Error, FetchOutcome, Platform, Settings, SettingsBuilder, ToolFetcher,
};
use std::path::Path;
use tempfile::TempDir;

fn settings(platform: Platform, arch: Arch, cache_dir: &Path) -> Settings {
    SettingsBuilder::new()
        .platform(platform)
        .arch(arch)
        .cache_dir(cache_dir)
        .build()
        .unwrap()
}

#[tokio::test]
async fn unsupported_platforms_touch_nothing() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("cache");
    let client = MockClient::offline();

    for platform in [Platform::Linux, Platform::MacOs] {
        let settings = settings(platform.clone(), Arch::Bits64, &cache_dir);
        let outcome = ToolFetcher::new(&client, &settings)
            .fetch("4.1.0", "https://github.com")
            .await
            .unwrap();

        assert_eq!(outcome, FetchOutcome::Unsupported(platform));
    }

    assert!(!cache_dir.exists());
    assert_eq!(client.network_calls(), 0);
}

#[tokio::test]
async fn cached_executable_skips_network() {
    let temp = TempDir::new().unwrap();
    let cached = temp.path().join("upx.exe");
    std::fs::write(&cached, b"cached").unwrap();

    let client = MockClient::offline();
    let settings = settings(Platform::Windows, Arch::Bits64, temp.path());

    let outcome = ToolFetcher::new(&client, &settings)
        .fetch("9.9.9", "https://github.com")
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Ready(cached.clone()));
    assert_eq!(client.network_calls(), 0);
    assert_eq!(std::fs::read(&cached).unwrap(), b"cached");
}

#[tokio::test]
async fn downloads_and_unpacks_win64_release() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("chatgpt-client");
    let client = MockClient::new(
        TagResponse::Tag("v4.1.0"),
        release_zip("upx-4.1.0-win64", b"MZ upx"),
    );
    let settings = settings(Platform::Windows, Arch::Bits64, &cache_dir);

    let outcome = ToolFetcher::new(&client, &settings)
        .fetch("4.1.0", "https://github.com")
        .await
        .unwrap();

    let exe = cache_dir.join("upx.exe");
    assert_eq!(outcome, FetchOutcome::Ready(exe.clone()));
    assert_eq!(std::fs::read(&exe).unwrap(), b"MZ upx");
    assert_eq!(
        client.downloads(),
        vec!["https://github.com/upx/upx/releases/download/v4.1.0/upx-4.1.0-win64.zip"]
    );

    // Only the executable survives in the cache
    assert!(!cache_dir.join("upx.zip").exists());
    assert!(!cache_dir.join("upx-4.1.0-win64").exists());
    assert_eq!(std::fs::read_dir(&cache_dir).unwrap().count(), 1);
}

#[tokio::test]
async fn non_64bit_arch_fetches_win32_release() {
    let temp = TempDir::new().unwrap();
    let client = MockClient::new(
        TagResponse::Tag("v4.1.0"),
        release_zip("upx-4.0.2-win32", b"MZ32"),
    );
    let settings = settings(Platform::Windows, Arch::from_label("32bit"), temp.path());

    ToolFetcher::new(&client, &settings)
        .fetch("4.0.2", "https://github.com")
        .await
        .unwrap();

    assert_eq!(
        client.downloads(),
        vec!["https://github.com/upx/upx/releases/download/v4.0.2/upx-4.0.2-win32.zip"]
    );
    assert_eq!(std::fs::read(temp.path().join("upx.exe")).unwrap(), b"MZ32");
}

#[tokio::test]
async fn mirror_host_replaces_github() {
    let temp = TempDir::new().unwrap();
    let client = MockClient::new(
        TagResponse::Tag("v4.1.0"),
        release_zip("upx-4.1.0-win64", b"MZ"),
    );
    let settings = settings(Platform::Windows, Arch::Bits64, temp.path());

    ToolFetcher::new(&client, &settings)
        .fetch("4.1.0", "https://mirror.example.com/")
        .await
        .unwrap();

    assert_eq!(
        client.downloads(),
        vec!["https://mirror.example.com/upx/upx/releases/download/v4.1.0/upx-4.1.0-win64.zip"]
    );
}

#[tokio::test]
async fn archive_without_executable_is_fatal_and_left_on_disk() {
    let temp = TempDir::new().unwrap();
    // Archive for a different architecture than requested
    let client = MockClient::new(
        TagResponse::Tag("v4.1.0"),
        release_zip("upx-4.1.0-win32", b"MZ"),
    );
    let settings = settings(Platform::Windows, Arch::Bits64, temp.path());

    let err = ToolFetcher::new(&client, &settings)
        .fetch("4.1.0", "https://github.com")
        .await
        .unwrap_err();

    match err {
        Error::Context(_, inner) => assert!(
            matches!(
                *inner,
                Error::MissingArchiveEntry { ref entry, .. } if entry == "upx-4.1.0-win64/upx.exe"
            ),
            "unexpected inner error: {inner:?}"
        ),
        other => panic!("expected context error, got {other:?}"),
    }
    assert!(temp.path().join("upx.zip").exists());
    assert!(!temp.path().join("upx.exe").exists());
}

#[tokio::test]
async fn path_like_versions_are_rejected_before_download() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("cache");
    let client = MockClient::new(TagResponse::Tag("v4.1.0"), release_zip("x", b"MZ"));
    let settings = settings(Platform::Windows, Arch::Bits64, &cache_dir);

    for version in ["../../../x", "4.1.0/../..", "..\\evil", ""] {
        let err = ToolFetcher::new(&client, &settings)
            .fetch(version, "https://github.com")
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::InvalidVersion(ref v) if v == version),
            "{version:?} gave {err:?}"
        );
    }

    assert!(client.downloads().is_empty());
    assert!(!cache_dir.exists());
}
