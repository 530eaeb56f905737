// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for streaming asset downloads

use tempfile::TempDir;

use chitchat_core::{AssetFetcher, FetchError, NullObserver};

use super::common::{test_config, RecordingObserver, StubResponse, StubServer};

#[tokio::test]
async fn download_writes_asset_to_disk() {
    let server = StubServer::start(vec![(
        "/ChitChatClient.exe",
        StubResponse::ok(&b"fake client binary"[..]),
    )]);
    let temp = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(&test_config(&server, &temp)).unwrap();

    let save_path = temp.path().join("ChitChatClient.exe");
    let written = fetcher
        .download(&save_path, "ChitChatClient.exe", &mut NullObserver)
        .await
        .unwrap();

    assert_eq!(written, 18);
    assert_eq!(std::fs::read(&save_path).unwrap(), b"fake client binary");
}

#[tokio::test]
async fn download_overwrites_existing_file() {
    let server = StubServer::start(vec![(
        "/ChitChatClient.exe",
        StubResponse::ok(&b"new"[..]),
    )]);
    let temp = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(&test_config(&server, &temp)).unwrap();

    let save_path = temp.path().join("ChitChatClient.exe");
    std::fs::write(&save_path, b"a much longer stale binary").unwrap();

    fetcher
        .download(&save_path, "ChitChatClient.exe", &mut NullObserver)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&save_path).unwrap(), b"new");
}

#[tokio::test]
async fn progress_is_monotonic_and_reaches_completion() {
    let body = vec![0x5au8; 64 * 1024];
    let server = StubServer::start(vec![(
        "/ChitChatClient.exe",
        StubResponse::ok_chunked(body.clone(), 8 * 1024),
    )]);
    let temp = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(&test_config(&server, &temp)).unwrap();

    let mut observer = RecordingObserver::default();
    let save_path = temp.path().join("ChitChatClient.exe");
    fetcher
        .download(&save_path, "ChitChatClient.exe", &mut observer)
        .await
        .unwrap();

    assert!(!observer.progress.is_empty());
    for pair in observer.progress.windows(2) {
        assert!(pair[1].percent >= pair[0].percent);
    }
    let last = observer.progress.last().unwrap();
    assert!((last.percent - 100.0).abs() < 0.01);
    assert!(observer.progress.iter().all(|p| p.asset == "ChitChatClient"));
    assert_eq!(std::fs::read(&save_path).unwrap(), body);
}

#[tokio::test]
async fn missing_content_length_suppresses_progress() {
    let server = StubServer::start(vec![(
        "/ChitChatClient.exe",
        StubResponse::ok_no_length(&b"complete despite no length"[..]),
    )]);
    let temp = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(&test_config(&server, &temp)).unwrap();

    let mut observer = RecordingObserver::default();
    let save_path = temp.path().join("ChitChatClient.exe");
    fetcher
        .download(&save_path, "ChitChatClient.exe", &mut observer)
        .await
        .unwrap();

    assert!(observer.progress.is_empty());
    assert_eq!(
        std::fs::read(&save_path).unwrap(),
        b"complete despite no length"
    );
}

#[tokio::test]
async fn non_success_status_is_a_download_error() {
    let server = StubServer::start(vec![(
        "/ChitChatClient.exe",
        StubResponse::status(500),
    )]);
    let temp = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(&test_config(&server, &temp)).unwrap();

    let save_path = temp.path().join("ChitChatClient.exe");
    let result = fetcher
        .download(&save_path, "ChitChatClient.exe", &mut NullObserver)
        .await;

    assert!(matches!(result, Err(FetchError::HttpStatus(500))));
    // Nothing was written: the status check happens before the file is
    // even created.
    assert!(!save_path.exists());
}

#[tokio::test]
async fn unknown_asset_is_a_404() {
    let server = StubServer::start(vec![]);
    let temp = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(&test_config(&server, &temp)).unwrap();

    let save_path = temp.path().join("Missing.exe");
    let result = fetcher.download(&save_path, "Missing.exe", &mut NullObserver).await;

    assert!(matches!(result, Err(FetchError::HttpStatus(404))));
}
