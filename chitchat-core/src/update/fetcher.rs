// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release asset downloads
//!
//! Streams a named asset from the release endpoint to a local file in
//! chunks, reporting byte-level progress when the server announces a
//! total size. A single failed attempt propagates immediately: there
//! is no retry, and a partially written file stays on disk (the next
//! update run will see its digest mismatch and re-download).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;

use super::config::UpdateConfig;
use super::types::{DownloadProgress, UpdateObserver};

/// Downloads release assets over HTTP.
pub struct AssetFetcher {
    client: Client,
    base_url: String,
}

impl AssetFetcher {
    /// Create a fetcher from config.
    pub fn new(config: &UpdateConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "ChitChatLauncher/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;

        Ok(Self {
            client,
            base_url: config.release_url.trim_end_matches('/').to_string(),
        })
    }

    /// Download `asset_name` to `save_path`, overwriting any existing file.
    ///
    /// Returns the number of bytes written. Progress is reported after
    /// each chunk, but only when the response carries a Content-Length;
    /// without one the download still completes silently.
    pub async fn download(
        &self,
        save_path: &Path,
        asset_name: &str,
        observer: &mut dyn UpdateObserver,
    ) -> Result<u64, FetchError> {
        let url = format!("{}/{}", self.base_url, asset_name);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        let total = response.content_length().filter(|&t| t > 0);
        let stem = asset_stem(asset_name).to_string();

        // Create/truncate: this process is the only writer for the
        // duration of the download.
        let mut file = File::create(save_path)?;
        let mut written: u64 = 0;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            written += chunk.len() as u64;

            if let Some(total) = total {
                let percent = (written as f32 / total as f32) * 100.0;
                observer.on_progress(DownloadProgress {
                    percent,
                    asset: stem.clone(),
                });
            }
        }

        Ok(written)
    }
}

/// Asset name up to its first `.`, as shown in progress reports.
fn asset_stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Errors that can occur while downloading an asset
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success HTTP status on the asset request
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// Connection, DNS, or transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Destination file cannot be created or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
