// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the self-update subsystem

use std::path::PathBuf;
use std::time::Duration;

/// Default release download endpoint.
pub const DEFAULT_RELEASE_URL: &str =
    "https://github.com/Joco223/ChitChat/releases/latest/download";

/// Configuration for the update orchestrator and fetcher.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// Directory holding the client binary and, transiently, the
    /// downloaded manifest file. Created on demand.
    pub install_dir: PathBuf,

    /// Base URL release assets are downloaded from.
    pub release_url: String,

    /// Release asset name of the client binary.
    pub binary_asset: String,

    /// Release asset name of the SHA-256 manifest published next to it.
    pub manifest_asset: String,

    /// Whole-request timeout for asset downloads.
    pub timeout: Duration,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from("."),
            release_url: DEFAULT_RELEASE_URL.to_string(),
            binary_asset: "ChitChatClient.exe".to_string(),
            manifest_asset: "ChitChatClientSHA256.txt".to_string(),
            timeout: Duration::from_secs(300), // binaries, not JSON blobs
        }
    }
}

impl UpdateConfig {
    /// Set the install directory.
    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = dir.into();
        self
    }

    /// Set the release download base URL.
    pub fn with_release_url(mut self, url: impl Into<String>) -> Self {
        self.release_url = url.into();
        self
    }

    /// Full path of the installed client binary.
    pub fn binary_path(&self) -> PathBuf {
        self.install_dir.join(&self.binary_asset)
    }

    /// Full path the manifest is downloaded to.
    pub fn manifest_path(&self) -> PathBuf {
        self.install_dir.join(&self.manifest_asset)
    }
}
