// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Update orchestration
//!
//! Decides whether the installed client binary needs replacing and
//! drives the fetcher accordingly:
//!
//! ```text
//! binary missing            -> download fresh        -> Installed
//! binary present, digest == -> nothing               -> UpToDate
//! binary present, digest != -> delete old, download  -> Installed
//! ```
//!
//! Nothing is caught here. Manifest fetch, digest computation, and
//! binary download errors all propagate to the launcher, which shows
//! them and does not exec the client.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::config::UpdateConfig;
use super::fetcher::{AssetFetcher, FetchError};
use super::integrity::{self, IntegrityError};
use super::types::{InstallReason, UpdateObserver, UpdateOutcome};

const DOWNLOADING_NOTICE: &str = "Downloading new version";

/// Orchestrates a single update check/install run.
///
/// Holds no per-call state; construct once, call [`Updater::update_app`]
/// once per launcher process.
pub struct Updater {
    config: UpdateConfig,
    fetcher: AssetFetcher,
}

impl Updater {
    /// Create an updater from config.
    pub fn new(config: UpdateConfig) -> Result<Self, UpdateError> {
        let fetcher = AssetFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Bring the local binary in sync with the latest published release.
    ///
    /// With no binary installed, the manifest is not even fetched: the
    /// binary is downloaded directly. Otherwise the small manifest asset
    /// is fetched first and a matching digest short-circuits with no
    /// further network cost.
    ///
    /// On a mismatch the old binary is deleted *before* the replacement
    /// download starts; a failure after that point leaves no binary on
    /// disk, and the caller sees the error.
    pub async fn update_app(
        &self,
        observer: &mut dyn UpdateObserver,
    ) -> Result<UpdateOutcome, UpdateError> {
        let binary_path = self.config.binary_path();
        fs::create_dir_all(&self.config.install_dir)?;

        if !binary_path.exists() {
            observer.on_notify(DOWNLOADING_NOTICE);
            self.fetcher
                .download(&binary_path, &self.config.binary_asset, observer)
                .await?;
            return Ok(UpdateOutcome::Installed {
                reason: InstallReason::FreshInstall,
            });
        }

        let manifest_path = self.config.manifest_path();
        self.fetcher
            .download(&manifest_path, &self.config.manifest_asset, observer)
            .await?;

        let manifest = fs::read_to_string(&manifest_path)?;
        let published = integrity::parse_manifest_digest(&manifest)?;
        let local = integrity::file_digest(&binary_path)?;

        if integrity::digests_match(&local, &published) {
            return Ok(UpdateOutcome::UpToDate);
        }

        fs::remove_file(&binary_path)?;
        observer.on_notify(DOWNLOADING_NOTICE);
        self.fetcher
            .download(&binary_path, &self.config.binary_asset, observer)
            .await?;

        Ok(UpdateOutcome::Installed {
            reason: InstallReason::DigestMismatch,
        })
    }

    /// Path the launcher execs after a successful run.
    pub fn binary_path(&self) -> PathBuf {
        self.config.binary_path()
    }

    /// Get the configuration.
    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }
}

/// Errors that can occur during an update run
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Asset download failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Manifest parsing or digest computation failed
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Local filesystem operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
