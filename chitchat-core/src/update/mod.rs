// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Self-update module
//!
//! Keeps the locally installed client binary in sync with the latest
//! published release:
//! - `integrity` computes and parses SHA-256 digests
//! - `fetcher` streams release assets to disk with progress reporting
//! - `orchestrator` decides whether a download is needed and drives it
//!
//! Failures are never swallowed here; every error propagates to the
//! launcher, which shows it and aborts the launch sequence.

mod config;
mod fetcher;
mod integrity;
mod orchestrator;
mod types;

pub use config::UpdateConfig;
pub use fetcher::{AssetFetcher, FetchError};
pub use integrity::{digests_match, file_digest, parse_manifest_digest, IntegrityError};
pub use orchestrator::{UpdateError, Updater};
pub use types::{DownloadProgress, InstallReason, NullObserver, UpdateObserver, UpdateOutcome};
