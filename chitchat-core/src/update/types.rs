// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared types for the update subsystem

/// Byte-level progress for a single asset download.
///
/// Delivered zero or many times per download: never when the server
/// omits Content-Length, and not guaranteed to land on exactly 100.
/// Within one asset the reported percentages never decrease.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadProgress {
    /// Percent complete, 0.0 to 100.0.
    pub percent: f32,
    /// Asset name with its extension stripped.
    pub asset: String,
}

/// Result of one update run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A new binary was downloaded and installed.
    Installed {
        /// Why the download happened.
        reason: InstallReason,
    },
    /// The local binary already matches the published release.
    UpToDate,
}

impl UpdateOutcome {
    /// Whether this run replaced the local binary.
    pub fn updated(&self) -> bool {
        matches!(self, UpdateOutcome::Installed { .. })
    }
}

/// Why the orchestrator decided to download a binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallReason {
    /// No binary was present locally.
    FreshInstall,
    /// The local digest did not match the published manifest.
    DigestMismatch,
}

/// Observer for update progress and notifications.
///
/// Both methods default to no-ops, so callers only implement what
/// they display.
pub trait UpdateObserver {
    /// Called after each downloaded chunk when the total size is known.
    fn on_progress(&mut self, _progress: DownloadProgress) {}

    /// Called at most once per update run, just before a fresh or
    /// replacement binary download starts.
    fn on_notify(&mut self, _message: &str) {}
}

/// Observer that ignores all events.
pub struct NullObserver;

impl UpdateObserver for NullObserver {}
