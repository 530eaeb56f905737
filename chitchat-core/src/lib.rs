//! ChitChat Launcher Core Library
//!
//! Self-update subsystem for the ChitChat desktop client: SHA-256
//! integrity verification, streaming release asset downloads, and the
//! update orchestration driven by the launcher. Also contains the
//! release-notes markdown classifier used to display changelogs.

pub mod release_notes;
pub mod update;

pub use update::{
    AssetFetcher, DownloadProgress, FetchError, InstallReason, IntegrityError, NullObserver,
    UpdateConfig, UpdateError, UpdateObserver, UpdateOutcome, Updater,
};
