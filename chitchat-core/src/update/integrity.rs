// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary integrity verification using SHA-256 digests
//!
//! The release publishes a `sha256sum`-style manifest next to each
//! binary asset. The launcher compares the digest parsed from that
//! manifest against the digest of the installed binary to decide
//! whether a new download is needed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ring::digest::{Context, SHA256};
use thiserror::Error;

/// Read buffer size for digest computation.
const DIGEST_BUF_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file as lowercase hex.
///
/// The file is read sequentially in fixed-size chunks, so large
/// binaries are never held in memory whole. I/O failures propagate.
pub fn file_digest(path: &Path) -> Result<String, IntegrityError> {
    let mut file = File::open(path)?;
    let mut context = Context::new(&SHA256);
    let mut buf = [0u8; DIGEST_BUF_SIZE];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        context.update(&buf[..read]);
    }

    Ok(hex::encode(context.finish().as_ref()))
}

/// Extract the digest from manifest text.
///
/// Manifest format: `<hex-digest> <filename>` (the conventional
/// `sha256sum` output). Returns everything before the first space.
/// The digest itself is not validated for length or charset.
pub fn parse_manifest_digest(manifest: &str) -> Result<String, IntegrityError> {
    manifest
        .split_once(' ')
        .map(|(digest, _)| digest.to_string())
        .ok_or(IntegrityError::MissingDelimiter)
}

/// Compare two hex digests, ignoring case.
///
/// A manifest generator emitting uppercase hex must not force a
/// redundant re-download.
pub fn digests_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Errors that can occur during integrity checks
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// Manifest text contains no space delimiter
    #[error("Manifest is malformed: no space delimiter found")]
    MissingDelimiter,

    /// Local file cannot be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
