//! Binary snapshot persistence for the fleet.
//!
//! The full ordered fleet is serialized with bincode to a single file at a
//! well-known path. Writes go to a temp sibling and are renamed into place so
//! a crash never leaves a half-written snapshot. A BLAKE3 hash of the payload
//! is appended as a footer for integrity verification:
//! `[bincode payload][magic 4 bytes][BLAKE3 32 bytes]`.
//!
//! The format is private to this crate; there is no cross-version contract.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fleet::Fleet;

/// Magic bytes separating the payload from the checksum footer.
const SNAPSHOT_MAGIC: &[u8; 4] = b"FKS1";

/// Footer length: magic plus a 32-byte BLAKE3 hash.
const FOOTER_LEN: usize = 4 + 32;

/// The serialized snapshot payload.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    /// When this snapshot was written.
    saved_at: DateTime<Utc>,
    /// The full fleet state, in insertion order.
    fleet: Fleet,
}

/// Save the fleet to a snapshot file, replacing any prior snapshot.
///
/// Parent directories are created as needed. The snapshot is written to a
/// `.tmp` sibling first and renamed over the target, so the prior snapshot
/// survives a crash mid-write.
///
/// # Errors
///
/// Returns an error if the fleet cannot be encoded or the file cannot be
/// written or published.
pub fn save(fleet: &Fleet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let snapshot = Snapshot {
        saved_at: Utc::now(),
        fleet: fleet.clone(),
    };
    let payload = bincode::serialize(&snapshot).map_err(|err| Error::SnapshotEncode {
        message: err.to_string(),
    })?;
    let checksum = blake3::hash(&payload);

    let mut output = Vec::with_capacity(payload.len() + FOOTER_LEN);
    output.extend_from_slice(&payload);
    output.extend_from_slice(SNAPSHOT_MAGIC);
    output.extend_from_slice(checksum.as_bytes());

    // Write-then-publish: the snapshot only replaces the prior one atomically.
    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, &output).map_err(|source| Error::SnapshotWrite {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| Error::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Saved snapshot of {} boats to {}",
        fleet.len(),
        path.display()
    );
    Ok(())
}

/// Load the fleet from a snapshot file, verifying its integrity.
///
/// # Errors
///
/// Returns [`Error::SnapshotRead`] if the file cannot be read and
/// [`Error::SnapshotDecode`] if the footer, checksum, or payload is invalid.
pub fn load(path: impl AsRef<Path>) -> Result<Fleet> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| Error::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;

    if raw.len() < FOOTER_LEN {
        return Err(decode_error(path, "file too short to hold a footer"));
    }

    let (payload, footer) = raw.split_at(raw.len() - FOOTER_LEN);
    if &footer[..4] != SNAPSHOT_MAGIC {
        return Err(decode_error(path, "bad magic bytes in footer"));
    }

    let checksum = blake3::hash(payload);
    if checksum.as_bytes() != &footer[4..] {
        return Err(decode_error(path, "checksum mismatch"));
    }

    let snapshot: Snapshot = bincode::deserialize(payload)
        .map_err(|err| decode_error(path, &err.to_string()))?;

    info!(
        "Restored {} boats from snapshot saved at {}",
        snapshot.fleet.len(),
        snapshot.saved_at.to_rfc3339()
    );
    Ok(snapshot.fleet)
}

/// Load the fleet from a snapshot, degrading to an empty fleet on failure.
///
/// A missing snapshot is the normal first-run case and logs at debug level;
/// an unreadable or corrupt snapshot logs a warning. Neither fails the
/// process.
#[must_use]
pub fn load_or_empty(path: impl AsRef<Path>) -> Fleet {
    let path = path.as_ref();
    match load(path) {
        Ok(fleet) => fleet,
        Err(Error::SnapshotRead { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!(
                "No snapshot at {}, starting with an empty fleet",
                path.display()
            );
            Fleet::new()
        }
        Err(err) => {
            warn!("{err}; starting with an empty fleet");
            Fleet::new()
        }
    }
}

/// The temp sibling a snapshot is staged at before rename.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn decode_error(path: &Path, message: &str) -> Error {
    Error::SnapshotDecode {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
