//! JSON log encode/decode and atomic file replacement.
//!
//! # Responsibility
//! - Serialize a full entity sequence into one self-describing JSON document.
//! - Restore the sequence, rejecting the first malformed record.
//!
//! # Invariants
//! - Saves go through a sibling temp file plus rename, so a crash mid-write
//!   cannot surface as a valid log.
//! - Loading a missing file yields an empty sequence, not an error.

use super::{PersistError, PersistResult};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every entity to `destination`, replacing any prior content.
///
/// Records are encoded as one JSON array carrying all fields by name, in the
/// order given.
///
/// # Errors
/// - `Io` when the destination (or its sibling temp file) cannot be written.
/// - `Document` when encoding fails.
pub fn save<T: Serialize>(entities: &[T], destination: impl AsRef<Path>) -> PersistResult<()> {
    let destination = destination.as_ref();
    let encoded = serde_json::to_string_pretty(entities).map_err(PersistError::Document)?;

    let staging = staging_path(destination);
    if let Err(err) = fs::write(&staging, encoded.as_bytes()) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }
    if let Err(err) = fs::rename(&staging, destination) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    info!(
        "event=log_save module=persist status=ok records={} path={}",
        entities.len(),
        destination.display()
    );
    Ok(())
}

/// Reads the full persisted sequence from `source`.
///
/// A missing file is reported as "no data" and yields an empty sequence.
/// The file is parsed as one document first; each record then decodes
/// individually so failures carry their 1-based position.
///
/// # Errors
/// - `Io` when the file exists but cannot be read.
/// - `Document` when the content is not a JSON sequence.
/// - `MalformedRecord` when a record does not match the entity field set;
///   decoding stops there and no partial sequence is returned.
pub fn load<T: DeserializeOwned>(source: impl AsRef<Path>) -> PersistResult<Vec<T>> {
    let source = source.as_ref();
    let raw = match fs::read_to_string(source) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(
                "event=log_load module=persist status=ok records=0 detail=no_data path={}",
                source.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let records: Vec<Value> = serde_json::from_str(&raw).map_err(PersistError::Document)?;
    let mut entities = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let entity = serde_json::from_value(record).map_err(|err| PersistError::MalformedRecord {
            record: position + 1,
            detail: err.to_string(),
        })?;
        entities.push(entity);
    }

    info!(
        "event=log_load module=persist status=ok records={} path={}",
        entities.len(),
        source.display()
    );
    Ok(entities)
}

fn staging_path(destination: &Path) -> PathBuf {
    let mut staging = destination.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}
