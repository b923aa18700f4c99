//! Durable JSON persistence for repository contents.
//!
//! # Responsibility
//! - Round-trip a full entity sequence to and from a file.
//! - Surface structural decode failures with their record position.
//!
//! # Invariants
//! - A save is all-or-nothing: a failed write never replaces the prior log.
//! - A load is all-or-nothing: the first malformed record aborts decoding.

mod json_log;

pub use json_log::{load, save};

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence error for movement-log save/load operations.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying file read/write failure.
    Io(std::io::Error),
    /// The file content is not a JSON sequence of records.
    Document(serde_json::Error),
    /// One record inside the sequence failed to decode. `record` is 1-based.
    MalformedRecord { record: usize, detail: String },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Document(err) => write!(f, "persisted log is not a record sequence: {err}"),
            Self::MalformedRecord { record, detail } => {
                write!(f, "malformed record {record}: {detail}")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Document(err) => Some(err),
            Self::MalformedRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
