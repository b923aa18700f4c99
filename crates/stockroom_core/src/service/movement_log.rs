//! Persisted stock-movement log.
//!
//! # Responsibility
//! - Accumulate movement records in arrival order.
//! - Round-trip the full log through the JSON persistence boundary.
//!
//! # Invariants
//! - Movement ids stay unique within one log, including after a reload.
//! - A reload never merges in place; it always builds a fresh log.

use crate::model::movement::StockMovement;
use crate::persist::{self, PersistError};
use crate::repo::memory_repo::MemoryRepository;
use crate::repo::{RepoError, Repository};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type MovementLogResult<T> = Result<T, MovementLogError>;

/// Error surface for movement-log operations.
#[derive(Debug)]
pub enum MovementLogError {
    /// Identity violation while recording or rebuilding the log.
    Repo(RepoError),
    /// Save/load failure at the persistence boundary.
    Persist(PersistError),
}

impl Display for MovementLogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MovementLogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<RepoError> for MovementLogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<PersistError> for MovementLogError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// The designated persisted collection: an in-memory movement repository
/// plus its durable JSON log.
#[derive(Debug, Default)]
pub struct MovementLog {
    repo: MemoryRepository<StockMovement>,
}

impl MovementLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one movement record.
    ///
    /// # Errors
    /// - `Repo(DuplicateKey)` when the movement id is already logged.
    pub fn record(&mut self, movement: StockMovement) -> MovementLogResult<()> {
        self.repo.add(movement)?;
        Ok(())
    }

    /// Returns a snapshot of all movements in arrival order.
    pub fn entries(&self) -> Vec<StockMovement> {
        self.repo.get_all()
    }

    /// Number of logged movements.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    /// Whether the log holds no movements.
    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Persists the full log to `path`, replacing any prior content.
    pub fn save_to(&self, path: impl AsRef<Path>) -> MovementLogResult<()> {
        persist::save(&self.repo.get_all(), path)?;
        Ok(())
    }

    /// Rebuilds a log from `path`. A missing file yields an empty log.
    ///
    /// # Errors
    /// - `Persist` when the file cannot be read or a record is malformed.
    /// - `Repo(DuplicateKey)` when the persisted sequence repeats an id.
    pub fn load_from(path: impl AsRef<Path>) -> MovementLogResult<Self> {
        let mut log = Self::new();
        for movement in persist::load::<StockMovement>(path)? {
            log.repo.add(movement)?;
        }
        Ok(log)
    }
}
