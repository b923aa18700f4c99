//! Student record entity for roster ingestion.
//!
//! # Responsibility
//! - Define the graded record produced by the delimited-line parser.
//!
//! # Invariants
//! - `score` is a whole number in `0..=100` for every constructed record.

use crate::model::entity::{validate_name, EntityId, FieldValidationError, Keyed};
use serde::{Deserialize, Serialize};

const SCORE_MAX: i64 = 100;

/// One graded student row.
///
/// Carries no quantity facet; student repositories support identity CRUD but
/// not stock updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Stable identity within one roster.
    pub id: EntityId,
    /// Non-empty student name, surrounding whitespace already trimmed.
    pub name: String,
    /// Whole-number score in `0..=100`.
    pub score: u32,
}

impl StudentRecord {
    /// Builds a field-valid student record.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `ScoreOutOfRange` when `score` is outside `0..=100`.
    pub fn try_new(
        id: EntityId,
        name: impl Into<String>,
        score: i64,
    ) -> Result<Self, FieldValidationError> {
        let name = name.into();
        validate_name(&name)?;
        if !(0..=SCORE_MAX).contains(&score) {
            return Err(FieldValidationError::ScoreOutOfRange { value: score });
        }
        Ok(Self {
            id,
            name,
            score: score as u32,
        })
    }
}

impl Keyed for StudentRecord {
    fn key(&self) -> EntityId {
        self.id
    }
}
