//! Stock-movement log entity.
//!
//! # Responsibility
//! - Define the record shape persisted by the movement log.
//!
//! # Invariants
//! - `recorded_at` is supplied by the caller; the core never reads a clock.

use crate::model::entity::{
    validate_name, validate_quantity, EntityId, FieldValidationError, Keyed, Stocked,
};
use serde::{Deserialize, Serialize};

/// One inventory movement, the designated persisted-log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    /// Stable identity within one movement log.
    pub id: EntityId,
    /// Non-empty label of the moved item.
    pub name: String,
    /// Units moved.
    pub quantity: u32,
    /// Movement instant in Unix epoch milliseconds.
    pub recorded_at: i64,
}

impl StockMovement {
    /// Builds a field-valid movement record.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `InvalidQuantity` when `quantity` is negative.
    pub fn try_new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        recorded_at: i64,
    ) -> Result<Self, FieldValidationError> {
        let name = name.into();
        validate_name(&name)?;
        let quantity = validate_quantity(quantity)?;
        Ok(Self {
            id,
            name,
            quantity,
            recorded_at,
        })
    }
}

impl Keyed for StockMovement {
    fn key(&self) -> EntityId {
        self.id
    }
}

impl Stocked for StockMovement {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
