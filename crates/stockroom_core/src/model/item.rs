//! Warehouse item entity variants.
//!
//! # Responsibility
//! - Define the stocked item shapes managed by inventory repositories.
//! - Validate item fields at construction time.
//!
//! # Invariants
//! - `id` is caller-assigned and never changes for the item lifetime.
//! - `quantity` is the only field mutated after construction, and only
//!   through the repository update path.

use crate::model::entity::{
    validate_name, validate_quantity, EntityId, FieldValidationError, Keyed, Stocked,
};
use serde::{Deserialize, Serialize};

/// Electronics stock item with warranty metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    /// Stable identity within one repository.
    pub id: EntityId,
    /// Non-empty display label.
    pub name: String,
    /// Units currently on hand.
    pub quantity: u32,
    /// Manufacturer label. Opaque to the repository.
    pub brand: String,
    /// Warranty period in whole months.
    pub warranty_months: u32,
}

impl ElectronicItem {
    /// Builds a field-valid electronics item.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `InvalidQuantity` when `quantity` is negative.
    pub fn try_new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Result<Self, FieldValidationError> {
        let name = name.into();
        validate_name(&name)?;
        let quantity = validate_quantity(quantity)?;
        Ok(Self {
            id,
            name,
            quantity,
            brand: brand.into(),
            warranty_months,
        })
    }
}

impl Keyed for ElectronicItem {
    fn key(&self) -> EntityId {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

/// Perishable stock item with an expiry timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Stable identity within one repository.
    pub id: EntityId,
    /// Non-empty display label.
    pub name: String,
    /// Units currently on hand.
    pub quantity: u32,
    /// Expiry instant in Unix epoch milliseconds. Opaque to the repository.
    pub expires_at: i64,
}

impl GroceryItem {
    /// Builds a field-valid grocery item.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `InvalidQuantity` when `quantity` is negative.
    pub fn try_new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        expires_at: i64,
    ) -> Result<Self, FieldValidationError> {
        let name = name.into();
        validate_name(&name)?;
        let quantity = validate_quantity(quantity)?;
        Ok(Self {
            id,
            name,
            quantity,
            expires_at,
        })
    }
}

impl Keyed for GroceryItem {
    fn key(&self) -> EntityId {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
