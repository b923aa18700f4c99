//! Inventory use-case service.
//!
//! # Responsibility
//! - Provide stable stock-management entry points for core callers.
//! - Delegate ownership and integrity checks to the repository contract.
//!
//! # Invariants
//! - Stock arithmetic is validated by the repository update path, never
//!   re-checked here.
//! - "Not found" and "invalid quantity" stay distinct outcomes all the way
//!   to the caller.

use crate::model::entity::{EntityId, Stocked};
use crate::repo::{RepoResult, Repository};
use log::info;
use std::marker::PhantomData;

/// Stock-management facade over a repository implementation.
pub struct InventoryService<T, R>
where
    T: Stocked,
    R: Repository<T>,
{
    repo: R,
    _entity: PhantomData<T>,
}

impl<T, R> InventoryService<T, R>
where
    T: Stocked,
    R: Repository<T>,
{
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Adds one item to the inventory.
    pub fn add_item(&mut self, item: T) -> RepoResult<()> {
        let id = item.key();
        self.repo.add(item)?;
        info!("event=item_add module=service status=ok id={id}");
        Ok(())
    }

    /// Returns a clone of the stored item.
    pub fn get_item(&self, id: EntityId) -> RepoResult<T>
    where
        T: Clone,
    {
        self.repo.get(id).cloned()
    }

    /// Removes and returns one item.
    pub fn remove_item(&mut self, id: EntityId) -> RepoResult<T> {
        let removed = self.repo.remove(id)?;
        info!("event=item_remove module=service status=ok id={id}");
        Ok(removed)
    }

    /// Returns a snapshot of all items in insertion order.
    pub fn list_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.repo.get_all()
    }

    /// Replaces one item's quantity.
    ///
    /// # Errors
    /// - `InvalidQuantity` when `quantity` is below zero.
    /// - `NotFound` when the id is absent.
    pub fn set_quantity(&mut self, id: EntityId, quantity: i64) -> RepoResult<()> {
        self.repo.update_quantity(id, quantity)?;
        info!("event=quantity_set module=service status=ok id={id} quantity={quantity}");
        Ok(())
    }

    /// Raises one item's stock by `amount` and returns the new quantity.
    pub fn increase_stock(&mut self, id: EntityId, amount: u32) -> RepoResult<u32> {
        let requested = i64::from(self.repo.get(id)?.quantity()) + i64::from(amount);
        self.repo.update_quantity(id, requested)?;
        info!("event=stock_increase module=service status=ok id={id} quantity={requested}");
        Ok(requested as u32)
    }

    /// Lowers one item's stock by `amount` and returns the new quantity.
    ///
    /// # Errors
    /// - `NotFound` when the id is absent.
    /// - `InvalidQuantity` when the decrement would take the stock below
    ///   zero; the stored quantity stays unchanged.
    pub fn decrease_stock(&mut self, id: EntityId, amount: u32) -> RepoResult<u32> {
        let requested = i64::from(self.repo.get(id)?.quantity()) - i64::from(amount);
        self.repo.update_quantity(id, requested)?;
        info!("event=stock_decrease module=service status=ok id={id} quantity={requested}");
        Ok(requested as u32)
    }

    /// Returns the first item matching `predicate` in insertion order.
    pub fn find_item<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.repo.find_first(predicate)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}
