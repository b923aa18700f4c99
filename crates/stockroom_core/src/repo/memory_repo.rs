//! In-memory repository implementation.
//!
//! # Responsibility
//! - Own entity instances in insertion order.
//! - Serve identity lookups through an O(1) key index.
//!
//! # Invariants
//! - `index` maps every stored key to its current position in `items`.
//! - Removal is O(n): the vector compacts and shifted positions reindex.

use crate::model::entity::{EntityId, Keyed, Stocked};
use crate::repo::{RepoError, RepoResult, Repository};
use std::collections::HashMap;

/// Keyed in-memory store over one entity variant.
///
/// The repository takes ownership of every entity handed to [`Repository::add`]
/// and is its sole owner until removal.
#[derive(Debug)]
pub struct MemoryRepository<T: Keyed> {
    items: Vec<T>,
    index: HashMap<EntityId, usize>,
}

impl<T: Keyed> MemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> Repository<T> for MemoryRepository<T> {
    fn add(&mut self, item: T) -> RepoResult<()> {
        let key = item.key();
        if self.index.contains_key(&key) {
            return Err(RepoError::DuplicateKey(key));
        }

        self.index.insert(key, self.items.len());
        self.items.push(item);
        Ok(())
    }

    fn get(&self, id: EntityId) -> RepoResult<&T> {
        let position = self.index.get(&id).copied().ok_or(RepoError::NotFound(id))?;
        Ok(&self.items[position])
    }

    fn remove(&mut self, id: EntityId) -> RepoResult<T> {
        let position = self.index.remove(&id).ok_or(RepoError::NotFound(id))?;
        let removed = self.items.remove(position);

        // Entities behind the removed slot shifted left by one.
        for stored_position in self.index.values_mut() {
            if *stored_position > position {
                *stored_position -= 1;
            }
        }

        Ok(removed)
    }

    fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    fn update_quantity(&mut self, id: EntityId, quantity: i64) -> RepoResult<()>
    where
        T: Stocked,
    {
        let quantity = u32::try_from(quantity).map_err(|_| RepoError::InvalidQuantity {
            id,
            requested: quantity,
        })?;
        let position = self.index.get(&id).copied().ok_or(RepoError::NotFound(id))?;
        self.items[position].set_quantity(quantity);
        Ok(())
    }

    fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
