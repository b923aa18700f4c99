//! Derived secondary index over repository contents.
//!
//! # Responsibility
//! - Group a snapshot of stored entities by a caller-chosen key.
//!
//! # Invariants
//! - The index is a point-in-time snapshot; repository mutations after the
//!   build are not reflected until the caller rebuilds it.
//! - Group members keep repository insertion order.

use crate::model::entity::Keyed;
use crate::repo::Repository;
use std::collections::HashMap;
use std::hash::Hash;

/// Builds a grouping of all stored entities keyed by `key_fn`.
///
/// One full pass over [`Repository::get_all`]. The repository does not
/// maintain this mapping; rebuild after any `add`/`remove`.
pub fn build_index<T, R, K, F>(repo: &R, key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Keyed + Clone,
    R: Repository<T>,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in repo.get_all() {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}
