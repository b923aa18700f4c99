//! Core domain logic for Stockroom.
//! This crate is the single source of truth for inventory invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod roster;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{EntityId, FieldValidationError, Keyed, Stocked};
pub use model::item::{ElectronicItem, GroceryItem};
pub use model::movement::StockMovement;
pub use model::student::StudentRecord;
pub use persist::{PersistError, PersistResult};
pub use repo::index::build_index;
pub use repo::memory_repo::MemoryRepository;
pub use repo::{RepoError, RepoResult, Repository};
pub use roster::{load_roster, parse_line, parse_roster, Grade, RosterError, RosterResult};
pub use service::inventory_service::InventoryService;
pub use service::movement_log::{MovementLog, MovementLogError, MovementLogResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
