//! Use-case services over repository contracts.
//!
//! # Responsibility
//! - Provide stable entry points for core callers (drivers, tests).
//! - Delegate storage decisions to repository and persistence boundaries.
//!
//! # Invariants
//! - Services never bypass repository integrity contracts.
//! - Services stay storage-agnostic apart from the designated movement log.

pub mod inventory_service;
pub mod movement_log;
