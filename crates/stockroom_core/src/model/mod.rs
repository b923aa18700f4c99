//! Domain entities stored by stockroom repositories.
//!
//! # Responsibility
//! - Define the concrete entity variants and their construction-time checks.
//! - Expose the identity/quantity capabilities repositories operate through.
//!
//! # Invariants
//! - Every entity is identified by a caller-assigned `EntityId`.
//! - A constructed entity is always field-valid; repositories never re-check
//!   fields on insert.

pub mod entity;
pub mod item;
pub mod movement;
pub mod student;
