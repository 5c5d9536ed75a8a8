//! Tiered assignment: the container-reconciliation engine.
//!
//! Maps each entity to at most one tier. Transitions are pure: they read the
//! current [`AssignmentState`] and return a new one (or `None` when nothing
//! changes), so snapshots can be shared freely.
//!
//! # Invariants
//!
//! - An entity is in at most one tier; the rest form the pool.
//! - Single-capacity tiers hold at most one entity.
//! - Tiers not in manual mode are sorted by name (case-insensitive, ties by
//!   catalogue position).
//! - The pool is derived on demand and always alphabetical.

mod reconcile;
mod types;

pub use reconcile::Move;
pub use types::{AssignmentState, TierSlot};
