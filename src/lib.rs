//! Tier-list ranking engine.
//!
//! Users spread a fixed catalogue of entities (FBS college football teams
//! in the shipped data) over six affection tiers, or rank every entity in
//! one strict order:
//!
//! - **Catalogue**: immutable entity registry with the alphabetical
//!   comparison every sorted view shares, plus ingestion of the remote
//!   listing into the static artifact.
//! - **Tiers**: the fixed tier descriptors (capacity, ordering policy,
//!   export marker) and the board configuration.
//! - **Assignment**: the tier state, pool derivation and the move
//!   reconciliation rules (single-capacity swap, manual vs. alphabetical
//!   order).
//! - **Ranking**: full-ranking derivation from the tiers and keyboard or
//!   drag reordering.
//! - **Board**: session owner; routes gestures, enforces the export
//!   completion policy and persists after every change.
//! - **Persist**: versioned session blob and the storage port.
//! - **Export**: plain text and the image card layout.
//!
//! # Architecture
//!
//! Every transition is a pure function from one immutable snapshot to the
//! next; [`board::Board`] swaps snapshots wholesale. Invalid gestures leave
//! the session unchanged rather than failing. The optional `wasm` feature
//! exposes the board to JavaScript.

pub mod assignment;
pub mod board;
pub mod catalogue;
pub mod error;
pub mod export;
pub mod persist;
pub mod ranking;
pub mod tiers;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, TierError};
