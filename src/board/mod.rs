//! Tier-list board.
//!
//! [`Board`] owns the current [`Session`] and is the single entry point for
//! user gestures. It delegates the state transitions to
//! [`assignment`](crate::assignment) and [`ranking`](crate::ranking), and
//! persists every change through a [`SessionStore`](crate::persist::SessionStore).
//!
//! # Modes
//!
//! - **Normal**: entities are spread over six tiers and the pool.
//! - **Full ranking**: every entity sits in one strict order.
//!
//! Entering full ranking derives the order from the tiers. Leaving it drops
//! everyone into the collapse tier.

mod engine;
mod readiness;
mod types;
mod view;

pub use engine::Board;
pub use readiness::{export_readiness, is_export_ready};
pub use types::{Readiness, Session};
pub use view::{BoardView, EntityView, TierView};
