//! Full-ranking ("sicko") mode.
//!
//! Instead of tiers, every entity sits in one strict order. The ranking is
//! derived from the tiered state on entry and discarded on exit.

mod derive;
mod moves;
mod types;

pub use derive::{complete_permutation, derive_full_ranking};
pub use moves::move_in_full_ranking;
pub use types::{Direction, FullRanking, RankKey};
