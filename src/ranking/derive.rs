//! Deriving a full ranking from the tiered assignment.

use std::collections::HashSet;

use tracing::debug;

use super::types::FullRanking;
use crate::assignment::AssignmentState;
use crate::catalogue::{Catalogue, EntityId};
use crate::tiers::TierId;

/// Concatenates the tiers into one total order.
///
/// Tiers are walked in declaration order. Manual tiers contribute their
/// stored order, the others their alphabetical order. The pool,
/// alphabetically, follows `pool_after`. The result is then made a
/// permutation of the catalogue: unknown and repeated ids are dropped and
/// anything still missing is appended in catalogue order.
pub fn derive_full_ranking(
    catalogue: &Catalogue,
    state: &AssignmentState,
    pool_after: TierId,
) -> Vec<EntityId> {
    let mut sequence = Vec::with_capacity(catalogue.len());

    for (tier, slot) in state.iter() {
        if state.is_manual(tier) {
            sequence.extend(slot.members.iter().cloned());
        } else {
            sequence.extend(catalogue.sorted_by_name(&slot.members));
        }
        if tier == pool_after {
            sequence.extend(state.pool(catalogue));
        }
    }

    complete_permutation(catalogue, sequence)
}

/// Drops unknown and repeated ids, then appends missing catalogue ids.
pub fn complete_permutation(catalogue: &Catalogue, sequence: Vec<EntityId>) -> Vec<EntityId> {
    let mut seen: HashSet<EntityId> = HashSet::with_capacity(catalogue.len());
    let mut out: Vec<EntityId> = sequence
        .into_iter()
        .filter(|id| catalogue.contains(id.as_str()) && seen.insert(id.clone()))
        .collect();

    let before = out.len();
    out.extend(catalogue.ids().filter(|id| !seen.contains(*id)).cloned());
    if out.len() != before {
        debug!(appended = out.len() - before, "ranking completed with missing entities");
    }
    out
}

impl FullRanking {
    /// Builds the ranking for entering full-ranking mode.
    pub fn derive(catalogue: &Catalogue, state: &AssignmentState, pool_after: TierId) -> Self {
        FullRanking::new(derive_full_ranking(catalogue, state, pool_after))
    }

    /// Whether the sequence holds every catalogue entity exactly once.
    pub fn is_complete(&self, catalogue: &Catalogue) -> bool {
        if self.sequence.len() != catalogue.len() {
            return false;
        }
        let distinct: HashSet<&str> = self.sequence.iter().map(EntityId::as_str).collect();
        distinct.len() == catalogue.len() && distinct.iter().all(|id| catalogue.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Move;
    use crate::catalogue::Entity;
    use crate::tiers::Container;

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Entity::new("a", "Alpha", "X"),
            Entity::new("b", "Beta", "X"),
            Entity::new("c", "Gamma", "Y"),
            Entity::new("d", "Delta", "Y"),
            Entity::new("e", "Epsilon", "Y"),
            Entity::new("f", "Zeta", "Z"),
        ])
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<EntityId> {
        list.iter().map(|s| EntityId::from(*s)).collect()
    }

    fn place(state: AssignmentState, id: &str, to: TierId) -> AssignmentState {
        let from = state.container_of(id);
        state
            .move_entity(&catalogue(), &Move::new(id, from, Container::Tier(to)))
            .unwrap()
    }

    #[test]
    fn test_initial_state_is_alphabetical() {
        let seq = derive_full_ranking(&catalogue(), &AssignmentState::initial(), TierId::Neutral);
        assert_eq!(seq, ids(&["a", "b", "d", "e", "c", "f"]));
    }

    #[test]
    fn test_tier_order_and_pool_splice() {
        let s = AssignmentState::initial();
        let s = place(s, "f", TierId::Favorite);
        let s = place(s, "a", TierId::AlwaysLose);
        let s = place(s, "e", TierId::Negative);
        let s = place(s, "c", TierId::Neutral);

        let seq = derive_full_ranking(&catalogue(), &s, TierId::Neutral);
        // favorite, neutral, pool (b, d), negative, always_lose
        assert_eq!(seq, ids(&["f", "c", "b", "d", "e", "a"]));
    }

    #[test]
    fn test_manual_tier_keeps_order() {
        let s = AssignmentState::initial()
            .toggle_ordering(&catalogue(), TierId::Positive, true)
            .unwrap();
        let s = place(s, "f", TierId::Positive);
        let s = place(s, "a", TierId::Positive);

        let seq = derive_full_ranking(&catalogue(), &s, TierId::Neutral);
        assert_eq!(&seq[..2], ids(&["f", "a"]).as_slice());
    }

    #[test]
    fn test_complete_permutation_repairs() {
        let seq = complete_permutation(&catalogue(), ids(&["c", "ghost", "c", "a"]));
        assert_eq!(seq, ids(&["c", "a", "b", "d", "e", "f"]));
    }

    #[test]
    fn test_is_complete() {
        let c = catalogue();
        assert!(FullRanking::derive(&c, &AssignmentState::initial(), TierId::Neutral).is_complete(&c));
        assert!(!FullRanking::new(ids(&["a", "a", "b", "c", "d", "e"])).is_complete(&c));
        assert!(!FullRanking::new(ids(&["a"])).is_complete(&c));
    }
}
