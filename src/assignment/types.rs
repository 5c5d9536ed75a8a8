//! Assignment state types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::catalogue::{Catalogue, EntityId};
use crate::tiers::{Container, TierId};

/// Contents and ordering mode of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSlot {
    /// Stored ordering flag. Only honored by toggleable unbounded tiers.
    #[serde(default)]
    pub ordered: bool,
    /// Members, in manual order or alphabetical order depending on mode.
    #[serde(default, alias = "teamIds")]
    pub members: Vec<EntityId>,
}

impl TierSlot {
    fn empty(tier: TierId) -> Self {
        Self {
            ordered: tier.descriptor().default_ordered,
            members: Vec::new(),
        }
    }
}

/// Which tier holds which entity.
///
/// Every tier is always present. An entity appears in at most one tier;
/// entities in no tier make up the pool, which is derived and never stored.
///
/// Serializes as a map keyed by tier id; tiers missing from the input come
/// back empty with their default ordering flag, unknown keys are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, TierSlot>",
    into = "BTreeMap<TierId, TierSlot>"
)]
pub struct AssignmentState {
    slots: [TierSlot; 6],
}

impl Default for AssignmentState {
    fn default() -> Self {
        Self::initial()
    }
}

impl AssignmentState {
    /// Every tier empty with its default ordering flag.
    pub fn initial() -> Self {
        Self {
            slots: TierId::ALL.map(TierSlot::empty),
        }
    }

    pub fn slot(&self, tier: TierId) -> &TierSlot {
        &self.slots[tier as usize]
    }

    pub(crate) fn slot_mut(&mut self, tier: TierId) -> &mut TierSlot {
        &mut self.slots[tier as usize]
    }

    pub fn members(&self, tier: TierId) -> &[EntityId] {
        &self.slot(tier).members
    }

    /// Whether `tier` currently keeps manual order.
    pub fn is_manual(&self, tier: TierId) -> bool {
        tier.descriptor().is_manual(self.slot(tier).ordered)
    }

    /// Tiers with their slots, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TierId, &TierSlot)> + '_ {
        TierId::ALL.into_iter().map(move |t| (t, self.slot(t)))
    }

    /// The container currently holding `id`; unknown ids are in the pool.
    pub fn container_of(&self, id: &str) -> Container {
        self.iter()
            .find(|(_, slot)| slot.members.iter().any(|m| m.as_str() == id))
            .map(|(t, _)| Container::Tier(t))
            .unwrap_or(Container::Pool)
    }

    /// Ids held by any tier.
    pub fn assigned(&self) -> HashSet<&str> {
        self.slots
            .iter()
            .flat_map(|s| s.members.iter().map(EntityId::as_str))
            .collect()
    }

    /// The pool: catalogue entities in no tier, alphabetically.
    pub fn pool(&self, catalogue: &Catalogue) -> Vec<EntityId> {
        catalogue.complement(&self.assigned())
    }

    /// Removes `id` from whichever tier holds it.
    pub(crate) fn remove(&mut self, id: &str) {
        for slot in &mut self.slots {
            slot.members.retain(|m| m.as_str() != id);
        }
    }

    /// Enforces capacity and re-sorts every tier not in manual mode.
    pub(crate) fn normalize(&mut self, catalogue: &Catalogue) {
        for tier in TierId::ALL {
            let manual = self.is_manual(tier);
            let slot = self.slot_mut(tier);
            if let Some(limit) = tier.descriptor().capacity.limit() {
                slot.members.truncate(limit);
            }
            if !manual {
                catalogue.sort_ids_by_name(&mut slot.members);
            }
        }
    }

    /// Repairs a state that did not come from the engine (e.g. storage).
    ///
    /// Unknown ids and repeated ids are dropped (first occurrence in tier
    /// order wins), then the state is normalized.
    pub fn sanitize(mut self, catalogue: &Catalogue) -> Self {
        let mut seen: HashSet<EntityId> = HashSet::new();
        for slot in &mut self.slots {
            slot.members
                .retain(|m| catalogue.contains(m.as_str()) && seen.insert(m.clone()));
        }
        self.normalize(catalogue);
        self
    }
}

impl From<BTreeMap<String, TierSlot>> for AssignmentState {
    fn from(map: BTreeMap<String, TierSlot>) -> Self {
        let mut state = Self::initial();
        for (key, slot) in map {
            match key.parse::<TierId>() {
                Ok(tier) => *state.slot_mut(tier) = slot,
                Err(_) => debug!(key = %key, "skipping unknown tier in stored state"),
            }
        }
        state
    }
}

impl From<AssignmentState> for BTreeMap<TierId, TierSlot> {
    fn from(state: AssignmentState) -> Self {
        TierId::ALL.into_iter().zip(state.slots).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Entity;

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Entity::new("a", "Alpha", "X"),
            Entity::new("b", "Beta", "X"),
            Entity::new("c", "Gamma", "Y"),
        ])
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<EntityId> {
        list.iter().map(|s| EntityId::from(*s)).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = AssignmentState::initial();
        for (tier, slot) in state.iter() {
            assert!(slot.members.is_empty());
            assert_eq!(slot.ordered, tier.descriptor().default_ordered);
        }
        assert_eq!(state.pool(&catalogue()), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_container_of() {
        let mut state = AssignmentState::initial();
        state.slot_mut(TierId::Positive).members = ids(&["b"]);
        assert_eq!(state.container_of("b"), Container::Tier(TierId::Positive));
        assert_eq!(state.container_of("a"), Container::Pool);
        assert_eq!(state.container_of("zzz"), Container::Pool);
    }

    #[test]
    fn test_tolerant_deserialize() {
        let json = r#"{
            "positive": {"members": ["b"]},
            "bonus_tier": {"ordered": true, "members": ["a"]},
            "negative": {"ordered": true, "members": ["c"]}
        }"#;
        let state: AssignmentState = serde_json::from_str(json).unwrap();
        assert_eq!(state.members(TierId::Positive), ids(&["b"]).as_slice());
        assert!(!state.slot(TierId::Positive).ordered);
        assert_eq!(state.members(TierId::Negative), ids(&["c"]).as_slice());
        assert!(state.is_manual(TierId::Negative));
        assert_eq!(state.slot(TierId::Favorite), AssignmentState::initial().slot(TierId::Favorite));
        assert_eq!(state.pool(&catalogue()), ids(&["a"]));
    }

    #[test]
    fn test_sanitize_drops_unknown_and_duplicates() {
        let mut state = AssignmentState::initial();
        state.slot_mut(TierId::Favorite).members = ids(&["c", "a"]);
        state.slot_mut(TierId::ReallyLike).members = ids(&["ghost", "c", "b"]);

        let state = state.sanitize(&catalogue());
        assert_eq!(state.members(TierId::Favorite), ids(&["c"]).as_slice());
        assert_eq!(state.members(TierId::ReallyLike), ids(&["b"]).as_slice());
        assert_eq!(state.pool(&catalogue()), ids(&["a"]));
    }

    #[test]
    fn test_serde_fills_missing_tiers() {
        let json = r#"{"neutral":{"ordered":true,"teamIds":["c","a"]}}"#;
        let state: AssignmentState = serde_json::from_str(json).unwrap();
        assert!(state.slot(TierId::Neutral).ordered);
        assert_eq!(state.members(TierId::Neutral), ids(&["c", "a"]).as_slice());
        assert!(state.members(TierId::Favorite).is_empty());
        assert!(state.slot(TierId::Favorite).ordered);
    }

    #[test]
    fn test_serde_map_shape() {
        let value = serde_json::to_value(AssignmentState::initial()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert!(obj.contains_key("always_lose"));
    }
}
