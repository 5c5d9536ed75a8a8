//! State transitions of the tiered assignment.
//!
//! # Rules
//!
//! 1. The moving entity is removed from its current tier first.
//! 2. Into a single-capacity tier it becomes the sole occupant; the previous
//!    occupant goes back to the mover's source container (the pool when the
//!    mover came from the pool).
//! 3. Into an unbounded tier in manual mode it is inserted before the hint
//!    entity when the hint sits in that tier, otherwise appended.
//! 4. Into an alphabetical tier the hint is ignored.
//! 5. Every tier is normalized afterwards.
//!
//! A move inside one manual tier is a reorder instead: the mover takes the
//! index the hint entity held, shifting the entities in between.
//!
//! Each transition returns `None` when nothing changes, so callers can keep
//! the previous snapshot.

use tracing::debug;

use super::types::AssignmentState;
use crate::catalogue::{Catalogue, EntityId};
use crate::tiers::{Capacity, Container, TierId};

/// A drag-drop or tap-to-move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub entity: EntityId,
    /// Where the caller believes the entity is.
    pub from: Container,
    pub to: Container,
    /// Entity the mover was dropped onto, used as an insertion point.
    pub over: Option<EntityId>,
}

impl Move {
    pub fn new(entity: impl Into<EntityId>, from: Container, to: Container) -> Self {
        Self {
            entity: entity.into(),
            from,
            to,
            over: None,
        }
    }

    pub fn over(mut self, over: impl Into<EntityId>) -> Self {
        self.over = Some(over.into());
        self
    }
}

impl AssignmentState {
    /// Applies a move. Returns `None` for no-ops and malformed requests.
    ///
    /// A request whose `from` does not match the entity's actual container
    /// is stale and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tierlist::assignment::{AssignmentState, Move};
    /// use u_tierlist::catalogue::{Catalogue, Entity};
    /// use u_tierlist::tiers::{Container, TierId};
    ///
    /// let catalogue = Catalogue::new(vec![
    ///     Entity::new("a", "Alpha", "X"),
    ///     Entity::new("b", "Beta", "X"),
    /// ])
    /// .unwrap();
    /// let fav = Container::Tier(TierId::Favorite);
    ///
    /// let s1 = AssignmentState::initial()
    ///     .move_entity(&catalogue, &Move::new("a", Container::Pool, fav))
    ///     .unwrap();
    /// let s2 = s1
    ///     .move_entity(&catalogue, &Move::new("b", Container::Pool, fav))
    ///     .unwrap();
    ///
    /// assert_eq!(s2.members(TierId::Favorite)[0].as_str(), "b");
    /// assert_eq!(s2.pool(&catalogue)[0].as_str(), "a");
    /// ```
    pub fn move_entity(&self, catalogue: &Catalogue, mv: &Move) -> Option<AssignmentState> {
        let id = mv.entity.as_str();
        if !catalogue.contains(id) {
            debug!(entity = id, "move ignored: unknown entity");
            return None;
        }
        let actual = self.container_of(id);
        if actual != mv.from {
            debug!(entity = id, claimed = %mv.from, actual = %actual, "move ignored: stale source");
            return None;
        }

        let over = mv.over.as_ref().filter(|o| o.as_str() != id);
        if mv.from == mv.to && over.is_none() {
            return None;
        }
        if let Container::Tier(tier) = mv.to {
            if mv.from == mv.to && self.is_manual(tier) {
                return self.reorder_within(tier, id, over?);
            }
        }

        let mut next = self.clone();
        next.remove(id);

        match mv.to {
            Container::Pool => {}
            Container::Tier(tier) if tier.descriptor().capacity == Capacity::Single => {
                let displaced = next.members(tier).first().cloned();
                next.slot_mut(tier).members = vec![mv.entity.clone()];
                if let (Some(displaced), Container::Tier(source)) = (displaced, mv.from) {
                    debug!(entity = %displaced, to = %source, "occupant swapped out");
                    next.slot_mut(source).members.push(displaced);
                }
            }
            Container::Tier(tier) => {
                let manual = next.is_manual(tier);
                let members = &mut next.slot_mut(tier).members;
                let at = over
                    .filter(|_| manual)
                    .and_then(|o| members.iter().position(|m| m == o));
                match at {
                    Some(pos) => members.insert(pos, mv.entity.clone()),
                    None => members.push(mv.entity.clone()),
                }
            }
        }

        next.normalize(catalogue);
        if next == *self {
            return None;
        }
        debug!(entity = id, from = %mv.from, to = %mv.to, "entity moved");
        Some(next)
    }

    /// Reorders a manual tier: `id` takes the index currently held by `over`.
    fn reorder_within(&self, tier: TierId, id: &str, over: &EntityId) -> Option<AssignmentState> {
        let members = self.members(tier);
        let from = members.iter().position(|m| m.as_str() == id)?;
        let to = members.iter().position(|m| m == over)?;
        if from == to {
            return None;
        }

        let mut next = self.clone();
        let members = &mut next.slot_mut(tier).members;
        let item = members.remove(from);
        members.insert(to, item);
        debug!(entity = id, tier = %tier, from, to, "entity reordered");
        Some(next)
    }

    /// Sets a tier's ordering flag and re-sorts it alphabetically.
    ///
    /// The re-sort happens for either flag value, so a mode switch never
    /// leaves stale manual order behind. Non-toggleable tiers are ignored.
    pub fn toggle_ordering(
        &self,
        catalogue: &Catalogue,
        tier: TierId,
        ordered: bool,
    ) -> Option<AssignmentState> {
        if !tier.descriptor().toggleable {
            debug!(tier = %tier, "toggle ignored: tier has fixed ordering");
            return None;
        }
        let mut next = self.clone();
        let slot = next.slot_mut(tier);
        slot.ordered = ordered;
        catalogue.sort_ids_by_name(&mut slot.members);
        next.normalize(catalogue);

        if next == *self {
            return None;
        }
        debug!(tier = %tier, ordered, "tier ordering toggled");
        Some(next)
    }

    /// Initial state with every catalogue entity in `tier`.
    ///
    /// Used when leaving full ranking. A single-capacity `tier` keeps only
    /// the alphabetically first entity.
    pub fn collapsed_into(catalogue: &Catalogue, tier: TierId) -> AssignmentState {
        let mut next = AssignmentState::initial();
        let slot = next.slot_mut(tier);
        slot.members = catalogue.ids().cloned().collect();
        catalogue.sort_ids_by_name(&mut slot.members);
        next.normalize(catalogue);
        next
    }
}
