//! Reordering within a full ranking.

use tracing::debug;

use super::types::{Direction, FullRanking, RankKey};
use crate::catalogue::EntityId;

/// Relocates `selected` according to `direction`, shifting the others.
///
/// Returns `None` when `selected` is absent or already at the target.
///
/// ```
/// use u_tierlist::catalogue::EntityId;
/// use u_tierlist::ranking::{move_in_full_ranking, Direction};
///
/// let seq: Vec<EntityId> = ["a", "b", "c", "d", "e"].map(EntityId::from).to_vec();
/// let next = move_in_full_ranking(&seq, "c", Direction::Top).unwrap();
/// assert_eq!(next, ["c", "a", "b", "d", "e"].map(EntityId::from).to_vec());
/// ```
pub fn move_in_full_ranking(
    sequence: &[EntityId],
    selected: &str,
    direction: Direction,
) -> Option<Vec<EntityId>> {
    let from = sequence.iter().position(|e| e.as_str() == selected)?;
    let to = direction.target(from, sequence.len());
    array_move(sequence, from, to)
}

/// Moves the element at `from` to index `to`. `None` when they coincide.
fn array_move(sequence: &[EntityId], from: usize, to: usize) -> Option<Vec<EntityId>> {
    if from == to || to >= sequence.len() {
        return None;
    }
    let mut next = sequence.to_vec();
    let item = next.remove(from);
    next.insert(to, item);
    Some(next)
}

impl FullRanking {
    /// Toggles the focus on `id`. Ids outside the ranking are ignored.
    pub fn select(&self, id: &str) -> Option<FullRanking> {
        self.position(id)?;
        let mut next = self.clone();
        next.selected = match &self.selected {
            Some(current) if current.as_str() == id => None,
            _ => Some(EntityId::from(id)),
        };
        Some(next)
    }

    /// Moves the focused entity.
    pub fn move_selected(&self, direction: Direction) -> Option<FullRanking> {
        let selected = self.selected.as_ref()?;
        let sequence = move_in_full_ranking(&self.sequence, selected.as_str(), direction)?;
        debug!(entity = %selected, ?direction, "ranking entity moved");
        Some(FullRanking {
            sequence,
            selected: self.selected.clone(),
        })
    }

    /// Drag reorder: `active` takes the index currently held by `over`.
    pub fn reorder(&self, active: &str, over: &str) -> Option<FullRanking> {
        let from = self.position(active)?;
        let to = self.position(over)?;
        let sequence = array_move(&self.sequence, from, to)?;
        debug!(entity = active, from, to, "ranking entity dragged");
        Some(FullRanking {
            sequence,
            selected: self.selected.clone(),
        })
    }

    /// Handles a keyboard shortcut.
    ///
    /// A movement key with nothing focused focuses the top entity instead
    /// of moving anything.
    pub fn press(&self, key: RankKey) -> Option<FullRanking> {
        match key {
            RankKey::ClearSelection => {
                self.selected.as_ref()?;
                Some(FullRanking {
                    sequence: self.sequence.clone(),
                    selected: None,
                })
            }
            RankKey::Move(direction) => match &self.selected {
                Some(_) => self.move_selected(direction),
                None => {
                    let first = self.sequence.first()?;
                    Some(FullRanking {
                        sequence: self.sequence.clone(),
                        selected: Some(first.clone()),
                    })
                }
            },
        }
    }
}
