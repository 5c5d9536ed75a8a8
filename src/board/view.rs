//! Serializable render model handed to the UI layer.

use serde::Serialize;

use super::engine::Board;
use super::types::{Readiness, Session};
use crate::catalogue::{Catalogue, EntityId, PoolFilter};
use crate::persist::SessionStore;
use crate::tiers::TierId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityView {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl EntityView {
    fn build(catalogue: &Catalogue, id: &EntityId) -> Self {
        match catalogue.lookup(id.as_str()) {
            Some(entity) => Self {
                id: id.clone(),
                name: entity.name.clone(),
                category: entity.category.clone(),
                image_url: entity.secure_image_url(),
            },
            None => Self {
                id: id.clone(),
                name: String::new(),
                category: String::new(),
                image_url: None,
            },
        }
    }

    fn list(catalogue: &Catalogue, ids: &[EntityId]) -> Vec<Self> {
        ids.iter().map(|id| Self::build(catalogue, id)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierView {
    pub id: TierId,
    pub name: &'static str,
    /// `Some(1)` for single-capacity tiers.
    pub capacity: Option<usize>,
    pub toggleable: bool,
    pub ordered: bool,
    /// Members keep the order the user chose.
    pub manual: bool,
    pub marker: Option<&'static str>,
    pub members: Vec<EntityView>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub title: String,
    pub full_ranking: bool,
    /// Empty in full-ranking mode.
    pub tiers: Vec<TierView>,
    /// Pool after filtering.
    pub pool: Vec<EntityView>,
    /// Pool size before filtering.
    pub pool_total: usize,
    pub categories: Vec<String>,
    /// Empty in normal mode.
    pub ranking: Vec<EntityView>,
    /// Focused entity in either mode.
    pub selected: Option<EntityId>,
    pub readiness: Readiness,
}

impl BoardView {
    pub fn build<S: SessionStore>(board: &Board<S>, filter: &PoolFilter) -> Self {
        let catalogue = board.catalogue();
        let session = board.session();

        let (tiers, ranking, selected) = match &*session {
            Session::Tiered(state) => {
                let tiers = state
                    .iter()
                    .map(|(id, slot)| {
                        let d = id.descriptor();
                        TierView {
                            id,
                            name: d.name,
                            capacity: d.capacity.limit(),
                            toggleable: d.toggleable,
                            ordered: slot.ordered,
                            manual: d.is_manual(slot.ordered),
                            marker: d.marker,
                            members: EntityView::list(catalogue, &slot.members),
                        }
                    })
                    .collect();
                (tiers, Vec::new(), board.tap_selection().cloned())
            }
            Session::Ranked(ranking) => (
                Vec::new(),
                EntityView::list(catalogue, &ranking.sequence),
                ranking.selected.clone(),
            ),
        };

        let pool = board.pool();
        let visible = catalogue.filter_pool(&pool, filter);

        Self {
            title: if session.is_ranked() {
                board.config().ranking_heading.clone()
            } else {
                board.config().title.clone()
            },
            full_ranking: session.is_ranked(),
            tiers,
            pool: EntityView::list(catalogue, &visible),
            pool_total: pool.len(),
            categories: catalogue.categories(),
            ranking,
            selected,
            readiness: board.readiness(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::assignment::Move;
    use crate::catalogue::Entity;
    use crate::persist::MemoryStore;
    use crate::tiers::{BoardConfig, Container};

    fn board() -> Board {
        let catalogue = Catalogue::new(vec![
            Entity::new("a", "Alpha", "X").with_image("http://img/a.png"),
            Entity::new("b", "Beta", "X"),
            Entity::new("c", "Gamma", "Y"),
        ])
        .unwrap();
        Board::open(Arc::new(catalogue), BoardConfig::default(), MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_tiered_view() {
        let mut b = board();
        b.move_entity(&Move::new("b", Container::Pool, TierId::Favorite.into()));
        let view = b.view(&PoolFilter::default().with_category("X"));

        assert!(!view.full_ranking);
        assert_eq!(view.tiers.len(), TierId::ALL.len());
        assert_eq!(view.tiers[0].members[0].name, "Beta");
        assert_eq!(view.tiers[0].capacity, Some(1));
        assert_eq!(view.pool.len(), 1);
        assert_eq!(view.pool[0].image_url.as_deref(), Some("https://img/a.png"));
        assert_eq!(view.pool_total, 2);
        assert_eq!(view.categories, vec!["ALL", "X", "Y"]);
        assert!(view.ranking.is_empty());
        assert!(!view.readiness.ready);
    }

    #[test]
    fn test_ranked_view() {
        let mut b = board();
        b.enter_full_ranking();
        b.select_ranked("c");
        let view = b.view(&PoolFilter::default());

        assert!(view.full_ranking);
        assert!(view.tiers.is_empty());
        assert!(view.pool.is_empty());
        assert_eq!(view.ranking.len(), 3);
        assert_eq!(view.selected, Some(EntityId::from("c")));
        assert_eq!(view.title, "All Teams (Sicko Mode)");
        assert!(view.readiness.ready);
    }
}
