//! The board: owner of the session snapshot.
//!
//! Every gesture maps to one method. A method computes the next session from
//! the current snapshot, swaps the snapshot wholesale, and writes the blob to
//! the store. Readers holding an older `Arc<Session>` keep a consistent view.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::readiness::export_readiness;
use super::types::{Readiness, Session};
use super::view::BoardView;
use crate::assignment::{AssignmentState, Move};
use crate::catalogue::{Catalogue, EntityId, PoolFilter};
use crate::error::{Result, TierError};
use crate::export::{export_text, ExportCard};
use crate::persist::{self, MemoryStore, SessionStore};
use crate::ranking::{Direction, FullRanking, RankKey};
use crate::tiers::{BoardConfig, Container, TierId};

/// Tier-list engine bound to a catalogue and a session store.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_tierlist::assignment::Move;
/// use u_tierlist::board::Board;
/// use u_tierlist::catalogue::{Catalogue, Entity};
/// use u_tierlist::persist::MemoryStore;
/// use u_tierlist::tiers::{BoardConfig, Container, TierId};
///
/// let catalogue = Catalogue::new(vec![
///     Entity::new("a", "Alpha", "X"),
///     Entity::new("b", "Beta", "X"),
/// ])
/// .unwrap();
/// let mut board = Board::open(Arc::new(catalogue), BoardConfig::default(), MemoryStore::new()).unwrap();
///
/// assert!(board.move_entity(&Move::new("a", Container::Pool, TierId::Favorite.into())));
/// assert!(board.move_entity(&Move::new("b", Container::Pool, TierId::AlwaysLose.into())));
/// assert!(board.readiness().ready);
/// assert!(board.export_text().unwrap().starts_with("Favorite:\nAlpha"));
/// ```
pub struct Board<S: SessionStore = MemoryStore> {
    catalogue: Arc<Catalogue>,
    config: BoardConfig,
    session: Arc<Session>,
    tap_selection: Option<EntityId>,
    store: S,
}

impl<S: SessionStore> Board<S> {
    /// Validates the configuration and restores the stored session.
    ///
    /// A missing, unreadable or unloadable blob yields the initial session.
    pub fn open(catalogue: Arc<Catalogue>, config: BoardConfig, store: S) -> Result<Self> {
        config.validate()?;

        let session = match store.load(&config.storage_key) {
            Ok(Some(blob)) => persist::decode(&catalogue, &blob),
            Ok(None) => Session::initial(),
            Err(e) => {
                warn!(error = %e, key = %config.storage_key, "session store unavailable, starting fresh");
                Session::initial()
            }
        };
        info!(
            entities = catalogue.len(),
            ranked = session.is_ranked(),
            "board opened"
        );

        Ok(Self {
            catalogue,
            config,
            session: Arc::new(session),
            tap_selection: None,
            store,
        })
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current snapshot.
    pub fn session(&self) -> Arc<Session> {
        Arc::clone(&self.session)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Entity picked by a first tap in normal mode.
    pub fn tap_selection(&self) -> Option<&EntityId> {
        self.tap_selection.as_ref()
    }

    /// The pool, alphabetically. Empty in full-ranking mode.
    pub fn pool(&self) -> Vec<EntityId> {
        self.session
            .assignment()
            .map(|state| state.pool(&self.catalogue))
            .unwrap_or_default()
    }

    /// The pool narrowed by the search box and category picker.
    pub fn pool_view(&self, filter: &PoolFilter) -> Vec<EntityId> {
        self.catalogue.filter_pool(&self.pool(), filter)
    }

    pub fn readiness(&self) -> Readiness {
        export_readiness(&self.catalogue, &self.session)
    }

    pub fn view(&self, filter: &PoolFilter) -> BoardView {
        BoardView::build(self, filter)
    }

    // ---- Normal mode ----

    /// Applies a drag-drop move. Returns whether the session changed.
    pub fn move_entity(&mut self, mv: &Move) -> bool {
        let Session::Tiered(state) = &*self.session else {
            return false;
        };
        match state.move_entity(&self.catalogue, mv) {
            Some(next) => {
                self.commit(Session::Tiered(next));
                true
            }
            None => false,
        }
    }

    /// Switches a tier between manual and alphabetical order.
    pub fn toggle_ordering(&mut self, tier: TierId, ordered: bool) -> bool {
        let Session::Tiered(state) = &*self.session else {
            return false;
        };
        match state.toggle_ordering(&self.catalogue, tier, ordered) {
            Some(next) => {
                self.commit(Session::Tiered(next));
                true
            }
            None => false,
        }
    }

    /// Tap on an entity. Returns whether the board changed.
    ///
    /// The first tap selects. Tapping the selection again clears it. Tapping
    /// another entity moves the selection into that entity's container,
    /// inserted before it when the container keeps manual order.
    pub fn tap_entity(&mut self, id: &str) -> bool {
        let Session::Tiered(state) = &*self.session else {
            return false;
        };
        if !self.catalogue.contains(id) {
            return false;
        }
        let destination = state.container_of(id);

        match self.tap_selection.take() {
            None => {
                debug!(entity = id, "tap selected");
                self.tap_selection = Some(EntityId::from(id));
            }
            Some(selected) if selected.as_str() == id => {
                debug!(entity = id, "tap deselected");
            }
            Some(selected) => {
                self.move_selected(selected, destination, Some(EntityId::from(id)));
            }
        }
        true
    }

    /// Tap on a container. Moves the current selection there, if any.
    pub fn tap_container(&mut self, container: Container) -> bool {
        if self.session.is_ranked() {
            return false;
        }
        match self.tap_selection.take() {
            Some(selected) => {
                self.move_selected(selected, container, None);
                true
            }
            None => false,
        }
    }

    fn move_selected(&mut self, selected: EntityId, to: Container, over: Option<EntityId>) {
        let Session::Tiered(state) = &*self.session else {
            return;
        };
        let from = state.container_of(selected.as_str());
        if from == to {
            return;
        }
        let mv = Move {
            entity: selected,
            from,
            to,
            over,
        };
        self.move_entity(&mv);
    }

    /// Back to the initial session: tiers empty, normal mode.
    pub fn reset(&mut self) {
        info!("board reset");
        self.tap_selection = None;
        self.commit(Session::initial());
    }

    // ---- Mode switches ----

    /// Derives a full ranking from the tiers and enters full-ranking mode.
    pub fn enter_full_ranking(&mut self) -> bool {
        let Session::Tiered(state) = &*self.session else {
            return false;
        };
        let ranking = FullRanking::derive(&self.catalogue, state, self.config.pool_splice_tier);
        info!(entities = ranking.len(), "entering full ranking");
        self.tap_selection = None;
        self.commit(Session::Ranked(ranking));
        true
    }

    /// Leaves full-ranking mode with every entity in the collapse tier.
    ///
    /// The ranking is discarded.
    pub fn exit_full_ranking(&mut self) -> bool {
        if !self.session.is_ranked() {
            return false;
        }
        info!(tier = %self.config.collapse_tier, "leaving full ranking");
        let state = AssignmentState::collapsed_into(&self.catalogue, self.config.collapse_tier);
        self.commit(Session::Tiered(state));
        true
    }

    // ---- Full-ranking mode ----

    fn update_ranking(&mut self, f: impl FnOnce(&FullRanking) -> Option<FullRanking>) -> bool {
        let Session::Ranked(ranking) = &*self.session else {
            return false;
        };
        match f(ranking) {
            Some(next) => {
                self.commit(Session::Ranked(next));
                true
            }
            None => false,
        }
    }

    /// Toggles the focused entity.
    pub fn select_ranked(&mut self, id: &str) -> bool {
        self.update_ranking(|r| r.select(id))
    }

    /// Moves the focused entity.
    pub fn move_ranked(&mut self, direction: Direction) -> bool {
        self.update_ranking(|r| r.move_selected(direction))
    }

    /// Drag reorder inside the ranking.
    pub fn reorder_ranked(&mut self, active: &str, over: &str) -> bool {
        self.update_ranking(|r| r.reorder(active, over))
    }

    /// Keyboard shortcut (a DOM `KeyboardEvent.key` value).
    pub fn press_key(&mut self, key: &str) -> bool {
        match RankKey::parse(key) {
            Some(key) => self.update_ranking(|r| r.press(key)),
            None => false,
        }
    }

    // ---- Export ----

    /// Plain-text export, refused while the completion policy is unmet.
    pub fn export_text(&self) -> Result<String> {
        self.check_ready()?;
        Ok(export_text(&self.catalogue, &self.session, &self.config))
    }

    /// Layout model for image export, refused while the policy is unmet.
    pub fn export_card(&self) -> Result<ExportCard> {
        self.check_ready()?;
        Ok(ExportCard::build(&self.catalogue, &self.session, &self.config))
    }

    fn check_ready(&self) -> Result<()> {
        let readiness = self.readiness();
        if readiness.ready {
            Ok(())
        } else {
            Err(TierError::NotReady(readiness.reason.unwrap_or_default()))
        }
    }

    // ---- Persistence ----

    fn commit(&mut self, next: Session) {
        self.session = Arc::new(next);
        self.persist();
    }

    fn persist(&mut self) {
        let blob = match persist::encode(&self.session) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "failed to encode session");
                return;
            }
        };
        if let Err(e) = self.store.save(&self.config.storage_key, &blob) {
            warn!(error = %e, "failed to persist session");
        }
    }
}
