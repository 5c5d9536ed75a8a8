//! Browser binding.
//!
//! JavaScript owns `localStorage`: it passes the saved blob to the
//! constructor and reads [`WasmBoard::save_blob`] after each call that
//! returned `true`.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::assignment::Move;
use crate::board::Board;
use crate::catalogue::{Catalogue, Entity, PoolFilter};
use crate::persist::MemoryStore;
use crate::ranking::Direction;
use crate::tiers::{BoardConfig, Container, TierId};

#[wasm_bindgen]
pub struct WasmBoard {
    inner: Board<MemoryStore>,
}

#[wasm_bindgen]
impl WasmBoard {
    /// `catalogue_json` is the static artifact; `saved` the stored blob, if any.
    #[wasm_bindgen(constructor)]
    pub fn new(catalogue_json: &str, saved: Option<String>) -> Result<WasmBoard, JsError> {
        let config = BoardConfig::default();
        let entities: Vec<Entity> = serde_json::from_str(catalogue_json)?;
        let catalogue = Catalogue::with_default_category(entities, &config.default_category)?;
        let store = match saved {
            Some(blob) => MemoryStore::with_entry(config.storage_key.clone(), blob),
            None => MemoryStore::new(),
        };
        let inner = Board::open(Arc::new(catalogue), config, store)?;
        Ok(WasmBoard { inner })
    }

    #[wasm_bindgen(js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        self.inner.config().storage_key.clone()
    }

    /// Current blob to write back to `localStorage`.
    #[wasm_bindgen(js_name = saveBlob)]
    pub fn save_blob(&self) -> Option<String> {
        let key = &self.inner.config().storage_key;
        self.inner.store().get(key).map(str::to_owned)
    }

    pub fn view(&self, category: Option<String>, query: String) -> Result<JsValue, JsError> {
        let filter = PoolFilter { category, query };
        Ok(serde_wasm_bindgen::to_value(&self.inner.view(&filter))?)
    }

    pub fn readiness(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.readiness())?)
    }

    #[wasm_bindgen(js_name = moveEntity)]
    pub fn move_entity(&mut self, entity: &str, from: &str, to: &str, over: Option<String>) -> bool {
        let (Ok(from), Ok(to)) = (from.parse::<Container>(), to.parse::<Container>()) else {
            return false;
        };
        let mut mv = Move::new(entity, from, to);
        if let Some(over) = over {
            mv = mv.over(over);
        }
        self.inner.move_entity(&mv)
    }

    #[wasm_bindgen(js_name = toggleOrdering)]
    pub fn toggle_ordering(&mut self, tier: &str, ordered: bool) -> bool {
        match tier.parse::<TierId>() {
            Ok(tier) => self.inner.toggle_ordering(tier, ordered),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(js_name = tapEntity)]
    pub fn tap_entity(&mut self, id: &str) -> bool {
        self.inner.tap_entity(id)
    }

    #[wasm_bindgen(js_name = tapContainer)]
    pub fn tap_container(&mut self, container: &str) -> bool {
        match container.parse::<Container>() {
            Ok(container) => self.inner.tap_container(container),
            Err(_) => false,
        }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = enterFullRanking)]
    pub fn enter_full_ranking(&mut self) -> bool {
        self.inner.enter_full_ranking()
    }

    #[wasm_bindgen(js_name = exitFullRanking)]
    pub fn exit_full_ranking(&mut self) -> bool {
        self.inner.exit_full_ranking()
    }

    #[wasm_bindgen(js_name = selectRanked)]
    pub fn select_ranked(&mut self, id: &str) -> bool {
        self.inner.select_ranked(id)
    }

    /// `direction` is one of `top`, `up`, `down`, `bottom`, `middle`.
    #[wasm_bindgen(js_name = moveRanked)]
    pub fn move_ranked(&mut self, direction: &str) -> bool {
        match direction.parse::<Direction>() {
            Ok(direction) => self.inner.move_ranked(direction),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(js_name = reorderRanked)]
    pub fn reorder_ranked(&mut self, active: &str, over: &str) -> bool {
        self.inner.reorder_ranked(active, over)
    }

    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, key: &str) -> bool {
        self.inner.press_key(key)
    }

    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> Result<String, JsError> {
        Ok(self.inner.export_text()?)
    }

    #[wasm_bindgen(js_name = exportCard)]
    pub fn export_card(&self) -> Result<JsValue, JsError> {
        let card = self.inner.export_card()?;
        Ok(serde_wasm_bindgen::to_value(&card)?)
    }
}
