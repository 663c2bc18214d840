use std::sync::Arc;

use crate::app::editor_state::EditorAppState;
use crate::app::events::EditorEffect;
use crate::core::element::{DrawingElement, IS_DELETED, VERSION_NONCE};
use crate::core::elements_map::ElementsMap;
use crate::core::error::{CoreError, Result};
use crate::core::id_gen;
use crate::history::manager::History;
use crate::store::{ListenerHandle, Store, StoreIncrement, StoreListener};

/// Editor façade wiring the live scene, the store and the history
/// together: every increment the store emits is recorded, undo and redo
/// re-anchor the snapshot after mutating the scene.
pub struct SketchEngine {
    elements: ElementsMap,
    app_state: EditorAppState,
    store: Store,
    history: History,
    scene_version_nonce: u64,
}

impl SketchEngine {
    pub fn new() -> Self {
        let mut engine = Self {
            elements: ElementsMap::new(),
            app_state: EditorAppState::new(),
            store: Store::new(),
            history: History::new(),
            scene_version_nonce: id_gen::gen_nonce(),
        };
        // anchor the empty scene so the first commit is diffed against it
        engine.store.only_update_snapshot();
        let _ = engine.capture_current();
        engine
    }

    pub fn elements(&self) -> &ElementsMap {
        &self.elements
    }

    pub fn app_state(&self) -> &EditorAppState {
        &self.app_state
    }

    pub fn app_state_mut(&mut self) -> &mut EditorAppState {
        &mut self.app_state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_undo_stack_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.history.is_redo_stack_empty()
    }

    pub fn listen(&mut self, listener: StoreListener) -> ListenerHandle {
        self.store.listen(listener)
    }

    pub fn unlisten(&mut self, handle: ListenerHandle) {
        self.store.unlisten(handle);
    }

    /// Inserts or replaces an element, stamping a fresh version nonce.
    pub fn upsert_element(&mut self, element: DrawingElement) {
        let stamped = element.with(VERSION_NONCE, id_gen::gen_nonce());
        self.elements.insert(Arc::new(stamped));
        self.scene_version_nonce = id_gen::gen_nonce();
    }

    /// Soft-deletes an element. The element stays in the map.
    pub fn mark_deleted(&mut self, id: &str) -> Result<()> {
        let element = self
            .elements
            .get(id)
            .ok_or_else(|| CoreError::ElementNotFound(id.to_string()))?;
        let deleted = element
            .as_ref()
            .clone()
            .with(IS_DELETED, true)
            .with(VERSION_NONCE, id_gen::gen_nonce());
        self.elements.insert(Arc::new(deleted));
        self.scene_version_nonce = id_gen::gen_nonce();
        Ok(())
    }

    pub fn select(&mut self, ids: impl IntoIterator<Item = String>) {
        self.app_state.selected_element_ids = ids.into_iter().collect();
    }

    /// Captures the pending transition as one undoable step.
    pub fn commit(&mut self) -> EditorEffect {
        self.store.resume_recording();
        match self.capture_current() {
            Ok(Some(increment)) => EditorEffect::Redraw {
                elements: !increment.elements_change.is_empty(),
                app_state: !increment.app_state_change.is_empty(),
            },
            Ok(None) => EditorEffect::None,
            Err(e) => EditorEffect::Error(e),
        }
    }

    /// Merges remotely delivered elements into the scene and absorbs the
    /// transition into the snapshot without recording it.
    pub fn apply_remote_update(&mut self, remote: &ElementsMap) -> EditorEffect {
        for element in remote.iter() {
            self.elements.insert(element.clone());
        }
        self.scene_version_nonce = id_gen::gen_nonce();
        self.store.only_update_snapshot();
        self.store.mark_remote_update();
        match self.capture_current() {
            Ok(_) => EditorEffect::Redraw { elements: true, app_state: false },
            Err(e) => EditorEffect::Error(e),
        }
    }

    pub fn undo(&mut self) -> EditorEffect {
        self.step(true)
    }

    pub fn redo(&mut self) -> EditorEffect {
        self.step(false)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // One user-perceivable step: entries that only touched stripped or
    // invisible state are applied and skipped until something visible
    // changes or the stack runs dry.
    fn step(&mut self, backward: bool) -> EditorEffect {
        let mut effect = EditorEffect::None;
        loop {
            let popped = if backward {
                self.history.undo_once(&self.elements)
            } else {
                self.history.redo_once(&self.elements)
            };
            let entry = match popped {
                Some(entry) => entry,
                None => break,
            };

            let observed = self.app_state.observed();
            let ((next_elements, elements_visible), (next_observed, app_state_visible)) =
                entry.apply_to(&self.elements, &observed);
            self.elements = next_elements;
            self.app_state.apply_observed(&next_observed);
            self.scene_version_nonce = id_gen::gen_nonce();

            // re-anchor the snapshot without emitting
            self.store.only_update_snapshot();
            if let Err(e) = self.capture_current() {
                return effect.merge(EditorEffect::Error(e));
            }

            if elements_visible || app_state_visible {
                effect = effect.merge(EditorEffect::Redraw {
                    elements: elements_visible,
                    app_state: app_state_visible,
                });
                break;
            }
        }
        effect
    }

    fn capture_current(&mut self) -> Result<Option<StoreIncrement>> {
        let observed = self.app_state.observed();
        let editing = self.app_state.editing_linear_element.clone();
        let increment = self.store.capture(
            &self.elements,
            &observed,
            Some(self.scene_version_nonce),
            editing.as_deref(),
        )?;
        if let Some(increment) = &increment {
            self.history.record(&increment.elements_change, &increment.app_state_change);
        }
        Ok(increment)
    }
}

impl Default for SketchEngine {
    fn default() -> Self {
        Self::new()
    }
}
