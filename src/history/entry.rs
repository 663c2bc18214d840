use serde::{Deserialize, Serialize};

use crate::core::app_state::ObservedAppState;
use crate::core::elements_map::ElementsMap;
use crate::history::app_state_change::AppStateChange;
use crate::history::delta::DeltaSide;
use crate::history::elements_change::ElementsChange;

/// One undoable step: the paired element and app-state changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub app_state_change: AppStateChange,
    pub elements_change: ElementsChange,
}

impl HistoryEntry {
    pub fn new(app_state_change: AppStateChange, elements_change: ElementsChange) -> Self {
        Self { app_state_change, elements_change }
    }

    pub fn inverse(&self) -> Self {
        Self {
            app_state_change: self.app_state_change.inverse(),
            elements_change: self.elements_change.inverse(),
        }
    }

    pub fn apply_to(
        &self,
        elements: &ElementsMap,
        app_state: &ObservedAppState,
    ) -> ((ElementsMap, bool), (ObservedAppState, bool)) {
        (self.elements_change.apply_to(elements), self.app_state_change.apply_to(app_state))
    }

    /// Refreshes the `to` half of the element deltas from the live
    /// collection; the app-state side passes through unchanged.
    pub fn apply_latest_changes(&self, elements: &ElementsMap) -> Self {
        Self {
            app_state_change: self.app_state_change.clone(),
            elements_change: self.elements_change.apply_latest_changes(elements, DeltaSide::To),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.app_state_change.is_empty() && self.elements_change.is_empty()
    }
}
