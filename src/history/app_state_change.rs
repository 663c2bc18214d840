use serde::{Deserialize, Serialize};

use crate::core::app_state::ObservedAppState;
use crate::history::delta::Delta;

/// Change object over the observed slice of editor state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppStateChange {
    delta: Delta,
}

impl AppStateChange {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn calculate(prev: &ObservedAppState, next: &ObservedAppState) -> Self {
        if prev == next {
            return Self::empty();
        }
        Self { delta: Delta::calculate(&prev.to_props(), &next.to_props()) }
    }

    pub fn inverse(&self) -> Self {
        Self { delta: self.delta.swapped() }
    }

    /// Shallow merge of the `to` half onto the state. The flag reports
    /// whether the merge changes anything against the state as it is now,
    /// which may have drifted since the change was captured.
    pub fn apply_to(&self, state: &ObservedAppState) -> (ObservedAppState, bool) {
        let contains_visible_difference = Delta::contains_difference(&self.delta.to, &state.to_props());
        (state.merged(&self.delta.to), contains_visible_difference)
    }

    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }

    pub fn delta(&self) -> &Delta {
        &self.delta
    }
}
