pub mod snapshot;

use serde::{Deserialize, Serialize};

use crate::core::app_state::ObservedAppState;
use crate::core::elements_map::ElementsMap;
use crate::core::error::Result;
use crate::history::app_state_change::AppStateChange;
use crate::history::elements_change::ElementsChange;
use crate::store::snapshot::{CloneOptions, Snapshot};

/// One emitted unit of change, ready for the history stacks or a
/// collaboration transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreIncrement {
    pub elements_change: ElementsChange,
    pub app_state_change: AppStateChange,
}

impl StoreIncrement {
    pub fn is_empty(&self) -> bool {
        self.elements_change.is_empty() && self.app_state_change.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

pub type StoreListener = Box<dyn FnMut(&StoreIncrement) -> Result<()>>;

/// Observes editor state transitions, decides which are semantically
/// interesting and emits increments. Owns the current snapshot; the
/// history stacks belong to `History`.
pub struct Store {
    snapshot: Snapshot,
    listeners: Vec<(ListenerHandle, StoreListener)>,
    next_listener_id: u64,
    recording_changes: bool,
    should_only_update_snapshot: bool,
    is_remote_update: bool,
}

impl Store {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            listeners: Vec::new(),
            next_listener_id: 1,
            recording_changes: false,
            should_only_update_snapshot: false,
            is_remote_update: false,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The next capture computes and emits an increment. One-shot.
    pub fn resume_recording(&mut self) {
        self.recording_changes = true;
    }

    /// The next capture refreshes the snapshot without emitting, to
    /// absorb a transition that must not be individually undoable.
    /// One-shot.
    pub fn only_update_snapshot(&mut self) {
        self.should_only_update_snapshot = true;
    }

    /// Marks the next capture as a remote update so the editing-element
    /// exception applies during the snapshot clone. One-shot.
    pub fn mark_remote_update(&mut self) {
        self.is_remote_update = true;
    }

    pub fn capture(
        &mut self,
        elements: &ElementsMap,
        app_state: &ObservedAppState,
        scene_version_nonce: Option<u64>,
        editing_element_id: Option<&str>,
    ) -> Result<Option<StoreIncrement>> {
        if !self.recording_changes && !self.should_only_update_snapshot {
            self.reset_flags();
            return Ok(None);
        }

        let options = CloneOptions {
            scene_version_nonce,
            is_remote_update: self.is_remote_update,
            editing_element_id,
        };
        let next_snapshot = match self.snapshot.clone_with(elements, app_state, &options) {
            Some(next_snapshot) => next_snapshot,
            None => {
                self.reset_flags();
                return Ok(None);
            }
        };

        let mut increment = None;
        if self.recording_changes && !self.should_only_update_snapshot {
            let elements_change = if next_snapshot.did_elements_change() {
                ElementsChange::calculate(self.snapshot.elements(), next_snapshot.elements())
            } else {
                ElementsChange::empty()
            };
            let app_state_change = if next_snapshot.did_app_state_change() {
                AppStateChange::calculate(self.snapshot.app_state(), next_snapshot.app_state())
            } else {
                AppStateChange::empty()
            };
            if !elements_change.is_empty() || !app_state_change.is_empty() {
                increment = Some(StoreIncrement { elements_change, app_state_change });
            }
        }

        // the snapshot advances before fan-out: a failing listener leaves
        // the anchor current, so a retried capture cannot double-emit
        self.snapshot = next_snapshot;
        self.reset_flags();

        if let Some(increment) = &increment {
            for (_, listener) in self.listeners.iter_mut() {
                listener(increment)?;
            }
        }
        Ok(increment)
    }

    /// Registers a listener; fan-out follows registration order.
    pub fn listen(&mut self, listener: StoreListener) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((handle, listener));
        handle
    }

    pub fn unlisten(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|(registered, _)| *registered != handle);
    }

    /// Resets the snapshot to empty. Listeners stay registered.
    pub fn clear(&mut self) {
        self.snapshot = Snapshot::empty();
    }

    pub fn destroy(&mut self) {
        self.clear();
        self.listeners.clear();
    }

    fn reset_flags(&mut self) {
        self.recording_changes = false;
        self.should_only_update_snapshot = false;
        self.is_remote_update = false;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
