use std::sync::Arc;

use crate::core::app_state::ObservedAppState;
use crate::core::elements_map::ElementsMap;

/// Context for one snapshot clone.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneOptions<'a> {
    /// Host-advanced nonce for the whole scene; the elements fast path.
    pub scene_version_nonce: Option<u64>,
    pub is_remote_update: bool,
    /// Id of the element currently being edited locally.
    pub editing_element_id: Option<&'a str>,
}

/// The last observed state, used as the diff anchor. Immutable; the meta
/// flags record what changed relative to the predecessor snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    elements: ElementsMap,
    app_state: ObservedAppState,
    did_elements_change: bool,
    did_app_state_change: bool,
    scene_version_nonce: Option<u64>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            elements: ElementsMap::new(),
            app_state: ObservedAppState::default(),
            did_elements_change: false,
            did_app_state_change: false,
            scene_version_nonce: None,
        }
    }

    pub fn elements(&self) -> &ElementsMap {
        &self.elements
    }

    pub fn app_state(&self) -> &ObservedAppState {
        &self.app_state
    }

    pub fn did_elements_change(&self) -> bool {
        self.did_elements_change
    }

    pub fn did_app_state_change(&self) -> bool {
        self.did_app_state_change
    }

    pub fn scene_version_nonce(&self) -> Option<u64> {
        self.scene_version_nonce
    }

    /// Returns the successor snapshot, or `None` when nothing changed and
    /// the current instance stays the anchor. A supplied scene nonce with
    /// no prior one re-anchors the snapshot but records no element change:
    /// an empty scene is the identity and initialization must not become
    /// an undoable step.
    pub fn clone_with(
        &self,
        next_elements: &ElementsMap,
        next_app_state: &ObservedAppState,
        options: &CloneOptions,
    ) -> Option<Snapshot> {
        let first_initialization =
            self.scene_version_nonce.is_none() && options.scene_version_nonce.is_some();
        let elements_differ = self.detect_changed_elements(next_elements, options);
        let app_state_differs = self.app_state != *next_app_state;
        if !elements_differ && !app_state_differs && !first_initialization {
            return None;
        }

        let elements = if elements_differ {
            self.clone_elements(next_elements, options)
        } else {
            self.elements.clone()
        };
        Some(Snapshot {
            elements,
            app_state: next_app_state.clone(),
            did_elements_change: elements_differ && !first_initialization,
            did_app_state_change: app_state_differs,
            scene_version_nonce: options.scene_version_nonce.or(self.scene_version_nonce),
        })
    }

    fn detect_changed_elements(&self, next: &ElementsMap, options: &CloneOptions) -> bool {
        if let (Some(prev_nonce), Some(next_nonce)) =
            (self.scene_version_nonce, options.scene_version_nonce)
        {
            return prev_nonce != next_nonce;
        }
        if self.elements.len() != next.len() {
            return true;
        }
        // recent edits concentrate at the top of the z-order
        for next_element in next.iter().rev() {
            match self.elements.get(&next_element.id) {
                Some(prev_element) if prev_element.version_nonce() == next_element.version_nonce() => {}
                _ => return true,
            }
        }
        false
    }

    /// Structural-sharing rebuild: every previous entry is kept (remote
    /// collab may deliver a subset), entries whose nonce changed are
    /// replaced with a deep copy, new ids are appended in incoming order.
    fn clone_elements(&self, next: &ElementsMap, options: &CloneOptions) -> ElementsMap {
        let mut elements = self.elements.clone();
        for next_element in next.iter() {
            if options.is_remote_update && options.editing_element_id == Some(next_element.id.as_str()) {
                // never capture a half-committed remote mutation of the
                // element under local edit
                continue;
            }
            let changed = match self.elements.get(&next_element.id) {
                Some(prev_element) => prev_element.version_nonce() != next_element.version_nonce(),
                None => true,
            };
            if changed {
                elements.insert(Arc::new(next_element.as_ref().clone()));
            }
        }
        elements
    }
}
