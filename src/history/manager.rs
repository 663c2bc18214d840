use crate::core::elements_map::ElementsMap;
use crate::history::app_state_change::AppStateChange;
use crate::history::elements_change::ElementsChange;
use crate::history::entry::HistoryEntry;

/// Undo/redo stacks over recorded increments. Entries store the inverse
/// of the captured transition, so applying a popped entry reverses it.
/// The stacks are unbounded.
#[derive(Debug, Default)]
pub struct History {
    pub undo_stack: Vec<HistoryEntry>,
    pub redo_stack: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the inverse of an emitted increment onto the undo stack.
    /// An empty increment is ignored and leaves the redo stack alone; a
    /// non-empty one invalidates the redoable future.
    pub fn record(&mut self, elements_change: &ElementsChange, app_state_change: &AppStateChange) {
        let entry = HistoryEntry::new(app_state_change.inverse(), elements_change.inverse());
        if entry.is_empty() {
            return;
        }
        self.undo_stack.push(entry);
        self.redo_stack.clear();
    }

    /// Pops one undo step. The opposite entry pushed for redo is rebased
    /// against the live collection so a later redo cannot overwrite
    /// concurrent remote edits. The caller applies the returned entry.
    pub fn undo_once(&mut self, live_elements: &ElementsMap) -> Option<HistoryEntry> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(entry.inverse().apply_latest_changes(live_elements));
        Some(entry)
    }

    pub fn redo_once(&mut self, live_elements: &ElementsMap) -> Option<HistoryEntry> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(entry.inverse().apply_latest_changes(live_elements));
        Some(entry)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn is_undo_stack_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn is_redo_stack_empty(&self) -> bool {
        self.redo_stack.is_empty()
    }
}
