use std::collections::BTreeSet;

use crate::core::app_state::ObservedAppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Selection,
    Rectangle,
    Ellipse,
    Line,
    Arrow,
    Freedraw,
    Text,
}

/// The full editor state a host keeps. Only the observed projection
/// participates in history; tool, zoom, scroll and cursor churn freely
/// without ever producing an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorAppState {
    pub name: Option<String>,
    pub editing_group_id: Option<String>,
    pub view_background_color: String,
    pub selected_element_ids: BTreeSet<String>,
    pub selected_group_ids: BTreeSet<String>,
    pub editing_linear_element: Option<String>,
    pub selected_linear_element: Option<String>,

    pub active_tool: ToolKind,
    pub zoom: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl EditorAppState {
    pub fn new() -> Self {
        Self {
            name: None,
            editing_group_id: None,
            view_background_color: "#ffffff".to_string(),
            selected_element_ids: BTreeSet::new(),
            selected_group_ids: BTreeSet::new(),
            editing_linear_element: None,
            selected_linear_element: None,
            active_tool: ToolKind::Selection,
            zoom: 1.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn observed(&self) -> ObservedAppState {
        ObservedAppState {
            name: self.name.clone(),
            editing_group_id: self.editing_group_id.clone(),
            view_background_color: self.view_background_color.clone(),
            selected_element_ids: self.selected_element_ids.clone(),
            selected_group_ids: self.selected_group_ids.clone(),
            editing_linear_element: self.editing_linear_element.clone(),
            selected_linear_element: self.selected_linear_element.clone(),
        }
    }

    /// Writes an observed projection back, leaving the transient fields
    /// untouched.
    pub fn apply_observed(&mut self, observed: &ObservedAppState) {
        self.name = observed.name.clone();
        self.editing_group_id = observed.editing_group_id.clone();
        self.view_background_color = observed.view_background_color.clone();
        self.selected_element_ids = observed.selected_element_ids.clone();
        self.selected_group_ids = observed.selected_group_ids.clone();
        self.editing_linear_element = observed.editing_linear_element.clone();
        self.selected_linear_element = observed.selected_linear_element.clone();
    }
}

impl Default for EditorAppState {
    fn default() -> Self {
        Self::new()
    }
}
