use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::element::Props;

/// The fixed projection of editor state that participates in history.
/// Everything else the editor keeps (active tool, zoom, scroll, cursor)
/// is deliberately invisible to the history core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedAppState {
    pub name: Option<String>,
    pub editing_group_id: Option<String>,
    pub view_background_color: String,
    pub selected_element_ids: BTreeSet<String>,
    pub selected_group_ids: BTreeSet<String>,
    pub editing_linear_element: Option<String>,
    pub selected_linear_element: Option<String>,
}

impl Default for ObservedAppState {
    fn default() -> Self {
        Self {
            name: None,
            editing_group_id: None,
            view_background_color: "#ffffff".to_string(),
            selected_element_ids: BTreeSet::new(),
            selected_group_ids: BTreeSet::new(),
            editing_linear_element: None,
            selected_linear_element: None,
        }
    }
}

impl ObservedAppState {
    /// Flat projection used by the delta algebra. Each observed field is
    /// one key; the selection sets are single values compared as a whole.
    pub fn to_props(&self) -> Props {
        let mut props = Props::new();
        props.insert("name".into(), opt_string(&self.name));
        props.insert("editing_group_id".into(), opt_string(&self.editing_group_id));
        props.insert("view_background_color".into(), Value::String(self.view_background_color.clone()));
        props.insert("selected_element_ids".into(), id_set(&self.selected_element_ids));
        props.insert("selected_group_ids".into(), id_set(&self.selected_group_ids));
        props.insert("editing_linear_element".into(), opt_string(&self.editing_linear_element));
        props.insert("selected_linear_element".into(), opt_string(&self.selected_linear_element));
        props
    }

    /// Shallow merge of a delta half back onto the state. Unknown keys are
    /// ignored; a null value resets the field to its absent form.
    pub fn merged(&self, partial: &Props) -> ObservedAppState {
        let mut next = self.clone();
        for (key, value) in partial {
            match key.as_str() {
                "name" => next.name = as_opt_string(value),
                "editing_group_id" => next.editing_group_id = as_opt_string(value),
                "view_background_color" => {
                    if let Some(color) = value.as_str() {
                        next.view_background_color = color.to_string();
                    }
                }
                "selected_element_ids" => next.selected_element_ids = as_id_set(value),
                "selected_group_ids" => next.selected_group_ids = as_id_set(value),
                "editing_linear_element" => next.editing_linear_element = as_opt_string(value),
                "selected_linear_element" => next.selected_linear_element = as_opt_string(value),
                _ => {}
            }
        }
        next
    }
}

fn opt_string(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

fn id_set(ids: &BTreeSet<String>) -> Value {
    Value::Array(ids.iter().cloned().map(Value::String).collect())
}

fn as_opt_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn as_id_set(value: &Value) -> BTreeSet<String> {
    value
        .as_array()
        .map(|ids| ids.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}
