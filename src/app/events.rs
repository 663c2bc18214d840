use crate::core::error::CoreError;

/// What the host has to refresh after an engine operation.
#[derive(Debug)]
pub enum EditorEffect {
    None,
    Redraw { elements: bool, app_state: bool },
    Error(CoreError),
}

impl EditorEffect {
    pub fn merge(self, other: EditorEffect) -> EditorEffect {
        match (self, other) {
            (EditorEffect::Error(e), _) | (_, EditorEffect::Error(e)) => EditorEffect::Error(e),
            (
                EditorEffect::Redraw { elements: e1, app_state: a1 },
                EditorEffect::Redraw { elements: e2, app_state: a2 },
            ) => EditorEffect::Redraw { elements: e1 || e2, app_state: a1 || a2 },
            (EditorEffect::None, effect) => effect,
            (effect, EditorEffect::None) => effect,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EditorEffect::None)
    }
}
