use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat observable payload of a drawing element or of the observed
/// app state projection. A `Value::Null` entry stands for an absent key.
pub type Props = serde_json::Map<String, Value>;

pub const IS_DELETED: &str = "is_deleted";
pub const VERSION_NONCE: &str = "version_nonce";

/// A drawing element as the history core sees it: a stable id plus a flat
/// payload. Geometry, style and everything else the editor attaches live
/// in `props` and are diffed key by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingElement {
    pub id: String,
    #[serde(flatten)]
    props: Props,
}

impl DrawingElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), props: Props::new() }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn version_nonce(&self) -> u64 {
        self.props.get(VERSION_NONCE).and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn is_deleted(&self) -> bool {
        self.props.get(IS_DELETED).and_then(Value::as_bool).unwrap_or(false)
    }

    /// New element with `partial` shallow-merged over the payload.
    /// A null value removes the key; the id is never touched.
    pub fn merged(&self, partial: &Props) -> DrawingElement {
        let mut props = self.props.clone();
        for (key, value) in partial {
            if value.is_null() {
                props.remove(key);
            } else {
                props.insert(key.clone(), value.clone());
            }
        }
        DrawingElement { id: self.id.clone(), props }
    }
}
