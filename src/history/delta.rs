use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::element::Props;

/// Which half of a delta a rebase refreshes from the live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaSide {
    From,
    To,
}

/// Property-level difference between two versions of one flat record.
/// `from` holds the previous values of the keys that changed, `to` holds
/// the next ones. A `Value::Null` entry encodes an absent key, so both
/// halves of a calculated delta carry identical key sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub from: Props,
    pub to: Props,
}

impl Delta {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Direct construction. The halves may be asymmetric: element
    /// addition and removal deltas carry the payload on one side only.
    pub fn create(from: Props, to: Props) -> Self {
        Self { from, to }
    }

    /// Walks the union of keys and records every key whose values differ.
    pub fn calculate(prev: &Props, next: &Props) -> Self {
        if std::ptr::eq(prev, next) {
            return Self::empty();
        }
        let mut from = Props::new();
        let mut to = Props::new();
        for (key, prev_value) in prev {
            let next_value = next.get(key).unwrap_or(&Value::Null);
            if prev_value != next_value {
                from.insert(key.clone(), prev_value.clone());
                to.insert(key.clone(), next_value.clone());
            }
        }
        for (key, next_value) in next {
            if prev.contains_key(key) || next_value.is_null() {
                continue;
            }
            from.insert(key.clone(), Value::Null);
            to.insert(key.clone(), next_value.clone());
        }
        Self { from, to }
    }

    /// `calculate` followed by a modifier over both halves, typically the
    /// irrelevant-key strip.
    pub fn calculate_with(prev: &Props, next: &Props, modifier: impl Fn(&mut Props)) -> Self {
        let mut delta = Self::calculate(prev, next);
        modifier(&mut delta.from);
        modifier(&mut delta.to);
        delta
    }

    pub fn swapped(&self) -> Self {
        Self { from: self.to.clone(), to: self.from.clone() }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }

    /// Whether applying `partial` to the current flat record would change
    /// anything. The current record may have drifted since the delta was
    /// captured, so this is evaluated at apply time, not at capture time.
    pub fn contains_difference(partial: &Props, current: &Props) -> bool {
        partial
            .iter()
            .any(|(key, value)| current.get(key).unwrap_or(&Value::Null) != value)
    }
}

#[cfg(test)]
mod tests;
