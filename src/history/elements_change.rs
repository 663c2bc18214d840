use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::element::{DrawingElement, Props, IS_DELETED};
use crate::core::elements_map::ElementsMap;
use crate::history::delta::{Delta, DeltaSide};

/// Keys that churn without semantic meaning. They must never appear in an
/// emitted delta.
pub const IRRELEVANT_PROPS: [&str; 4] = ["updated", "version", "version_nonce", "seed"];

pub fn clear_irrelevant_props(props: &mut Props) {
    for key in IRRELEVANT_PROPS {
        props.remove(key);
    }
}

/// Difference between two versions of the element collection, one delta
/// per element id. Addition and removal are flips of `is_deleted`, so the
/// same record shape covers all three cases and inverses stay mechanical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementsChange {
    deltas: BTreeMap<String, Delta>,
}

impl ElementsChange {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn deltas(&self) -> &BTreeMap<String, Delta> {
        &self.deltas
    }

    pub fn calculate(prev: &ElementsMap, next: &ElementsMap) -> Self {
        if std::ptr::eq(prev, next) {
            return Self::empty();
        }
        let mut deltas = BTreeMap::new();
        for prev_element in prev.iter() {
            if next.contains(&prev_element.id) {
                continue;
            }
            let mut from = prev_element.props().clone();
            clear_irrelevant_props(&mut from);
            from.insert(IS_DELETED.to_string(), Value::Bool(false));
            let mut to = Props::new();
            to.insert(IS_DELETED.to_string(), Value::Bool(true));
            deltas.insert(prev_element.id.clone(), Delta::create(from, to));
        }
        for next_element in next.iter() {
            match prev.get(&next_element.id) {
                None => {
                    let mut from = Props::new();
                    from.insert(IS_DELETED.to_string(), Value::Bool(true));
                    let mut to = next_element.props().clone();
                    clear_irrelevant_props(&mut to);
                    to.insert(IS_DELETED.to_string(), Value::Bool(false));
                    deltas.insert(next_element.id.clone(), Delta::create(from, to));
                }
                Some(prev_element) => {
                    if prev_element.version_nonce() == next_element.version_nonce() {
                        continue;
                    }
                    let delta = Delta::calculate_with(
                        prev_element.props(),
                        next_element.props(),
                        clear_irrelevant_props,
                    );
                    if !delta.is_empty() {
                        deltas.insert(next_element.id.clone(), delta);
                    }
                }
            }
        }
        Self { deltas }
    }

    pub fn inverse(&self) -> Self {
        let deltas = self.deltas.iter().map(|(id, delta)| (id.clone(), delta.swapped())).collect();
        Self { deltas }
    }

    /// Applies every delta's `to` half to the collection. Identity and
    /// z-order are preserved and no key is ever removed. A delta whose
    /// target is missing is skipped; the rebase layer keeps the opposite
    /// half consistent for when it shows up.
    pub fn apply_to(&self, elements: &ElementsMap) -> (ElementsMap, bool) {
        let mut next = elements.clone();
        let mut contains_visible_difference = false;
        for (id, delta) in &self.deltas {
            let element = match next.get(id) {
                Some(element) => element.clone(),
                None => continue,
            };
            if !contains_visible_difference {
                contains_visible_difference = Self::is_visible(&element, delta);
            }
            next.insert(Arc::new(element.merged(&delta.to)));
        }
        (next, contains_visible_difference)
    }

    // A flip of is_deleted is always visible. Anything else only counts
    // for elements that are currently visible on the canvas. A null flag
    // reads as false, the same way an absent one does on the element.
    fn is_visible(element: &DrawingElement, delta: &Delta) -> bool {
        if let Some(value) = delta.to.get(IS_DELETED) {
            let next_deleted = value.as_bool().unwrap_or(false);
            if next_deleted != element.is_deleted() {
                return true;
            }
        }
        !element.is_deleted() && Delta::contains_difference(&delta.to, element.props())
    }

    /// Rebase: refresh one half of every delta from the live collection so
    /// a stale increment still pairs correctly with the other half when
    /// replayed after concurrent remote edits. Ids that are not live keep
    /// their stored delta untouched.
    pub fn apply_latest_changes(&self, elements: &ElementsMap, side: DeltaSide) -> Self {
        let mut deltas = BTreeMap::new();
        for (id, delta) in &self.deltas {
            let next_delta = match elements.get(id) {
                Some(live) => {
                    let stale = match side {
                        DeltaSide::From => &delta.from,
                        DeltaSide::To => &delta.to,
                    };
                    let refreshed: Props = stale
                        .keys()
                        .map(|key| {
                            let value = live.props().get(key).cloned().unwrap_or(Value::Null);
                            (key.clone(), value)
                        })
                        .collect();
                    match side {
                        DeltaSide::From => Delta::create(refreshed, delta.to.clone()),
                        DeltaSide::To => Delta::create(delta.from.clone(), refreshed),
                    }
                }
                None => delta.clone(),
            };
            deltas.insert(id.clone(), next_delta);
        }
        Self { deltas }
    }
}
