use std::collections::HashMap;
use std::sync::Arc;

use crate::core::element::DrawingElement;

/// Ordered mapping from element id to the element itself. Iteration order
/// is insertion order and represents z-order, so it must survive snapshot
/// cloning and delta application. Elements are shared across revisions
/// through `Arc`; a revision that changes an element replaces the node.
#[derive(Debug, Clone, Default)]
pub struct ElementsMap {
    order: Vec<String>,
    by_id: HashMap<String, Arc<DrawingElement>>,
}

impl ElementsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new element at the end of the z-order, or replaces an
    /// existing one in place. Keys are never removed from the map:
    /// deletion is the `is_deleted` flag on the element.
    pub fn insert(&mut self, element: Arc<DrawingElement>) {
        if !self.by_id.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.by_id.insert(element.id.clone(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<DrawingElement>> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Arc<DrawingElement>> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Ids of elements whose `is_deleted` flag is not set, in z-order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|e| !e.is_deleted()).map(|e| e.id.as_str())
    }
}

impl PartialEq for ElementsMap {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.order.iter().all(|id| match (self.by_id.get(id), other.by_id.get(id)) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
                _ => false,
            })
    }
}

impl FromIterator<DrawingElement> for ElementsMap {
    fn from_iter<I: IntoIterator<Item = DrawingElement>>(iter: I) -> Self {
        let mut map = Self::new();
        for element in iter {
            map.insert(Arc::new(element));
        }
        map
    }
}

impl FromIterator<Arc<DrawingElement>> for ElementsMap {
    fn from_iter<I: IntoIterator<Item = Arc<DrawingElement>>>(iter: I) -> Self {
        let mut map = Self::new();
        for element in iter {
            map.insert(element);
        }
        map
    }
}

#[cfg(test)]
mod tests;
