use super::*;
use crate::core::element::IS_DELETED;

fn el(id: &str) -> Arc<DrawingElement> {
    Arc::new(DrawingElement::new(id))
}

#[test]
fn test_map_insert_preserves_order() {
    let mut m = ElementsMap::new();
    m.insert(el("b"));
    m.insert(el("a"));
    m.insert(el("c"));
    let ids: Vec<&str> = m.ids().collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_map_replace_keeps_position() {
    let mut m = ElementsMap::new();
    m.insert(el("a"));
    m.insert(el("b"));
    m.insert(Arc::new(DrawingElement::new("a").with("x", 1)));
    let ids: Vec<&str> = m.ids().collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(m.len(), 2);
}

#[test]
fn test_map_eq_considers_order() {
    let a: ElementsMap = [DrawingElement::new("x"), DrawingElement::new("y")].into_iter().collect();
    let b: ElementsMap = [DrawingElement::new("y"), DrawingElement::new("x")].into_iter().collect();
    assert_ne!(a, b);
}

#[test]
fn test_map_eq_shared_nodes() {
    let shared = el("a");
    let m1: ElementsMap = [shared.clone()].into_iter().collect();
    let m2: ElementsMap = [shared].into_iter().collect();
    assert_eq!(m1, m2);
}

#[test]
fn test_map_visible_ids_skips_deleted() {
    let mut m = ElementsMap::new();
    m.insert(el("a"));
    m.insert(Arc::new(DrawingElement::new("b").with(IS_DELETED, true)));
    let ids: Vec<&str> = m.visible_ids().collect();
    assert_eq!(ids, vec!["a"]);
}
