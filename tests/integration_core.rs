use sketch_engine_core::core::app_state::ObservedAppState;
use sketch_engine_core::core::element::DrawingElement;
use sketch_engine_core::core::elements_map::ElementsMap;
use sketch_engine_core::history::app_state_change::AppStateChange;
use sketch_engine_core::history::elements_change::ElementsChange;
use sketch_engine_core::history::manager::History;
use sketch_engine_core::store::Store;

use serde_json::json;

fn rect(id: &str, x: i64, nonce: u64) -> DrawingElement {
    DrawingElement::new(id)
        .with("type", "rect")
        .with("x", x)
        .with("y", 0)
        .with("version_nonce", nonce)
}

fn map(elements: Vec<DrawingElement>) -> ElementsMap {
    elements.into_iter().collect()
}

fn seeded_store() -> Store {
    let mut store = Store::new();
    store.only_update_snapshot();
    store
        .capture(&ElementsMap::new(), &ObservedAppState::default(), Some(1), None)
        .unwrap();
    store
}

#[test]
fn test_apply_inverse_of_calculate_restores_prev() {
    let a = map(vec![rect("r", 0, 1), rect("s", 3, 1)]);
    let b = map(vec![rect("r", 9, 2), rect("s", 3, 1)]);
    let change = ElementsChange::calculate(&a, &b);
    let (restored, _) = change.inverse().apply_to(&b);
    assert_eq!(restored.get("r").unwrap().get("x"), Some(&json!(0)));
    assert_eq!(restored.get("s").unwrap().get("x"), Some(&json!(3)));
}

#[test]
fn test_apply_calculate_reaches_next() {
    let a = map(vec![rect("r", 0, 1)]);
    let b = map(vec![rect("r", 9, 2)]);
    let (applied, _) = ElementsChange::calculate(&a, &b).apply_to(&a);
    assert_eq!(applied.get("r").unwrap().get("x"), Some(&json!(9)));
}

#[test]
fn test_store_to_history_pipeline() {
    let mut store = seeded_store();
    let mut history = History::new();

    let scene = map(vec![rect("r", 0, 1)]);
    store.resume_recording();
    let increment = store
        .capture(&scene, &ObservedAppState::default(), Some(2), None)
        .unwrap()
        .unwrap();
    history.record(&increment.elements_change, &increment.app_state_change);
    assert_eq!(history.undo_stack.len(), 1);
    assert!(history.is_redo_stack_empty());
}

#[test]
fn test_listener_feeds_collaboration_transport() {
    // increments serialize, so a network layer can forward them verbatim
    let mut store = seeded_store();
    let scene = map(vec![rect("r", 4, 1)]);
    store.resume_recording();
    let increment = store
        .capture(&scene, &ObservedAppState::default(), Some(2), None)
        .unwrap()
        .unwrap();

    let wire = serde_json::to_string(&increment).unwrap();
    let decoded: sketch_engine_core::store::StoreIncrement = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded, increment);
}

#[test]
fn test_irrelevant_churn_produces_no_history() {
    // scenario: version counters and timestamps churn, nothing else
    let mut store = seeded_store();
    let mut history = History::new();

    let scene = map(vec![rect("a", 0, 1)]);
    store.resume_recording();
    let increment = store.capture(&scene, &ObservedAppState::default(), Some(2), None).unwrap().unwrap();
    history.record(&increment.elements_change, &increment.app_state_change);

    let churned = map(vec![rect("a", 0, 2).with("updated", 123).with("seed", 9)]);
    store.resume_recording();
    let emitted = store.capture(&churned, &ObservedAppState::default(), Some(3), None).unwrap();
    assert!(emitted.is_none());
    assert_eq!(history.undo_stack.len(), 1);
}

#[test]
fn test_selection_only_transition_records_app_state_entry() {
    let mut store = seeded_store();
    let mut history = History::new();
    let scene = map(vec![rect("a", 0, 1)]);

    store.only_update_snapshot();
    store.capture(&scene, &ObservedAppState::default(), Some(2), None).unwrap();

    let mut selected = ObservedAppState::default();
    selected.selected_element_ids.insert("a".into());
    store.resume_recording();
    let increment = store.capture(&scene, &selected, Some(2), None).unwrap().unwrap();
    assert!(increment.elements_change.is_empty());
    history.record(&increment.elements_change, &increment.app_state_change);
    assert_eq!(history.undo_stack.len(), 1);

    // undo restores the prior selection
    let entry = history.undo_once(&scene).unwrap();
    let (restored, visible) = entry.app_state_change.apply_to(&selected);
    assert!(restored.selected_element_ids.is_empty());
    assert!(visible);
}

#[test]
fn test_first_capture_of_loaded_scene_is_not_undoable() {
    let mut store = Store::new();
    let mut history = History::new();
    let loaded = map(vec![rect("a", 0, 1), rect("b", 1, 1)]);

    store.resume_recording();
    let emitted = store.capture(&loaded, &ObservedAppState::default(), Some(40), None).unwrap();
    if let Some(increment) = emitted {
        history.record(&increment.elements_change, &increment.app_state_change);
    }
    assert!(history.is_undo_stack_empty());
}

#[test]
fn test_empty_record_keeps_redo_stack() {
    let mut history = History::new();
    let a = map(vec![rect("r", 0, 1)]);
    let b = map(vec![rect("r", 9, 2)]);
    history.record(&ElementsChange::calculate(&a, &b), &AppStateChange::empty());
    history.undo_once(&b);
    assert!(!history.is_redo_stack_empty());

    history.record(&ElementsChange::empty(), &AppStateChange::empty());
    assert!(!history.is_redo_stack_empty());
}
