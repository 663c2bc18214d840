use super::*;
use serde_json::json;

fn props(pairs: &[(&str, Value)]) -> Props {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn test_delta_identical_inputs_empty() {
    let a = props(&[("x", json!(1)), ("y", json!(2))]);
    assert!(Delta::calculate(&a, &a.clone()).is_empty());
}

#[test]
fn test_delta_records_changed_keys_only() {
    let prev = props(&[("x", json!(1)), ("y", json!(2))]);
    let next = props(&[("x", json!(1)), ("y", json!(3))]);
    let d = Delta::calculate(&prev, &next);
    assert_eq!(d.from, props(&[("y", json!(2))]));
    assert_eq!(d.to, props(&[("y", json!(3))]));
}

#[test]
fn test_delta_missing_key_encoded_as_null() {
    let prev = props(&[("x", json!(1))]);
    let next = props(&[("x", json!(1)), ("stroke", json!("red"))]);
    let d = Delta::calculate(&prev, &next);
    assert_eq!(d.from, props(&[("stroke", Value::Null)]));
    assert_eq!(d.to, props(&[("stroke", json!("red"))]));
    assert_eq!(d.from.len(), d.to.len());
}

#[test]
fn test_delta_dropped_key_encoded_as_null() {
    let prev = props(&[("stroke", json!("red"))]);
    let next = Props::new();
    let d = Delta::calculate(&prev, &next);
    assert_eq!(d.to, props(&[("stroke", Value::Null)]));
}

#[test]
fn test_delta_double_swap_is_identity() {
    let prev = props(&[("x", json!(1))]);
    let next = props(&[("x", json!(2))]);
    let d = Delta::calculate(&prev, &next);
    assert_eq!(d.swapped().swapped(), d);
}

#[test]
fn test_delta_calculate_with_strips_keys() {
    let prev = props(&[("x", json!(1)), ("seed", json!(11))]);
    let next = props(&[("x", json!(2)), ("seed", json!(12))]);
    let d = Delta::calculate_with(&prev, &next, |half| {
        half.remove("seed");
    });
    assert_eq!(d.from, props(&[("x", json!(1))]));
    assert_eq!(d.to, props(&[("x", json!(2))]));
}

#[test]
fn test_contains_difference() {
    let current = props(&[("x", json!(1)), ("y", json!(2))]);
    assert!(Delta::contains_difference(&props(&[("x", json!(5))]), &current));
    assert!(!Delta::contains_difference(&props(&[("x", json!(1))]), &current));
}

#[test]
fn test_contains_difference_null_matches_missing() {
    let current = props(&[("x", json!(1))]);
    assert!(!Delta::contains_difference(&props(&[("stroke", Value::Null)]), &current));
    assert!(Delta::contains_difference(&props(&[("stroke", json!("red"))]), &current));
}

#[test]
fn test_contains_difference_structural_equality_on_objects() {
    let current = props(&[("bounds", json!({ "w": 1, "h": 2 }))]);
    let partial = props(&[("bounds", json!({ "w": 1, "h": 2 }))]);
    assert!(!Delta::contains_difference(&partial, &current));
}
