use propmap::convert::json_to_value;
use propmap::{PathSegment, ResolveError, SegmentKind, Value, ValueKind, parse, resolve, resolve_path};
use serde_json::json;

fn doc(v: serde_json::Value) -> Value {
    json_to_value(v)
}

fn strings(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|s| Value::from(*s)).collect())
}

fn user() -> Value {
    doc(json!({
        "id": "id1",
        "name": "name1",
        "notused": "nope1",
        "address": {"postalCode": "1postal2"},
        "roles": [
            {"name": "admin", "description": "admin stuff"},
            {"name": "editor", "description": "editor stuff"}
        ]
    }))
}

// ============================================================================
// Terminal cases
// ============================================================================

#[test]
fn test_empty_path_returns_input() {
    for value in [
        Value::from("literalUserId"),
        Value::Null,
        Value::Integer(7),
        user(),
        doc(json!([1, [2, 3]])),
    ] {
        assert_eq!(resolve(&value, &parse("")).unwrap(), value);
    }
}

#[test]
fn test_no_segments_returns_input() {
    let value = user();
    assert_eq!(resolve(&value, &[]).unwrap(), value);
}

#[test]
fn test_named_literal() {
    let value = doc(json!({"id": "x"}));
    assert_eq!(resolve_path(&value, "id").unwrap(), Value::from("x"));
}

#[test]
fn test_named_literal_returns_whole_subtree() {
    let result = resolve_path(&user(), "address").unwrap();
    assert_eq!(result, doc(json!({"postalCode": "1postal2"})));
}

// ============================================================================
// Object descent
// ============================================================================

#[test]
fn test_nested_fields() {
    let result = resolve_path(&user(), "address.postalCode").unwrap();
    assert_eq!(result, Value::from("1postal2"));
}

#[test]
fn test_alternative_delimiters_descend_the_same_way() {
    for path in ["address,postalCode", "address|postalCode", "address&postalCode"] {
        assert_eq!(resolve_path(&user(), path).unwrap(), Value::from("1postal2"));
    }
}

#[test]
fn test_empty_object_step_consumes_no_level() {
    assert_eq!(resolve_path(&user(), ".id").unwrap(), Value::from("id1"));
    assert_eq!(
        resolve_path(&user(), "address..postalCode").unwrap(),
        Value::from("1postal2")
    );
}

#[test]
fn test_escaped_field_name() {
    let value = doc(json!({"a.b": {"c": 1}, "a": {"b": {"c": 2}}}));
    assert_eq!(resolve_path(&value, "a\\.b.c").unwrap(), Value::Integer(1));
    assert_eq!(resolve_path(&value, "a.b.c").unwrap(), Value::Integer(2));
}

// ============================================================================
// Array fan-out
// ============================================================================

#[test]
fn test_named_array_fan_out() {
    let value = doc(json!({"roles": [{"name": "a"}, {"name": "b"}]}));
    assert_eq!(resolve_path(&value, "roles[].name").unwrap(), strings(&["a", "b"]));
}

#[test]
fn test_root_array_fan_out() {
    let value = doc(json!([
        {"id": "id1", "address": {"postalCode": "1postal2"}},
        {"id": "id2", "address": {"postalCode": "2postal3"}}
    ]));

    assert_eq!(resolve_path(&value, "[].id").unwrap(), strings(&["id1", "id2"]));
    assert_eq!(
        resolve_path(&value, "[].address.postalCode").unwrap(),
        strings(&["1postal2", "2postal3"])
    );
}

#[test]
fn test_fan_out_without_tail_copies_elements() {
    let value = doc(json!({"tags": ["x", "y"]}));
    assert_eq!(resolve_path(&value, "tags[]").unwrap(), strings(&["x", "y"]));
}

#[test]
fn test_nested_fan_out_keeps_structure() {
    let value = doc(json!([[[1, 2], [3]], [[4]]]));
    let result = resolve_path(&value, "[][][]").unwrap();
    assert_eq!(result, value);

    let value = doc(json!({"groups": [
        {"members": [{"id": 1}, {"id": 2}]},
        {"members": []},
        {"members": [{"id": 3}]}
    ]}));
    assert_eq!(
        resolve_path(&value, "groups[].members[].id").unwrap(),
        doc(json!([[1, 2], [], [3]]))
    );
}

#[test]
fn test_fan_out_over_empty_array() {
    let value = doc(json!({"roles": []}));
    assert_eq!(resolve_path(&value, "roles[].name").unwrap(), Value::Array(vec![]));
}

#[test]
fn test_fan_out_preserves_order() {
    let value = doc(json!({"items": [{"n": 3}, {"n": 1}, {"n": 2}]}));
    assert_eq!(resolve_path(&value, "items[].n").unwrap(), doc(json!([3, 1, 2])));
}

#[test]
fn test_does_not_mutate_input() {
    let value = user();
    let before = value.clone();
    resolve_path(&value, "roles[].name").unwrap();
    assert_eq!(value, before);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_field() {
    let value = doc(json!({"id": "x"}));
    let err = resolve_path(&value, "missing").unwrap_err();
    assert_eq!(
        err,
        ResolveError::MissingField {
            field: "missing".to_string(),
            value: value.clone(),
        }
    );
}

#[test]
fn test_missing_nested_field_reports_inner_object() {
    let err = resolve_path(&user(), "address.city").unwrap_err();
    match err {
        ResolveError::MissingField { field, value } => {
            assert_eq!(field, "city");
            assert_eq!(value, doc(json!({"postalCode": "1postal2"})));
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_scalar_is_not_an_array() {
    let err = resolve_path(&Value::from("scalar"), "a[].b").unwrap_err();
    assert!(matches!(err, ResolveError::ShapeMismatch { .. }));

    let err = resolve_path(&Value::from("scalar"), "[].b").unwrap_err();
    assert_eq!(
        err,
        ResolveError::ShapeMismatch {
            expected: ValueKind::Array,
            actual: ValueKind::Literal,
            value: Value::from("scalar"),
        }
    );
}

#[test]
fn test_object_is_not_an_array() {
    let err = resolve_path(&user(), "address[].postalCode").unwrap_err();
    match err {
        ResolveError::ShapeMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, ValueKind::Array);
            assert_eq!(actual, ValueKind::Object);
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_array_is_not_an_object() {
    let err = resolve_path(&user(), "roles.name").unwrap_err();
    match err {
        ResolveError::ShapeMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, ValueKind::Object);
            assert_eq!(actual, ValueKind::Array);
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_error_in_one_element_fails_whole_fan_out() {
    let value = doc(json!({"roles": [{"name": "a"}, {"title": "b"}]}));
    let err = resolve_path(&value, "roles[].name").unwrap_err();
    assert_eq!(err.value(), &doc(json!({"title": "b"})));
}

// ============================================================================
// Hand-built segments
// ============================================================================

#[test]
fn test_root_segment_mid_path_passes_through() {
    let segments = vec![
        PathSegment::new("address", SegmentKind::ObjectStep),
        PathSegment::root(),
        PathSegment::new("postalCode", SegmentKind::Literal),
    ];
    assert_eq!(resolve(&user(), &segments).unwrap(), Value::from("1postal2"));
}

#[test]
fn test_literal_stops_descent() {
    // nothing after a literal is visited
    let segments = vec![
        PathSegment::new("id", SegmentKind::Literal),
        PathSegment::new("never", SegmentKind::Literal),
    ];
    assert_eq!(resolve(&user(), &segments).unwrap(), Value::from("id1"));
}
