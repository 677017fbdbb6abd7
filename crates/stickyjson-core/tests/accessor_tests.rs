/// Accessor protocol contract tests: sticky navigation, terminal extraction,
/// and eager mutation over `Value` trees.
use stickyjson_core::{AccessError, Value, ValueKind};

/// A small fixture tree:
/// `{"user":{"name":"Alice","tags":["admin","ops"],"age":30,"active":true,"email":null}}`
fn fixture() -> Value {
    let mut user = Value::object();
    user.insert("name", Value::string("Alice")).unwrap();
    let mut tags = Value::array();
    tags.push(Value::string("admin")).unwrap();
    tags.push(Value::string("ops")).unwrap();
    user.insert("tags", tags).unwrap();
    user.insert("age", Value::number(30.0)).unwrap();
    user.insert("active", Value::boolean(true)).unwrap();
    user.insert("email", Value::null()).unwrap();
    let mut root = Value::object();
    root.insert("user", user).unwrap();
    root
}

// ============================================================================
// Construction & inspection
// ============================================================================

#[test]
fn constructors_produce_expected_kinds() {
    assert_eq!(Value::object().kind(), ValueKind::Object);
    assert_eq!(Value::array().kind(), ValueKind::Array);
    assert_eq!(Value::string("x").kind(), ValueKind::String);
    assert_eq!(Value::number(1.5).kind(), ValueKind::Number);
    assert_eq!(Value::boolean(false).kind(), ValueKind::Boolean);
    assert_eq!(Value::null().kind(), ValueKind::Null);
}

#[test]
fn fresh_values_are_not_errored() {
    assert!(!Value::object().is_errored());
    assert!(Value::null().error().is_none());
}

// ============================================================================
// Sticky navigation
// ============================================================================

#[test]
fn get_hit_returns_child() {
    let root = fixture();
    assert_eq!(root.get("user").get("name").as_str().unwrap(), "Alice");
}

#[test]
fn at_hit_returns_element() {
    let root = fixture();
    assert_eq!(root.get("user").get("tags").at(1).as_str().unwrap(), "ops");
}

#[test]
fn missing_key_surfaces_unknown_key() {
    let root = Value::object();
    let err = root.get("a").as_str().unwrap_err();
    assert_eq!(err, AccessError::UnknownKey { key: "a".into() });
}

#[test]
fn first_failing_step_wins_over_later_steps() {
    // On {}, the "a" miss happens first; the later index step must not
    // replace it with IndexNotArray.
    let root = Value::object();
    let err = root.get("a").at(0).as_str().unwrap_err();
    assert_eq!(err, AccessError::UnknownKey { key: "a".into() });
}

#[test]
fn first_failing_step_wins_at_depth() {
    let root = fixture();
    let err = root
        .get("user")
        .get("missing")
        .at(3)
        .get("deeper")
        .as_f64()
        .unwrap_err();
    assert_eq!(err, AccessError::UnknownKey { key: "missing".into() });
}

#[test]
fn key_navigation_on_scalar_reports_key_not_object() {
    let root = fixture();
    let err = root.get("user").get("age").get("x").as_str().unwrap_err();
    assert_eq!(
        err,
        AccessError::KeyNotObject {
            key: "x".into(),
            actual: ValueKind::Number,
        }
    );
}

#[test]
fn index_navigation_on_scalar_reports_index_not_array() {
    let root = fixture();
    let err = root.get("user").get("name").at(0).as_str().unwrap_err();
    assert_eq!(
        err,
        AccessError::IndexNotArray {
            index: 0,
            actual: ValueKind::String,
        }
    );
}

#[test]
fn out_of_range_index_surfaces_index_out_of_range() {
    let root = fixture();
    let err = root.get("user").get("tags").at(2).as_str().unwrap_err();
    assert_eq!(err, AccessError::IndexOutOfRange { index: 2 });
}

#[test]
fn navigated_error_is_inspectable_before_extraction() {
    let root = Value::object();
    let navigated = root.get("nope");
    assert!(navigated.is_errored());
    assert_eq!(
        navigated.error(),
        Some(&AccessError::UnknownKey { key: "nope".into() })
    );
}

// ============================================================================
// Terminal extractors
// ============================================================================

#[test]
fn extractor_mismatch_reports_expected_actual_pair() {
    let err = Value::number(5.0).as_str().unwrap_err();
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            expected: ValueKind::String,
            actual: ValueKind::Number,
        }
    );
}

#[test]
fn every_extractor_rejects_null() {
    let v = Value::null();
    assert!(v.as_object().is_err());
    assert!(v.as_array().is_err());
    assert!(v.as_str().is_err());
    assert!(v.as_f64().is_err());
    assert!(v.as_bool().is_err());
    assert!(v.as_null().is_ok());
}

#[test]
fn stored_error_beats_fresh_type_mismatch() {
    // Extracting a boolean from an errored value must report the navigation
    // error, not a TypeMismatch against Errored.
    let root = Value::object();
    let err = root.get("k").as_bool().unwrap_err();
    assert_eq!(err, AccessError::UnknownKey { key: "k".into() });
}

#[test]
fn as_object_and_as_array_return_payloads() {
    let root = fixture();
    let user = root.get("user");
    assert_eq!(user.as_object().unwrap().len(), 5);
    assert_eq!(user.get("tags").as_array().unwrap().len(), 2);
}

#[test]
fn as_i64_truncates_toward_zero() {
    assert_eq!(Value::number(3.9).as_i64().unwrap(), 3);
    assert_eq!(Value::number(-3.9).as_i64().unwrap(), -3);
    assert_eq!(Value::number(30.0).as_i64().unwrap(), 30);
}

#[test]
fn as_i64_rejects_non_finite() {
    let err = Value::number(f64::NAN).as_i64().unwrap_err();
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            expected: ValueKind::Number,
            actual: ValueKind::Number,
        }
    );
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn insert_replaces_existing_member() {
    let mut root = Value::object();
    root.insert("k", Value::number(1.0)).unwrap();
    root.insert("k", Value::number(2.0)).unwrap();
    assert_eq!(root.get("k").as_f64().unwrap(), 2.0);
    assert_eq!(root.as_object().unwrap().len(), 1);
}

#[test]
fn insert_on_non_object_fails() {
    let mut v = Value::array();
    let err = v.insert("k", Value::null()).unwrap_err();
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            expected: ValueKind::Object,
            actual: ValueKind::Array,
        }
    );
}

#[test]
fn push_appends_in_order() {
    let mut arr = Value::array();
    arr.push(Value::number(1.0)).unwrap();
    arr.push(Value::number(2.0)).unwrap();
    assert_eq!(arr.at(0).as_f64().unwrap(), 1.0);
    assert_eq!(arr.at(1).as_f64().unwrap(), 2.0);
}

#[test]
fn set_at_replaces_in_place_without_changing_length() {
    let mut arr = Value::array();
    arr.push(Value::string("a")).unwrap();
    arr.push(Value::string("b")).unwrap();
    arr.set_at(1, Value::string("z")).unwrap();
    assert_eq!(arr.as_array().unwrap().len(), 2);
    assert_eq!(arr.at(1).as_str().unwrap(), "z");
}

#[test]
fn set_at_length_and_beyond_fail_without_extending() {
    let mut arr = Value::array();
    arr.push(Value::null()).unwrap();
    let err = arr.set_at(1, Value::null()).unwrap_err();
    assert_eq!(err, AccessError::IndexOutOfRange { index: 1 });
    let err = arr.set_at(5, Value::null()).unwrap_err();
    assert_eq!(err, AccessError::IndexOutOfRange { index: 5 });
    assert_eq!(arr.as_array().unwrap().len(), 1);
}

#[test]
fn scalar_setters_replace_payload_only() {
    let mut s = Value::string("old");
    s.set_string("new").unwrap();
    assert_eq!(s.as_str().unwrap(), "new");

    let mut n = Value::number(1.0);
    n.set_number(2.5).unwrap();
    assert_eq!(n.as_f64().unwrap(), 2.5);

    let mut b = Value::boolean(false);
    b.set_boolean(true).unwrap();
    assert!(b.as_bool().unwrap());
}

#[test]
fn scalar_setter_on_wrong_tag_fails() {
    let mut n = Value::number(1.0);
    let err = n.set_string("x").unwrap_err();
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            expected: ValueKind::String,
            actual: ValueKind::Number,
        }
    );
}

#[test]
fn mutating_an_errored_value_reports_the_stored_error() {
    let root = Value::object();
    let mut navigated = root.get("missing");
    let err = navigated.push(Value::null()).unwrap_err();
    assert_eq!(err, AccessError::UnknownKey { key: "missing".into() });
}

// ============================================================================
// Mutable navigation (eager)
// ============================================================================

#[test]
fn get_mut_chain_mutates_nested_value_in_place() {
    let mut root = fixture();
    root.get_mut("user")
        .unwrap()
        .get_mut("tags")
        .unwrap()
        .at_mut(0)
        .unwrap()
        .set_string("root")
        .unwrap();
    assert_eq!(root.get("user").get("tags").at(0).as_str().unwrap(), "root");
}

#[test]
fn get_mut_fails_eagerly_on_missing_key() {
    let mut root = Value::object();
    let err = root.get_mut("missing").unwrap_err();
    assert_eq!(err, AccessError::UnknownKey { key: "missing".into() });
}

#[test]
fn at_mut_fails_eagerly_on_wrong_tag() {
    let mut root = fixture();
    let err = root.get_mut("user").unwrap().at_mut(0).unwrap_err();
    assert_eq!(
        err,
        AccessError::IndexNotArray {
            index: 0,
            actual: ValueKind::Object,
        }
    );
}

// ============================================================================
// Error rendering
// ============================================================================

#[test]
fn error_messages_embed_the_offending_details() {
    assert_eq!(
        AccessError::UnknownKey { key: "a".into() }.to_string(),
        "unknown key \"a\""
    );
    assert_eq!(
        AccessError::IndexOutOfRange { index: 7 }.to_string(),
        "index 7 out of range"
    );
    assert_eq!(
        AccessError::TypeMismatch {
            expected: ValueKind::String,
            actual: ValueKind::Number,
        }
        .to_string(),
        "type mismatch: expected string, found number"
    );
    assert_eq!(
        AccessError::KeyNotObject {
            key: "k".into(),
            actual: ValueKind::Null,
        }
        .to_string(),
        "cannot access key \"k\" on null"
    );
    assert_eq!(
        AccessError::IndexNotArray {
            index: 2,
            actual: ValueKind::Boolean,
        }
        .to_string(),
        "cannot access index 2 on boolean"
    );
}
