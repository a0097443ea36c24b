//! # Map Validator Integration Tests
//!
//! Exercise `MapOfType` the way a schema author would: inputs parsed from
//! JSON and YAML, validators composed through generics and trait objects,
//! nested maps, and concurrent use of a single validator instance.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use confschema_types::{
    BooleanType, IntegerType, LiteralType, MapOfType, RawValue, SchemaTypeError, StringType, Type,
    TypeOptions,
};
use serde_json::json;

fn limits() -> MapOfType<StringType, IntegerType> {
    MapOfType::new(
        StringType::new().min_length(1),
        IntegerType::new().min(0).max(100),
    )
}

// ---------------------------------------------------------------------------
// Concrete scenario: non-empty string keys, integer values in [0, 100]
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_valid_record() {
    let result = limits()
        .validate(&json!({"a": 10, "b": 55}).into(), None)
        .unwrap();
    assert_eq!(
        result,
        HashMap::from([("a".to_string(), 10), ("b".to_string(), 55)])
    );
}

#[test]
fn test_scenario_empty_key() {
    let err = limits()
        .validate(&json!({"a": 10, "": 5}).into(), Some("limits"))
        .unwrap_err();
    assert_eq!(err.context(), Some(r#"limits[""]"#));
    assert_eq!(err.path(), vec!["limits", ""]);
    assert!(err.message().contains("minimum length of [1]"));
}

#[test]
fn test_scenario_value_out_of_range() {
    let err = limits()
        .validate(&json!({"a": 200}).into(), Some("limits"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[limits.a]: Value must be equal to or lower than [100]."
    );
}

// ---------------------------------------------------------------------------
// Parsed sources
// ---------------------------------------------------------------------------

#[test]
fn test_yaml_record() {
    let raw: RawValue = serde_yaml::from_str(
        r#"
api: 40
worker: 60
"#,
    )
    .unwrap();
    let result = limits().validate(&raw, None).unwrap();
    assert_eq!(result["api"], 40);
    assert_eq!(result["worker"], 60);
}

#[test]
fn test_yaml_integer_keys_form_native_map() {
    let raw: RawValue = serde_yaml::from_str(
        r#"
200: ok
404: not found
"#,
    )
    .unwrap();
    let statuses = MapOfType::new(IntegerType::new().min(100).max(599), StringType::new());
    let result = statuses.validate(&raw, Some("statuses")).unwrap();
    assert_eq!(result[&404_i64], "not found");

    let raw: RawValue = serde_yaml::from_str("700: bogus\n").unwrap();
    let err = statuses.validate(&raw, Some("statuses")).unwrap_err();
    assert_eq!(err.context(), Some("statuses.700"));
    assert_eq!(err.message(), "Value must be equal to or lower than [599].");
}

#[test]
fn test_key_with_dot_is_bracketed() {
    let flags = MapOfType::new(StringType::new(), BooleanType::new());
    let err = flags
        .validate(&json!({"feature.beta": "yes"}).into(), Some("flags"))
        .unwrap_err();
    assert_eq!(err.context(), Some(r#"flags["feature.beta"]"#));
    assert_eq!(err.path(), vec!["flags", "feature.beta"]);
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn test_nested_maps_compose_paths() {
    let per_service = MapOfType::new(StringType::new(), limits());
    let err = per_service
        .validate(
            &json!({"billing": {"cpu": 50}, "search": {"cpu": 150}}).into(),
            Some("quotas"),
        )
        .unwrap_err();
    assert_eq!(err.context(), Some("quotas.search.cpu"));

    let inner_shape = per_service
        .validate(&json!({"billing": [1, 2]}).into(), Some("quotas"))
        .unwrap_err();
    assert_eq!(
        inner_shape.to_string(),
        "[quotas.billing]: expected value of type [Map] or [object] but got [Array]"
    );
}

#[test]
fn test_trait_object_validators() {
    let key: Box<dyn Type<Output = String>> = Box::new(StringType::new());
    let value: Box<dyn Type<Output = RawValue>> = Box::new(LiteralType::new(true));
    let ty = MapOfType::new(key, value);
    let result = ty.validate(&json!({"x": true}).into(), None).unwrap();
    assert_eq!(result["x"], RawValue::Bool(true));
}

#[test]
fn test_borrowed_validators() {
    let key = StringType::new();
    let value = IntegerType::new();
    let ty = MapOfType::new(&key, &value);
    assert_eq!(ty.validate(&json!({"n": 3}).into(), None).unwrap()["n"], 3);
}

// ---------------------------------------------------------------------------
// Fail-fast ordering and collisions
// ---------------------------------------------------------------------------

#[test]
fn test_first_failure_in_iteration_order_is_reported() {
    // Records iterate in document order: "zeta" before "alpha".
    let raw: RawValue = serde_json::from_str(r#"{"zeta": -1, "alpha": 500}"#).unwrap();
    let err = limits().validate(&raw, None).unwrap_err();
    assert_eq!(err.context(), Some("zeta"));

    let raw: RawValue = serde_yaml::from_str("zeta: -1\nalpha: 500\n").unwrap();
    let err = limits().validate(&raw, None).unwrap_err();
    assert_eq!(err.context(), Some("zeta"));

    // Native maps iterate in insertion order.
    let input = RawValue::map([
        ("b".into(), (-1_i64).into()),
        ("a".into(), 101_i64.into()),
    ]);
    let err = limits().validate(&input, None).unwrap_err();
    assert_eq!(err.context(), Some("b"));
}

/// Wraps a validator and counts how often it is asked to process a value.
struct Counting<T> {
    inner: T,
    calls: AtomicUsize,
}

impl<T> Counting<T> {
    fn new(inner: T) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: Type> Type for Counting<T> {
    type Output = T::Output;

    fn options(&self) -> &TypeOptions<T::Output> {
        self.inner.options()
    }

    fn expected_kind(&self) -> &'static str {
        self.inner.expected_kind()
    }

    fn process(&self, value: &RawValue, context: Option<&str>) -> Result<T::Output, SchemaTypeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.process(value, context)
    }
}

#[test]
fn test_entries_after_failing_value_are_not_visited() {
    let keys = Counting::new(StringType::new().min_length(1));
    let values = Counting::new(IntegerType::new().min(0).max(100));
    let ty = MapOfType::new(&keys, &values);
    let input = RawValue::map([
        ("a".into(), 1_i64.into()),
        ("b".into(), 500_i64.into()),
        ("c".into(), 1_i64.into()),
        ("d".into(), 1_i64.into()),
    ]);

    let err = ty.validate(&input, None).unwrap_err();
    assert_eq!(err.context(), Some("b"));
    // The failing entry's key ran exactly once; "c" and "d" were never reached.
    assert_eq!(keys.calls(), 2);
    assert_eq!(values.calls(), 2);
}

#[test]
fn test_failing_key_skips_its_value() {
    let keys = Counting::new(StringType::new().min_length(1));
    let values = Counting::new(IntegerType::new());
    let ty = MapOfType::new(&keys, &values);
    let input = RawValue::map([
        ("a".into(), 1_i64.into()),
        ("".into(), 2_i64.into()),
        ("c".into(), 3_i64.into()),
    ]);

    let err = ty.validate(&input, Some("m")).unwrap_err();
    assert_eq!(err.context(), Some(r#"m[""]"#));
    assert_eq!(keys.calls(), 2);
    assert_eq!(values.calls(), 1);
}

#[test]
fn test_successful_map_visits_every_entry_once() {
    let keys = Counting::new(StringType::new());
    let values = Counting::new(IntegerType::new());
    let ty = MapOfType::new(&keys, &values);

    ty.validate(&json!({"a": 1, "b": 2, "c": 3}).into(), None)
        .unwrap();
    assert_eq!(keys.calls(), 3);
    assert_eq!(values.calls(), 3);
}

/// Key validator that folds keys to lowercase.
struct LowercaseKey {
    options: TypeOptions<String>,
}

impl Type for LowercaseKey {
    type Output = String;

    fn options(&self) -> &TypeOptions<String> {
        &self.options
    }

    fn expected_kind(&self) -> &'static str {
        "string"
    }

    fn process(&self, value: &RawValue, context: Option<&str>) -> Result<String, SchemaTypeError> {
        value
            .as_str()
            .map(str::to_lowercase)
            .ok_or_else(|| SchemaTypeError::type_mismatch("string", value.kind_name(), context))
    }
}

#[test]
fn test_key_transform_collision_last_wins() {
    let ty = MapOfType::new(
        LowercaseKey {
            options: TypeOptions::new(),
        },
        IntegerType::new(),
    );
    let input = RawValue::map([
        ("Region".into(), 1_i64.into()),
        ("REGION".into(), 2_i64.into()),
    ]);
    let result = ty.validate(&input, None).unwrap();
    assert_eq!(result, HashMap::from([("region".to_string(), 2)]));
}

#[test]
fn test_failing_transformed_key_reports_raw_key() {
    let ty = MapOfType::new(
        LowercaseKey {
            options: TypeOptions::new().validate(|k: &String| {
                if k.len() <= 3 {
                    Ok(())
                } else {
                    Err(format!("key [{k}] is too long"))
                }
            }),
        },
        IntegerType::new(),
    );
    let err = ty
        .validate(&json!({"ABCD": 1}).into(), Some("codes"))
        .unwrap_err();
    assert_eq!(err.to_string(), "[codes.ABCD]: key [abcd] is too long");
}

#[test]
fn test_process_entries_directly() {
    use std::borrow::Cow;

    let key = RawValue::from("a");
    let value = RawValue::from(5_i64);
    let result = limits()
        .process_entries([(Cow::Borrowed(&key), &value)], Some("root"))
        .unwrap();
    assert_eq!(result["a"], 5);

    let bad = RawValue::from(500_i64);
    let err: SchemaTypeError = limits()
        .process_entries([(Cow::Borrowed(&key), &bad)], Some("root"))
        .unwrap_err();
    assert_eq!(err.context(), Some("root.a"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn test_shared_validator_across_threads() {
    let ty = limits();
    std::thread::scope(|s| {
        for i in 0..8_i64 {
            let ty = &ty;
            s.spawn(move || {
                let raw = RawValue::record([("n", RawValue::from(i * 10))]);
                assert_eq!(ty.validate(&raw, None).unwrap()["n"], i * 10);
            });
        }
    });
}
