//! Integration tests for boolean fields.

use paramguard::{DataBag, Schema, Validate};
use serde_json::{json, Value};

fn bag(value: Value) -> DataBag {
    value.as_object().cloned().unwrap()
}

fn coerce(schema: &Schema, raw: Value) -> Option<Value> {
    let mut data = bag(json!({ "flag": raw }));
    schema
        .validate(&mut data)
        .is_success()
        .then(|| data["flag"].clone())
}

#[test]
fn test_normalization_table() {
    let schema = Schema::boolean("flag");

    assert_eq!(coerce(&schema, json!(true)), Some(json!(true)));
    assert_eq!(coerce(&schema, json!(false)), Some(json!(false)));
    assert_eq!(coerce(&schema, json!("true")), Some(json!(true)));
    assert_eq!(coerce(&schema, json!("false")), Some(json!(false)));
    assert_eq!(coerce(&schema, json!("1")), Some(json!(true)));
    assert_eq!(coerce(&schema, json!("0")), Some(json!(false)));
    assert_eq!(coerce(&schema, json!(1)), Some(json!(true)));
    assert_eq!(coerce(&schema, json!(0)), Some(json!(false)));
}

#[test]
fn test_unrecognized_values_fail() {
    let schema = Schema::boolean("flag");

    for raw in [json!("yes"), json!("True"), json!(2), json!([]), json!({})] {
        let mut data = bag(json!({ "flag": raw.clone() }));
        let errors = schema.validate(&mut data).into_result().unwrap_err();
        assert_eq!(errors.first().description, "not boolean");
        assert_eq!(errors.first().value, raw);
        assert_eq!(data["flag"], raw);
    }
}

#[test]
fn test_numeric_forms_rejected_when_disabled() {
    let schema = Schema::boolean("flag").allow_numeric(false);

    assert_eq!(coerce(&schema, json!("1")), None);
    assert_eq!(coerce(&schema, json!(0)), None);
    assert_eq!(coerce(&schema, json!("true")), Some(json!(true)));
    assert_eq!(coerce(&schema, json!(false)), Some(json!(false)));
}
