//! End-to-end checks of the validator's documented guarantees.

use paramguard::{validate, DataBag, EnumSymbols, Schema, Validate};
use serde_json::{json, Value};

fn bag(value: Value) -> DataBag {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_every_failing_field_reported_once() {
    let fields: Vec<Schema> = (0..8).map(|i| Schema::int(format!("f{}", i)).max(10)).collect();
    let mut data = bag(json!({
        "f0": "1", "f1": "20", "f2": "x", "f3": 4,
        "f4": "11", "f5": "3", "f6": null
    }));

    let errors = validate(&fields, &mut data).into_result().unwrap_err();
    let names: Vec<_> = errors.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["f1", "f2", "f4", "f6", "f7"]);
}

#[test]
fn test_revalidating_coerced_bag_is_stable() {
    let fields = vec![
        Schema::int("n"),
        Schema::float("f"),
        Schema::string("s"),
        Schema::boolean("b"),
        Schema::array("a", Schema::int("")),
        Schema::object("o", [Schema::boolean("x")]),
    ];
    let mut data = bag(json!({
        "n": "5", "f": "2.5", "s": 7, "b": "1", "a": "[\"1\", 2]", "o": "{\"x\": \"false\"}"
    }));

    assert!(validate(&fields, &mut data).is_success());
    let coerced = data.clone();
    assert_eq!(
        Value::Object(coerced.clone()),
        json!({"n": 5, "f": 2.5, "s": "7", "b": true, "a": [1, 2], "o": {"x": false}})
    );

    assert!(validate(&fields, &mut data).is_success());
    assert_eq!(data, coerced);
}

#[test]
fn test_optional_absent_field_passes_silently() {
    let fields = vec![
        Schema::int("a").optional(),
        Schema::array("b", Schema::int("")).optional(),
        Schema::object("c", [Schema::int("d")]).optional(),
        Schema::enumeration("e", EnumSymbols::strings(["x"]).unwrap()).optional(),
    ];
    let mut data = DataBag::new();

    assert!(fields.validate(&mut data).is_success());
    assert!(data.is_empty());
}

#[test]
fn test_failed_validation_still_coerces_passing_fields() {
    let fields = vec![Schema::int("good"), Schema::int("bad"), Schema::boolean("flag")];
    let mut data = bag(json!({"good": "1", "bad": "?", "flag": "0"}));

    assert!(fields.validate(&mut data).is_failure());
    assert_eq!(Value::Object(data), json!({"good": 1, "bad": "?", "flag": false}));
}
