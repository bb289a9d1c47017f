//! Array field validation.
//!
//! An array field also accepts a string holding a JSON array literal, which
//! replaces the raw string in the bag. Every element is checked against the
//! element schema, named by its index, and every failing element is reported.

use serde_json::Value;

use crate::error::{Description, SchemaError};
use crate::validator::{check_slot, FieldContext};

use super::{parse_embedded_json, Schema};

/// Validates an array field and each of its elements.
///
/// The array is written back before its elements are checked, so a parsed
/// array stays in the bag even when some elements fail.
pub(crate) fn check_array(
    field: &FieldContext<'_>,
    element: &Schema,
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    if let Some(parsed) = parse_embedded_json(slot, Value::is_array) {
        *slot = parsed;
    }
    let items = match slot {
        Value::Array(items) => items,
        other => return field.fail(errors, other.clone(), Description::ArrayExpected),
    };

    let element_path = field.path().open_index();
    let mut valid = true;
    for (index, item) in items.iter_mut().enumerate() {
        valid &= check_slot(element, &index.to_string(), Some(item), errors, &element_path);
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ErrorPath;
    use serde_json::json;

    fn run(schema: &Schema, mut value: Value) -> (bool, Value, Vec<SchemaError>) {
        let mut errors = Vec::new();
        let valid = check_slot(
            schema,
            &schema.name,
            Some(&mut value),
            &mut errors,
            &ErrorPath::root(),
        );
        (valid, value, errors)
    }

    #[test]
    fn test_every_failing_element_is_reported() {
        let schema = Schema::array("ids", Schema::int(""));
        let (valid, value, errors) = run(&schema, json!(["x", "2", "y"]));

        assert!(!valid);
        assert_eq!(value, json!(["x", 2, "y"]));
        let names: Vec<_> = errors.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ids[0]", "ids[2]"]);
    }

    #[test]
    fn test_null_element_is_not_found() {
        let schema = Schema::array("ids", Schema::int(""));
        let (valid, _, errors) = run(&schema, json!([1, null]));

        assert!(!valid);
        assert_eq!(errors[0].name, "ids[1]");
        assert_eq!(errors[0].description, "not found");
    }

    #[test]
    fn test_null_element_passes_when_optional() {
        let schema = Schema::array("ids", Schema::int("").optional());
        let (valid, value, errors) = run(&schema, json!([1, null]));

        assert!(valid);
        assert_eq!(value, json!([1, null]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_non_array_string_records_raw_value() {
        let schema = Schema::array("tags", Schema::string(""));
        let (valid, value, errors) = run(&schema, json!("{\"a\": 1}"));

        assert!(!valid);
        assert_eq!(value, json!("{\"a\": 1}"));
        assert_eq!(errors[0].description, "array expected");
        assert_eq!(errors[0].value, json!("{\"a\": 1}"));
    }

    #[test]
    fn test_empty_array_is_valid() {
        let schema = Schema::array("ids", Schema::int(""));
        let (valid, value, _) = run(&schema, json!("[]"));

        assert!(valid);
        assert_eq!(value, json!([]));
    }
}
