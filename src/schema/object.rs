//! Object field validation.

use serde_json::Value;

use crate::error::{Description, SchemaError};
use crate::validator::{FieldContext, Validate};

use super::{parse_embedded_json, Schema};

/// Validates an object field against its nested field list.
///
/// A string holding a JSON object literal is parsed and replaces the raw
/// string. The nested fields are then validated in place under the field's
/// path.
pub(crate) fn check_object(
    field: &FieldContext<'_>,
    fields: &[Schema],
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    if let Some(parsed) = parse_embedded_json(slot, Value::is_object) {
        *slot = parsed;
    }
    match slot {
        Value::Object(map) => fields.validate_into(map, errors, field.path()),
        other => field.fail(errors, other.clone(), Description::ObjectExpected),
    }
}
