//! Boolean field validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Description, SchemaError};
use crate::validator::FieldContext;

/// Options of a boolean field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanOptions {
    /// Accept `0`, `1`, `"0"` and `"1"` as booleans.
    #[serde(rename = "allowNumeric", default = "allow_numeric_default")]
    pub allow_numeric: bool,
}

fn allow_numeric_default() -> bool {
    true
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            allow_numeric: allow_numeric_default(),
        }
    }
}

impl BooleanOptions {
    /// Returns the boolean a recognized value stands for.
    fn recognize(&self, value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                "1" if self.allow_numeric => Some(true),
                "0" if self.allow_numeric => Some(false),
                _ => None,
            },
            Value::Number(n) if self.allow_numeric => match n.as_f64() {
                Some(v) if v == 1.0 => Some(true),
                Some(v) if v == 0.0 => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Validates a boolean field and normalizes it to a real boolean.
pub(crate) fn check_boolean(
    field: &FieldContext<'_>,
    options: &BooleanOptions,
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    match options.recognize(slot) {
        Some(b) => {
            *slot = Value::Bool(b);
            true
        }
        None => field.fail(errors, slot.clone(), Description::NotBoolean),
    }
}
