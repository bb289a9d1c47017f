//! String field validation.
//!
//! Non-string values are converted to their compact JSON text before the
//! length constraints are applied, so `123` is stored as `"123"` and
//! `{"a": 1}` as `"{\"a\":1}"`. A top-level integral float such as `1.0`
//! is stored as `"1"`. Lengths count Unicode scalar values, so `"😀"` has
//! length 1.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{Description, SchemaError};
use crate::validator::FieldContext;

/// Length constraints of a string field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLength {
    /// Exact length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl StringLength {
    fn violation(&self, len: usize) -> Option<Description> {
        if self.length.is_some_and(|length| len != length) {
            Some(Description::LengthNotMatch)
        } else if self.min_length.is_some_and(|min| len < min) {
            Some(Description::LengthLessThanMin)
        } else if self.max_length.is_some_and(|max| len > max) {
            Some(Description::LengthGreaterThanMax)
        } else {
            None
        }
    }
}

/// Validates and coerces a string field.
pub(crate) fn check_string(
    field: &FieldContext<'_>,
    constraints: &StringLength,
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    let text = match &*slot {
        Value::String(s) => s.clone(),
        Value::Number(number) => number_text(number),
        other => other.to_string(),
    };

    if let Some(description) = constraints.violation(text.chars().count()) {
        return field.fail(errors, slot.clone(), description);
    }

    *slot = Value::String(text);
    true
}

/// Renders a number as JSON text without a trailing `.0` on integral floats.
///
/// Integral floats below `1e21` print as plain digits, so `1.0` becomes `"1"`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if !number.is_i64() && !number.is_u64() => {
            if value.fract() == 0.0 && value.abs() < 1e21 {
                format!("{value}")
            } else {
                number.to_string()
            }
        }
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_constraints_accepts_any_length() {
        let constraints = StringLength::default();
        assert_eq!(constraints.violation(0), None);
        assert_eq!(constraints.violation(10_000), None);
    }

    #[test]
    fn test_exact_length_checked_first() {
        let constraints = StringLength {
            length: Some(3),
            min_length: Some(5),
            max_length: None,
        };
        assert_eq!(constraints.violation(4), Some(Description::LengthNotMatch));
        assert_eq!(constraints.violation(3), Some(Description::LengthLessThanMin));
    }

    #[test]
    fn test_zero_length_bounds() {
        let exact_zero = StringLength {
            length: Some(0),
            ..StringLength::default()
        };
        assert_eq!(exact_zero.violation(0), None);
        assert_eq!(exact_zero.violation(1), Some(Description::LengthNotMatch));

        let max_zero = StringLength {
            max_length: Some(0),
            ..StringLength::default()
        };
        assert_eq!(max_zero.violation(1), Some(Description::LengthGreaterThanMax));
    }

    #[test]
    fn test_number_text() {
        let text = |value: Value| match value {
            Value::Number(number) => number_text(&number),
            _ => unreachable!(),
        };
        assert_eq!(text(json!(1.0)), "1");
        assert_eq!(text(json!(-20.0)), "-20");
        assert_eq!(text(json!(1.5)), "1.5");
        assert_eq!(text(json!(42)), "42");
        assert_eq!(text(json!(1e21)), "1e21");
    }
}
