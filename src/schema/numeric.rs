//! Numeric field validation.
//!
//! Integer and float fields accept real numbers as well as numeric text. Text
//! is parsed loosely: leading whitespace is skipped and the longest numeric
//! prefix is used, so `"42abc"` reads as `42` while `"abc"` is not a number.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{Description, SchemaError};
use crate::validator::FieldContext;

/// Inclusive bounds of a numeric field.
///
/// A bound of `Some(0.0)` is a real bound; only `None` means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumericBounds {
    fn violation(&self, value: f64) -> Option<Description> {
        match (self.min, self.max) {
            (Some(min), _) if value < min => Some(Description::LessThanMin),
            (_, Some(max)) if value > max => Some(Description::GreaterThanMax),
            _ => None,
        }
    }
}

/// Validates and coerces an integer field.
pub(crate) fn check_int(
    field: &FieldContext<'_>,
    bounds: &NumericBounds,
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    match parse_int(slot) {
        Some(number) => finish(field, bounds, slot, Value::Number(number), errors),
        None => field.fail(errors, slot.clone(), Description::NotANumber),
    }
}

/// Validates and coerces a floating-point field.
pub(crate) fn check_float(
    field: &FieldContext<'_>,
    bounds: &NumericBounds,
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    match parse_float(slot) {
        Some(number) => finish(field, bounds, slot, Value::Number(number), errors),
        None => field.fail(errors, slot.clone(), Description::NotANumber),
    }
}

fn finish(
    field: &FieldContext<'_>,
    bounds: &NumericBounds,
    slot: &mut Value,
    parsed: Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    let numeric = parsed.as_f64().unwrap_or(f64::NAN);
    if let Some(description) = bounds.violation(numeric) {
        return field.fail(errors, slot.clone(), description);
    }
    *slot = parsed;
    true
}

/// Parses a value the way a loose integer parser would.
///
/// Numbers are truncated toward zero; text accepts an optional sign followed
/// by decimal digits or a `0x` hexadecimal literal. Floats whose text is in
/// exponent form (`1e21`, `1e-7`) are read from that text like a string
/// would be, so both give `1`.
pub(crate) fn parse_int(value: &Value) -> Option<Number> {
    if let Value::Number(number) = value {
        if number.is_i64() || number.is_u64() {
            return Some(number.clone());
        }
        let f = number.as_f64()?;
        if !exponent_form(f) {
            return integral_number(f.trunc());
        }
    }

    let text = loose_text(value)?;
    let captures = int_pattern().captures(text.trim_start())?;
    let negative = captures.get(1).map_or(false, |sign| sign.as_str() == "-");
    let (digits, radix) = match (captures.get(2), captures.get(3)) {
        (Some(hex), _) => (hex.as_str(), 16),
        (None, Some(decimal)) => (decimal.as_str(), 10),
        (None, None) => return None,
    };
    if digits.is_empty() {
        return None;
    }

    match i64::from_str_radix(digits, radix) {
        Ok(magnitude) => Some(Number::from(if negative { -magnitude } else { magnitude })),
        Err(_) => {
            let magnitude = digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0f64, |acc, digit| acc * f64::from(radix) + f64::from(digit));
            Number::from_f64(if negative { -magnitude } else { magnitude })
        }
    }
}

/// Parses a value the way a loose floating-point parser would.
///
/// Results that cannot be represented as JSON numbers, such as `Infinity`,
/// count as not a number.
pub(crate) fn parse_float(value: &Value) -> Option<Number> {
    if let Value::Number(number) = value {
        return Some(number.clone());
    }

    let text = loose_text(value)?;
    let matched = float_pattern().find(text.trim_start())?;
    let parsed: f64 = matched.as_str().parse().ok()?;
    Number::from_f64(parsed)
}

/// Whether a float's JSON text uses an exponent.
fn exponent_form(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6)
}

fn integral_number(value: f64) -> Option<Number> {
    if value.abs() < 9_007_199_254_740_992.0 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// Renders a value as the text a loose numeric parser sees.
///
/// Arrays render as their comma-joined elements; objects have no numeric text.
fn loose_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Some(String::new()),
                    other => loose_text(other),
                })
                .collect::<Option<Vec<_>>>()?
                .join(","),
        ),
        Value::Null | Value::Object(_) => None,
    }
}

fn int_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([+-]?)(?:0[xX]([0-9a-fA-F]*)|([0-9]+))").expect("valid integer pattern")
    })
}

fn float_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("valid float pattern")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_int_from_text() {
        assert_eq!(parse_int(&json!("42")), Some(Number::from(42)));
        assert_eq!(parse_int(&json!("  -7")), Some(Number::from(-7)));
        assert_eq!(parse_int(&json!("+3")), Some(Number::from(3)));
        assert_eq!(parse_int(&json!("42abc")), Some(Number::from(42)));
        assert_eq!(parse_int(&json!("3.9")), Some(Number::from(3)));
        assert_eq!(parse_int(&json!("0x1A")), Some(Number::from(26)));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric_text() {
        assert_eq!(parse_int(&json!("abc")), None);
        assert_eq!(parse_int(&json!("")), None);
        assert_eq!(parse_int(&json!("-")), None);
        assert_eq!(parse_int(&json!("0x")), None);
        assert_eq!(parse_int(&json!(true)), None);
        assert_eq!(parse_int(&json!({"a": 1})), None);
    }

    #[test]
    fn test_parse_int_from_numbers() {
        assert_eq!(parse_int(&json!(5)), Some(Number::from(5)));
        assert_eq!(parse_int(&json!(5.9)), Some(Number::from(5)));
        assert_eq!(parse_int(&json!(-5.9)), Some(Number::from(-5)));
    }

    #[test]
    fn test_parse_int_reads_exponent_numbers_as_text() {
        assert_eq!(parse_int(&json!(1e21)), Some(Number::from(1)));
        assert_eq!(parse_int(&json!(-2.5e22)), Some(Number::from(-2)));
        assert_eq!(parse_int(&json!(5e-7)), Some(Number::from(5)));
        assert_eq!(parse_int(&json!(0.5)), Some(Number::from(0)));
        assert_eq!(parse_int(&json!(1e20)).unwrap().as_f64(), Some(1e20));
    }

    #[test]
    fn test_parse_int_overflow_falls_back_to_float() {
        let parsed = parse_int(&json!("100000000000000000000")).unwrap();
        assert_eq!(parsed.as_f64(), Some(1e20));
    }

    #[test]
    fn test_parse_int_from_single_element_array() {
        assert_eq!(parse_int(&json!(["12"])), Some(Number::from(12)));
        assert_eq!(parse_int(&json!([])), None);
    }

    #[test]
    fn test_parse_float_from_text() {
        assert_eq!(parse_float(&json!("2.5")).unwrap().as_f64(), Some(2.5));
        assert_eq!(parse_float(&json!("1e3x")).unwrap().as_f64(), Some(1000.0));
        assert_eq!(parse_float(&json!(".5")).unwrap().as_f64(), Some(0.5));
        assert_eq!(parse_float(&json!("7.")).unwrap().as_f64(), Some(7.0));
        assert_eq!(parse_float(&json!("3e")).unwrap().as_f64(), Some(3.0));
        assert_eq!(parse_float(&json!("-0.25kg")).unwrap().as_f64(), Some(-0.25));
    }

    #[test]
    fn test_parse_float_rejects_non_numeric() {
        assert_eq!(parse_float(&json!("abc")), None);
        assert_eq!(parse_float(&json!(".")), None);
        assert_eq!(parse_float(&json!("Infinity")), None);
        assert_eq!(parse_float(&json!(false)), None);
    }

    #[test]
    fn test_bounds_violation() {
        let bounds = NumericBounds {
            min: Some(0.0),
            max: Some(10.0),
        };
        assert_eq!(bounds.violation(-1.0), Some(Description::LessThanMin));
        assert_eq!(bounds.violation(11.0), Some(Description::GreaterThanMax));
        assert_eq!(bounds.violation(0.0), None);
        assert_eq!(bounds.violation(10.0), None);
        assert_eq!(NumericBounds::default().violation(-1e9), None);
    }
}
