//! Enum field validation.
//!
//! Enum values are never coerced: `"1"` is not a member of the numeric symbol
//! list `[1, 2]`.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{Description, SchemaDefinitionError, SchemaError};
use crate::validator::FieldContext;

/// The permitted values of an enum field, all strings or all numbers.
///
/// # Example
///
/// ```rust
/// use paramguard::EnumSymbols;
///
/// let symbols = EnumSymbols::strings(["a", "b", "c"]).unwrap();
/// assert_eq!(symbols.to_string(), "[a, b, c]");
///
/// assert!(EnumSymbols::strings(Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub enum EnumSymbols {
    Strings(Vec<String>),
    Numbers(Vec<Number>),
}

impl EnumSymbols {
    /// Creates a string symbol list. Fails if the list is empty.
    pub fn strings<I, S>(symbols: I) -> Result<Self, SchemaDefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(SchemaDefinitionError::EmptySymbols);
        }
        Ok(EnumSymbols::Strings(symbols))
    }

    /// Creates a numeric symbol list. Fails if the list is empty.
    pub fn numbers<I, N>(symbols: I) -> Result<Self, SchemaDefinitionError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        let symbols: Vec<Number> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(SchemaDefinitionError::EmptySymbols);
        }
        Ok(EnumSymbols::Numbers(symbols))
    }

    /// Returns true if `value` is one of the symbols.
    pub fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (EnumSymbols::Strings(symbols), Value::String(s)) => symbols.iter().any(|sym| sym == s),
            (EnumSymbols::Numbers(symbols), Value::Number(n)) => {
                let n = n.as_f64();
                symbols.iter().any(|sym| sym.as_f64() == n)
            }
            _ => false,
        }
    }
}

impl Display for EnumSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = match self {
            EnumSymbols::Strings(symbols) => symbols.clone(),
            EnumSymbols::Numbers(symbols) => symbols.iter().map(Number::to_string).collect(),
        };
        write!(f, "[{}]", rendered.join(", "))
    }
}

impl TryFrom<Vec<Value>> for EnumSymbols {
    type Error = SchemaDefinitionError;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        match values.first() {
            None => Err(SchemaDefinitionError::EmptySymbols),
            Some(Value::String(_)) => values
                .into_iter()
                .map(|value| match value {
                    Value::String(s) => Ok(s),
                    other => Err(SchemaDefinitionError::InvalidSymbol(other.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(EnumSymbols::Strings),
            Some(Value::Number(_)) => values
                .into_iter()
                .map(|value| match value {
                    Value::Number(n) => Ok(n),
                    other => Err(SchemaDefinitionError::InvalidSymbol(other.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(EnumSymbols::Numbers),
            Some(other) => Err(SchemaDefinitionError::InvalidSymbol(other.to_string())),
        }
    }
}

impl From<EnumSymbols> for Vec<Value> {
    fn from(symbols: EnumSymbols) -> Self {
        match symbols {
            EnumSymbols::Strings(symbols) => symbols.into_iter().map(Value::String).collect(),
            EnumSymbols::Numbers(symbols) => symbols.into_iter().map(Value::Number).collect(),
        }
    }
}

/// Checks enum membership. The value is left as it is.
pub(crate) fn check_enum(
    field: &FieldContext<'_>,
    symbols: &EnumSymbols,
    slot: &mut Value,
    errors: &mut Vec<SchemaError>,
) -> bool {
    if !matches!(slot, Value::String(_) | Value::Number(_)) {
        return field.fail(errors, slot.clone(), Description::NotNumberOrString);
    }
    if !symbols.contains(slot) {
        return field.fail(
            errors,
            slot.clone(),
            Description::InvalidSymbol(symbols.to_string()),
        );
    }
    true
}
