//! Schema validation error types.
//!
//! This module provides [`SchemaError`] for single field failures,
//! [`Description`] for the fixed set of failure reasons, and [`SchemaErrors`]
//! for a non-empty list of failures in validation order.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use stillwater::prelude::*;

use crate::schema::SchemaType;

/// The reason a field failed validation.
///
/// Each checker draws its failures from a small closed set; the text of each
/// reason is fixed and is what ends up in [`SchemaError::description`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// A required field is absent or null.
    NotFound,
    /// The value does not parse as a number.
    NotANumber,
    /// The number is below the configured minimum.
    LessThanMin,
    /// The number is above the configured maximum.
    GreaterThanMax,
    /// The string length differs from the exact configured length.
    LengthNotMatch,
    /// The string is shorter than the configured minimum length.
    LengthLessThanMin,
    /// The string is longer than the configured maximum length.
    LengthGreaterThanMax,
    /// The value is not one of the recognized boolean forms.
    NotBoolean,
    /// An enum value is neither a string nor a number.
    NotNumberOrString,
    /// An enum value is not a member; carries the rendered symbol list.
    InvalidSymbol(String),
    /// The value is not an array and no array could be parsed from it.
    ArrayExpected,
    /// The value is not an object and no object could be parsed from it.
    ObjectExpected,
}

impl Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::NotFound => f.write_str("not found"),
            Description::NotANumber => f.write_str("not a number"),
            Description::LessThanMin => f.write_str("less than min"),
            Description::GreaterThanMax => f.write_str("greater than max"),
            Description::LengthNotMatch => f.write_str("length not match"),
            Description::LengthLessThanMin => f.write_str("length less than min"),
            Description::LengthGreaterThanMax => f.write_str("length greater than max"),
            Description::NotBoolean => f.write_str("not boolean"),
            Description::NotNumberOrString => f.write_str("not number or string"),
            Description::InvalidSymbol(symbols) => {
                write!(f, "invalid symbol, valid symbols : {}", symbols)
            }
            Description::ArrayExpected => f.write_str("array expected"),
            Description::ObjectExpected => f.write_str("object expected"),
        }
    }
}

/// A single failed field.
///
/// - **name**: full path of the field, e.g. `user.age` or `ids[1]`
/// - **type**: the type the schema declared for the field
/// - **value**: the raw value before any coercion (`null` when absent)
/// - **description**: the fixed failure reason
///
/// # Example
///
/// ```rust
/// use paramguard::{Description, SchemaError, SchemaType};
/// use serde_json::json;
///
/// let error = SchemaError::new("user.age", SchemaType::Int, json!("x"), Description::NotANumber);
///
/// assert_eq!(error.description, "not a number");
/// assert_eq!(error.to_string(), "user.age: not a number (type: int, got: \"x\")");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaError {
    /// The path of the field that failed validation.
    pub name: String,
    /// The type declared by the field's schema.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// The offending raw value.
    pub value: Value,
    /// Human-readable failure reason.
    pub description: String,
}

impl SchemaError {
    /// Creates a new error for the field at `name`.
    pub fn new(
        name: impl Into<String>,
        schema_type: SchemaType,
        value: Value,
        description: Description,
    ) -> Self {
        Self {
            name: name.into(),
            schema_type,
            value,
            description: description.to_string(),
        }
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(root)"
        } else {
            self.name.as_str()
        };

        write!(
            f,
            "{}: {} (type: {}, got: {})",
            name, self.description, self.schema_type, self.value
        )
    }
}

impl std::error::Error for SchemaError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
};

/// A non-empty collection of schema validation errors.
///
/// `SchemaErrors` wraps a `NonEmptyVec<SchemaError>` so that a failed
/// validation always carries at least one error. Errors keep the order in
/// which fields were checked.
///
/// # Combining Errors
///
/// ```rust
/// use paramguard::{Description, SchemaError, SchemaErrors, SchemaType};
/// use serde_json::Value;
/// use stillwater::prelude::*;
///
/// let errors1 = SchemaErrors::single(
///     SchemaError::new("name", SchemaType::String, Value::Null, Description::NotFound)
/// );
/// let errors2 = SchemaErrors::single(
///     SchemaError::new("age", SchemaType::Int, Value::Null, Description::NotFound)
/// );
///
/// let combined = errors1.combine(errors2);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrors(NonEmptyVec<SchemaError>);

impl SchemaErrors {
    /// Creates a `SchemaErrors` containing a single error.
    pub fn single(error: SchemaError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `SchemaErrors` from a list, or `None` if the list is empty.
    pub fn from_vec(errors: Vec<SchemaError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = errors.next()?;
        Some(errors.fold(Self::single(head), |acc, error| {
            acc.combine(Self::single(error))
        }))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &SchemaError {
        self.0.head()
    }

    /// Returns all errors recorded for the field at `name`.
    pub fn at_path(&self, name: &str) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.name == name).collect()
    }

    /// Returns all errors with the given description.
    pub fn with_description(&self, description: &str) -> Vec<&SchemaError> {
        self.0
            .iter()
            .filter(|e| e.description == description)
            .collect()
    }

    /// Groups errors by field path, keeping the order in which paths first failed.
    pub fn by_path(&self) -> IndexMap<&str, Vec<&SchemaError>> {
        let mut grouped: IndexMap<&str, Vec<&SchemaError>> = IndexMap::new();
        for error in self.0.iter() {
            grouped.entry(error.name.as_str()).or_default().push(error);
        }
        grouped
    }

    /// Converts this collection into a `Vec<SchemaError>`.
    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0.into_vec()
    }
}

impl Semigroup for SchemaErrors {
    fn combine(self, other: Self) -> Self {
        SchemaErrors(self.0.combine(other.0))
    }
}

impl Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

impl Serialize for SchemaErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl IntoIterator for SchemaErrors {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a SchemaErrors {
    type Item = &'a SchemaError;
    type IntoIter = Box<dyn Iterator<Item = &'a SchemaError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaErrors>();
    assert_sync::<SchemaErrors>();
};
