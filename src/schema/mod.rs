//! Schema definitions for validation.
//!
//! A [`Schema`] describes one named field of a data bag: its kind, its
//! constraints, and whether it may be absent. Schemas are built either with
//! the constructor methods on [`Schema`] or deserialized from declarative JSON
//! definitions.
//!
//! Each kind lives in its own module together with the checker that validates
//! and coerces a value of that kind.
//!
//! # Example
//!
//! ```rust
//! use paramguard::{Schema, Validate};
//! use serde_json::json;
//!
//! let fields = vec![
//!     Schema::int("page").min(1),
//!     Schema::string("q").max_length(64).optional(),
//! ];
//!
//! let mut bag = json!({"page": "3"}).as_object().cloned().unwrap();
//! assert!(fields.validate(&mut bag).is_success());
//! assert_eq!(bag["page"], json!(3));
//! ```

mod array;
mod boolean;
mod enumeration;
mod numeric;
mod object;
mod string;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaDefinitionError;

pub use boolean::BooleanOptions;
pub use enumeration::EnumSymbols;
pub use numeric::NumericBounds;
pub use string::StringLength;

pub(crate) use array::check_array;
pub(crate) use boolean::check_boolean;
pub(crate) use enumeration::check_enum;
pub(crate) use numeric::{check_float, check_int};
pub(crate) use object::check_object;
pub(crate) use string::check_string;

/// The declared type of a field, as recorded in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Int,
    Float,
    String,
    Boolean,
    Enum,
    Array,
    Object,
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaType::Int => "int",
            SchemaType::Float => "float",
            SchemaType::String => "string",
            SchemaType::Boolean => "boolean",
            SchemaType::Enum => "enum",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        };
        f.write_str(name)
    }
}

/// The kind of a field together with its kind-specific constraints.
///
/// On the wire the variant is selected by the `type` key and the constraints
/// sit next to it, e.g. `{"name": "age", "type": "int", "min": 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaKind {
    /// Integer, parsed loosely from numbers and numeric strings.
    Int(NumericBounds),
    /// Floating-point number, parsed loosely from numbers and numeric strings.
    Float(NumericBounds),
    /// String; non-string values are serialized to JSON text.
    String(StringLength),
    /// Boolean, accepting `"true"`/`"false"` and optionally `0`/`1`.
    Boolean(BooleanOptions),
    /// One of a fixed list of strings or numbers.
    Enum { symbols: EnumSymbols },
    /// Array whose every element matches `element_type`.
    Array {
        #[serde(rename = "elementType")]
        element_type: Box<Schema>,
    },
    /// Object with its own ordered field list.
    Object { fields: Vec<Schema> },
}

/// A validation rule for one named field of a data bag.
///
/// Schemas are immutable once built and can be shared between any number of
/// concurrent validations.
///
/// # Example
///
/// ```rust
/// use paramguard::{Schema, SchemaType};
///
/// let schema = Schema::from_json_str(r#"{
///     "name": "user",
///     "type": "object",
///     "fields": [
///         {"name": "age", "type": "int", "min": 0},
///         {"name": "nick", "type": "string", "optional": true}
///     ]
/// }"#).unwrap();
///
/// assert_eq!(schema.name, "user");
/// assert_eq!(schema.schema_type(), SchemaType::Object);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Key of the field in the data bag. Unused for array element schemas.
    #[serde(default)]
    pub name: String,
    /// Whether the field may be absent or null.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// Kind and constraints.
    #[serde(flatten)]
    pub kind: SchemaKind,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Schema {
    /// Creates a required field with the given kind.
    pub fn new(name: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: name.into(),
            optional: false,
            kind,
        }
    }

    /// Creates an integer field.
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Int(NumericBounds::default()))
    }

    /// Creates a floating-point field.
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Float(NumericBounds::default()))
    }

    /// Creates a string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::String(StringLength::default()))
    }

    /// Creates a boolean field that also accepts `0` and `1`.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Boolean(BooleanOptions::default()))
    }

    /// Creates an enum field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paramguard::{EnumSymbols, Schema};
    ///
    /// let role = Schema::enumeration("role", EnumSymbols::strings(["admin", "user"]).unwrap());
    /// ```
    pub fn enumeration(name: impl Into<String>, symbols: EnumSymbols) -> Self {
        Self::new(name, SchemaKind::Enum { symbols })
    }

    /// Creates an array field whose elements all match `element`.
    ///
    /// The element schema's name is ignored; elements are named by index.
    pub fn array(name: impl Into<String>, element: Schema) -> Self {
        Self::new(
            name,
            SchemaKind::Array {
                element_type: Box::new(element),
            },
        )
    }

    /// Creates an object field validated against `fields`.
    pub fn object(name: impl Into<String>, fields: impl IntoIterator<Item = Schema>) -> Self {
        Self::new(
            name,
            SchemaKind::Object {
                fields: fields.into_iter().collect(),
            },
        )
    }

    /// Marks the field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the inclusive minimum of a numeric field. No effect on other kinds.
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        if let SchemaKind::Int(bounds) | SchemaKind::Float(bounds) = &mut self.kind {
            bounds.min = Some(min.into());
        }
        self
    }

    /// Sets the inclusive maximum of a numeric field. No effect on other kinds.
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        if let SchemaKind::Int(bounds) | SchemaKind::Float(bounds) = &mut self.kind {
            bounds.max = Some(max.into());
        }
        self
    }

    /// Sets the exact length of a string field. No effect on other kinds.
    pub fn length(mut self, length: usize) -> Self {
        if let SchemaKind::String(constraints) = &mut self.kind {
            constraints.length = Some(length);
        }
        self
    }

    /// Sets the minimum length of a string field. No effect on other kinds.
    pub fn min_length(mut self, min_length: usize) -> Self {
        if let SchemaKind::String(constraints) = &mut self.kind {
            constraints.min_length = Some(min_length);
        }
        self
    }

    /// Sets the maximum length of a string field. No effect on other kinds.
    pub fn max_length(mut self, max_length: usize) -> Self {
        if let SchemaKind::String(constraints) = &mut self.kind {
            constraints.max_length = Some(max_length);
        }
        self
    }

    /// Controls whether a boolean field accepts `0`/`1`. No effect on other kinds.
    pub fn allow_numeric(mut self, allow: bool) -> Self {
        if let SchemaKind::Boolean(options) = &mut self.kind {
            options.allow_numeric = allow;
        }
        self
    }

    /// Returns the declared type of this field.
    pub fn schema_type(&self) -> SchemaType {
        match self.kind {
            SchemaKind::Int(_) => SchemaType::Int,
            SchemaKind::Float(_) => SchemaType::Float,
            SchemaKind::String(_) => SchemaType::String,
            SchemaKind::Boolean(_) => SchemaType::Boolean,
            SchemaKind::Enum { .. } => SchemaType::Enum,
            SchemaKind::Array { .. } => SchemaType::Array,
            SchemaKind::Object { .. } => SchemaType::Object,
        }
    }

    /// Parses a single schema from its JSON definition.
    pub fn from_json_str(text: &str) -> Result<Self, SchemaDefinitionError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses an ordered field list from a JSON array of definitions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paramguard::Schema;
    ///
    /// let fields = Schema::fields_from_json_str(r#"[
    ///     {"name": "id", "type": "int"},
    ///     {"name": "tags", "type": "array", "elementType": {"type": "string"}}
    /// ]"#).unwrap();
    ///
    /// assert_eq!(fields.len(), 2);
    /// ```
    pub fn fields_from_json_str(text: &str) -> Result<Vec<Self>, SchemaDefinitionError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Parses a string value holding a JSON literal, keeping the result only if
/// `accept` holds for it.
pub(crate) fn parse_embedded_json(value: &Value, accept: fn(&Value) -> bool) -> Option<Value> {
    value
        .as_str()
        .and_then(|text| serde_json::from_str::<Value>(text).ok())
        .filter(accept)
}
