//! Recursive validation of data bags.
//!
//! The [`Validate`] trait is implemented for a single [`Schema`] and for an
//! ordered field list. A field list never short-circuits: every field is
//! checked so that one call reports every problem in the bag.
//!
//! Fields that pass are overwritten in the bag with their coerced value;
//! fields that fail keep their raw value and add one [`SchemaError`].

use rayon::prelude::*;
use serde_json::{Map, Value};
use stillwater::Validation;
use tracing::{debug, trace};

use crate::error::{Description, SchemaError, SchemaErrors};
use crate::path::ErrorPath;
use crate::schema::{
    check_array, check_boolean, check_enum, check_float, check_int, check_object, check_string,
    Schema, SchemaKind,
};
use crate::ValidationResult;

/// A data bag: field names mapped to raw values.
pub type DataBag = Map<String, Value>;

/// Validation of a data bag against one schema or a list of schemas.
///
/// # Example
///
/// ```rust
/// use paramguard::{Schema, Validate};
/// use serde_json::json;
///
/// let fields = vec![Schema::int("n"), Schema::boolean("flag")];
/// let mut bag = json!({"n": "5", "flag": "1"}).as_object().cloned().unwrap();
///
/// let result = fields.validate(&mut bag);
/// assert!(result.is_success());
/// assert_eq!(bag["n"], json!(5));
/// assert_eq!(bag["flag"], json!(true));
/// ```
pub trait Validate {
    /// Validates `bag` under `path`, appending failures to `errors`.
    ///
    /// Returns true if every field passed.
    fn validate_into(
        &self,
        bag: &mut DataBag,
        errors: &mut Vec<SchemaError>,
        path: &ErrorPath,
    ) -> bool;

    /// Validates a top-level bag, collecting every error.
    fn validate(&self, bag: &mut DataBag) -> ValidationResult<()> {
        let mut errors = Vec::new();
        let valid = self.validate_into(bag, &mut errors, &ErrorPath::root());
        debug!(valid, error_count = errors.len(), "validated data bag");

        match SchemaErrors::from_vec(errors) {
            None => Validation::Success(()),
            Some(errors) => Validation::Failure(errors),
        }
    }
}

impl Validate for Schema {
    fn validate_into(
        &self,
        bag: &mut DataBag,
        errors: &mut Vec<SchemaError>,
        path: &ErrorPath,
    ) -> bool {
        check_slot(self, &self.name, bag.get_mut(&self.name), errors, path)
    }
}

impl Validate for [Schema] {
    fn validate_into(
        &self,
        bag: &mut DataBag,
        errors: &mut Vec<SchemaError>,
        path: &ErrorPath,
    ) -> bool {
        let mut valid = true;
        for schema in self {
            valid &= schema.validate_into(bag, errors, path);
        }
        valid
    }
}

impl Validate for Vec<Schema> {
    fn validate_into(
        &self,
        bag: &mut DataBag,
        errors: &mut Vec<SchemaError>,
        path: &ErrorPath,
    ) -> bool {
        self.as_slice().validate_into(bag, errors, path)
    }
}

/// Validates a top-level bag against an ordered field list.
pub fn validate(fields: &[Schema], bag: &mut DataBag) -> ValidationResult<()> {
    fields.validate(bag)
}

/// Validates many independent bags against the same field list in parallel.
///
/// Each bag is coerced in place and gets its own result, in input order.
pub fn validate_batch(fields: &[Schema], bags: &mut [DataBag]) -> Vec<ValidationResult<()>> {
    bags.par_iter_mut().map(|bag| fields.validate(bag)).collect()
}

/// The field currently being checked: its schema and full error path.
pub(crate) struct FieldContext<'a> {
    schema: &'a Schema,
    path: ErrorPath,
}

impl FieldContext<'_> {
    pub(crate) fn path(&self) -> &ErrorPath {
        &self.path
    }

    /// Records a failure of this field and returns false.
    pub(crate) fn fail(
        &self,
        errors: &mut Vec<SchemaError>,
        value: Value,
        description: Description,
    ) -> bool {
        trace!(field = %self.path, reason = %description, "field failed validation");
        errors.push(SchemaError::new(
            self.path.as_str(),
            self.schema.schema_type(),
            value,
            description,
        ));
        false
    }
}

/// Checks the value stored under `name` in the structure at `parent`.
///
/// `slot` is `None` when the key is absent. Absent and null values are
/// missing: fine for optional fields, "not found" for required ones.
pub(crate) fn check_slot(
    schema: &Schema,
    name: &str,
    slot: Option<&mut Value>,
    errors: &mut Vec<SchemaError>,
    parent: &ErrorPath,
) -> bool {
    let field = FieldContext {
        schema,
        path: parent.push(name),
    };

    let slot = match slot {
        Some(value) if !value.is_null() => value,
        _ if schema.optional => return true,
        _ => return field.fail(errors, Value::Null, Description::NotFound),
    };

    match &schema.kind {
        SchemaKind::Int(bounds) => check_int(&field, bounds, slot, errors),
        SchemaKind::Float(bounds) => check_float(&field, bounds, slot, errors),
        SchemaKind::String(constraints) => check_string(&field, constraints, slot, errors),
        SchemaKind::Boolean(options) => check_boolean(&field, options, slot, errors),
        SchemaKind::Enum { symbols } => check_enum(&field, symbols, slot, errors),
        SchemaKind::Array { element_type } => check_array(&field, element_type, slot, errors),
        SchemaKind::Object { fields } => check_object(&field, fields, slot, errors),
    }
}
