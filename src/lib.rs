//! # Paramguard
//!
//! Validates the loosely typed parameter bag of a request (path parameters,
//! query string and body merged into one map) against a declarative schema,
//! coercing values to their declared types in place and collecting ALL
//! validation errors in one pass.
//!
//! ## Overview
//!
//! Request parameters mostly arrive as text. A field declared as `int` accepts
//! `"42"` and is rewritten to `42`; a `boolean` accepts `"true"` or `"1"`; an
//! `array` or `object` accepts a string holding a JSON literal. Every field
//! that fails is reported with its full path (`user.age`, `ids[1]`), its
//! declared type, its raw value and a fixed description.
//!
//! ## Core Types
//!
//! - [`Schema`]: one named field rule, built in code or parsed from JSON
//! - [`Validate`]: validation of a bag against a schema or a field list
//! - [`SchemaError`]: a single failed field
//! - [`SchemaErrors`]: a non-empty collection of failures
//! - [`ParamGuard`]: adapter turning a request into a coerced bag or a `400` response
//!
//! ## Example
//!
//! ```rust
//! use paramguard::{Schema, Validate};
//! use serde_json::json;
//!
//! let fields = vec![
//!     Schema::int("id").min(1),
//!     Schema::array("tags", Schema::string("")),
//!     Schema::object("user", [Schema::int("age")]),
//! ];
//!
//! let mut bag = json!({
//!     "id": "7",
//!     "tags": "[\"a\",\"b\"]",
//!     "user": {"age": "x"}
//! })
//! .as_object()
//! .cloned()
//! .unwrap();
//!
//! let result = fields.validate(&mut bag);
//! assert!(result.is_failure());
//! assert_eq!(bag["id"], json!(7));
//! assert_eq!(bag["tags"], json!(["a", "b"]));
//!
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.first().name, "user.age");
//! ```

pub mod adapter;
pub mod error;
pub mod path;
pub mod registry;
pub mod schema;
pub mod validator;

pub use adapter::{AdapterConfig, FailureResponse, GuardOutcome, ParamGuard, RequestParams};
pub use error::{Description, SchemaDefinitionError, SchemaError, SchemaErrors};
pub use path::{join_path, ErrorPath};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    BooleanOptions, EnumSymbols, NumericBounds, Schema, SchemaKind, SchemaType, StringLength,
};
pub use validator::{validate, validate_batch, DataBag, Validate};

/// Type alias for validation results using SchemaErrors
pub type ValidationResult<T> = stillwater::Validation<T, SchemaErrors>;
