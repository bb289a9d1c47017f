//! Error types for validation failures and malformed schema definitions.
//!
//! Validation failures are plain data ([`SchemaError`]) collected into a
//! [`SchemaErrors`] list. Only problems with the schema definitions themselves
//! surface as [`SchemaDefinitionError`] through `Result`.

mod definition;
mod schema_error;

pub use definition::SchemaDefinitionError;
pub use schema_error::{Description, SchemaError, SchemaErrors};
