//! Named storage for field lists.
//!
//! This module provides the [`SchemaRegistry`] type, which stores the field
//! list of each route or operation under a name so that request handlers can
//! look them up and validate against them.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SchemaDefinitionError;
use crate::schema::Schema;
use crate::validator::{DataBag, Validate};
use crate::ValidationResult;

/// Type alias for the field list storage map.
type FieldMap = Arc<RwLock<HashMap<String, Arc<[Schema]>>>>;

/// A thread-safe registry of named field lists.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the same storage.
///
/// # Example
///
/// ```rust
/// use paramguard::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register("get_user", vec![Schema::int("id").min(1)]).unwrap();
///
/// let mut bag = json!({"id": "7"}).as_object().cloned().unwrap();
/// let result = registry.validate("get_user", &mut bag).unwrap();
///
/// assert!(result.is_success());
/// assert_eq!(bag["id"], json!(7));
/// ```
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    fields: FieldMap,
}

impl SchemaRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field list under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register(
        &self,
        name: impl Into<String>,
        fields: impl Into<Arc<[Schema]>>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut map = self.fields.write();

        if map.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        map.insert(name, fields.into());
        Ok(())
    }

    /// Parses a JSON array of field definitions and registers it under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidDefinition` if the text does not describe
    /// a field list, or `RegistryError::DuplicateName` if the name is taken.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paramguard::SchemaRegistry;
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register_json("search", r#"[
    ///     {"name": "q", "type": "string", "min_length": 1},
    ///     {"name": "page", "type": "int", "min": 1, "optional": true}
    /// ]"#).unwrap();
    ///
    /// assert_eq!(registry.get("search").unwrap().len(), 2);
    /// ```
    pub fn register_json(&self, name: impl Into<String>, text: &str) -> Result<(), RegistryError> {
        let fields = Schema::fields_from_json_str(text)?;
        self.register(name, fields)
    }

    /// Retrieves a field list by name.
    pub fn get(&self, name: &str) -> Option<Arc<[Schema]>> {
        self.fields.read().get(name).cloned()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a bag against the field list registered under `name`.
    ///
    /// The lock is released before validation starts.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name doesn't exist.
    pub fn validate(
        &self,
        name: &str,
        bag: &mut DataBag,
    ) -> Result<ValidationResult<()>, RegistryError> {
        let fields = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        Ok(fields.validate(bag))
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a field list with a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// The JSON definition could not be parsed.
    #[error(transparent)]
    InvalidDefinition(#[from] SchemaDefinitionError),
}
