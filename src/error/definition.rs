//! Errors raised while building or parsing schema definitions.

/// A schema definition that cannot be used for validation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaDefinitionError {
    /// An enum schema was given no symbols.
    #[error("enum symbols must not be empty")]
    EmptySymbols,

    /// An enum schema mixed strings and numbers, or used another kind of value.
    #[error("enum symbols must be all strings or all numbers, found {0}")]
    InvalidSymbol(String),

    /// The definition text is not valid JSON or does not describe a schema.
    #[error("invalid schema definition: {0}")]
    Parse(#[from] serde_json::Error),
}
