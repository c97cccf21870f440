//! Error types for field schemas.

use thiserror::Error;

/// Schema definition errors.
///
/// These surface when a widget registers its fields, never during a
/// request cycle: sanitizing and rendering degrade silently instead.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field was defined without an id.
    #[error("field has an empty id")]
    EmptyFieldId,

    /// Two fields in one widget share an id.
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(String),

    /// A choice-based field has no choices.
    #[error("field {0} requires at least one choice")]
    MissingChoices(String),

    /// The default value's shape does not match the field kind.
    #[error("field {field}: default value does not match kind {kind}")]
    DefaultMismatch { field: String, kind: String },
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
