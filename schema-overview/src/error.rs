//! Error types for schema loading
//!
//! The schema model is validated once at the boundary, when a document
//! produced by an introspection collaborator is loaded. Everything past
//! that point works on well-formed values and does not fail.

use schema_rbac::ParseActionError;
use thiserror::Error;

/// Schema loading error types.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema violates a structural invariant
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The schema document could not be decoded
    #[error("Malformed schema document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

impl SchemaError {
    /// Check if this error is an input error. Every schema error is one.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SchemaError::InvalidInput(_) | SchemaError::Malformed(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        "INVALID_INPUT"
    }
}

impl From<ParseActionError> for SchemaError {
    fn from(err: ParseActionError) -> Self {
        SchemaError::InvalidInput(err.to_string())
    }
}
