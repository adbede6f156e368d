//! Error types for permission parsing

use thiserror::Error;

/// Errors produced while parsing actions from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The value is not one of create, read, update or delete
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
