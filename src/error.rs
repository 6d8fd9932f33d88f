//! Error types for tfscaffold.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tfscaffold operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A schema entry or the provider key does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The schema document is unparseable or structurally invalid.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(String),

    /// Clipboard export failed or is unavailable.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::NotFound(_) => exit_codes::NOT_FOUND,
            ScaffoldError::MalformedSchema(_) => exit_codes::MALFORMED_SCHEMA,
            ScaffoldError::UserError(_) => exit_codes::USER_ERROR,
            ScaffoldError::Io(_) | ScaffoldError::Clipboard(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for tfscaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
