//! Error types for breeze.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for breeze operations.
///
/// Every failure is fatal to the current invocation; there is no retry.
/// The user fixes the configuration file and runs again.
#[derive(Error, Debug)]
pub enum BreezeError {
    /// Bad arguments or an unusable environment (e.g. no config file found).
    #[error("{0}")]
    UserError(String),

    /// A config file or preset could not be read from disk.
    #[error("{0}")]
    ReadError(String),

    /// The input is not syntactically valid YAML/JSON.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The input is well-formed but semantically invalid.
    #[error("Schema error: {0}")]
    SchemaError(String),
}

impl BreezeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BreezeError::UserError(_) => exit_codes::USER_ERROR,
            BreezeError::ReadError(_) => exit_codes::USER_ERROR,
            BreezeError::ParseError(_) => exit_codes::PARSE_FAILURE,
            BreezeError::SchemaError(_) => exit_codes::SCHEMA_FAILURE,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, BreezeError::ParseError(_))
    }

    pub fn is_schema_error(&self) -> bool {
        matches!(self, BreezeError::SchemaError(_))
    }
}

/// Result type alias for breeze operations.
pub type Result<T> = std::result::Result<T, BreezeError>;
