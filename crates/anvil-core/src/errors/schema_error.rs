//! Schema loading errors.

use super::error_code::{self, AnvilErrorCode};
use super::ParseError;

/// Errors that can occur while loading the schema artifact.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Failed to read schema {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse schema: {0}")]
    Parse(#[from] ParseError),
}

impl AnvilErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => error_code::IO_ERROR,
            Self::Parse(e) => e.error_code(),
        }
    }
}
