//! Check-run errors and non-fatal error collection.

use super::error_code::{self, AnvilErrorCode};
use super::{ConfigError, EditError, ParseError, SchemaError};

/// Errors that can occur while running checks over a file.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Corrections did not converge after {passes} passes")]
    NotConverged { passes: usize },
}

impl AnvilErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Edit(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
            Self::NotConverged { .. } => error_code::NOT_CONVERGED,
        }
    }
}

/// Result of a check run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some inputs fail.
#[derive(Debug, Default)]
pub struct CheckResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<CheckError>,
}

impl<T: Default> CheckResult<T> {
    /// Create a new result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: CheckError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
