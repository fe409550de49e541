//! AnvilErrorCode trait for reporting boundaries.

/// Trait for mapping anvil errors to stable error codes.
/// Every error enum implements this so reporters can key on a code
/// instead of parsing messages.
pub trait AnvilErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const PARSER_UNAVAILABLE: &str = "PARSER_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const EDIT_CONFLICT: &str = "EDIT_CONFLICT";
pub const EDIT_OUT_OF_BOUNDS: &str = "EDIT_OUT_OF_BOUNDS";
pub const IO_ERROR: &str = "IO_ERROR";
pub const NOT_CONVERGED: &str = "NOT_CONVERGED";
