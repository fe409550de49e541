//! Error handling for anvil.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod check_error;
pub mod config_error;
pub mod edit_error;
pub mod error_code;
pub mod parse_error;
pub mod schema_error;

pub use check_error::{CheckError, CheckResult};
pub use config_error::ConfigError;
pub use edit_error::EditError;
pub use error_code::AnvilErrorCode;
pub use parse_error::ParseError;
pub use schema_error::SchemaError;
