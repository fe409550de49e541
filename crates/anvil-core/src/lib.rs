//! anvil-core: shared foundations for the anvil factory checker.
//!
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: TOML-based layered configuration passed into every check
//! - Tracing: `ANVIL_LOG`-driven subscriber setup

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::AnvilConfig;
pub use errors::{AnvilErrorCode, CheckError, CheckResult};
