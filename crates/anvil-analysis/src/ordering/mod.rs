//! Definition ordering: sections, violations, and one-swap fixes.

pub mod validator;

pub use validator::{first_violation, fix, sections, Section, Violation};
