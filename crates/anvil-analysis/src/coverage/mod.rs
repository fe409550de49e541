//! Coverage of model facts by template definitions.

pub mod diff;
pub mod synthesizer;

pub use diff::{missing_associations, missing_properties};
pub use synthesizer::{generate, generate_association};
