//! Text edits: planning, lowering to replacements, and application.

pub mod apply;
pub mod planner;
pub mod types;

pub use apply::{apply_edits, apply_replacements, conflicts_with};
pub use planner::plan;
pub use types::{Edit, Replacement, Span};
