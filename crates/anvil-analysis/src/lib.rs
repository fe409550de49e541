//! anvil-analysis: factory template coverage and ordering checks.
//!
//! Pipeline, leaves first:
//! - `parsers`: tree-sitter Ruby lowered into a closed node enum
//! - `schema` / `models`: column facts from `db/schema.rb`, association and
//!   enum facts from model sources
//! - `factories`: template location and definition classification
//! - `coverage` / `edits`: missing-field diff, snippet synthesis, patch planning
//! - `ordering`: section partitioning and one-swap-at-a-time reordering
//! - `checks` / `runner`: registered checks and the correction fixpoint loop

pub mod checks;
pub mod coverage;
pub mod edits;
pub mod factories;
pub mod models;
pub mod naming;
pub mod ordering;
pub mod parsers;
pub mod runner;
pub mod schema;

pub use checks::{Check, CheckContext, CheckRegistry, Finding, Severity};
pub use runner::{CorrectionOutcome, Runner};
