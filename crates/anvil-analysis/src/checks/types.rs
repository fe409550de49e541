//! Core types for checks.

use std::fmt;
use std::path::Path;

use anvil_core::AnvilConfig;
use serde::{Deserialize, Serialize};

use crate::edits::Edit;
use crate::models::ModelRepository;
use crate::parsers::{Node, Range};
use crate::schema::SchemaCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// One reported problem with the edits that correct it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub check: String,
    pub message: String,
    pub range: Range,
    pub severity: Severity,
    /// Applied together or not at all. Empty when no correction is possible.
    pub edits: Vec<Edit>,
}

impl Finding {
    pub fn is_correctable(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Everything a check may read. Built fresh for every pass.
pub struct CheckContext<'a> {
    pub config: &'a AnvilConfig,
    pub schema: &'a SchemaCatalog,
    pub models: &'a ModelRepository,
    pub path: &'a Path,
    pub source: &'a str,
    pub root: &'a Node,
}

/// Trait that every check implements.
pub trait Check: Send + Sync {
    /// Stable id used in configuration (`[checks] disabled = [...]`).
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding>;
}
