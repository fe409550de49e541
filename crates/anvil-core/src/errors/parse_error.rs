//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, AnvilErrorCode};

/// Errors that can occur while parsing Ruby source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Ruby grammar could not be loaded: {message}")]
    GrammarUnavailable { message: String },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("Syntax error in {path} at line {line}, column {column} ({error_count} error node(s))")]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
        error_count: u32,
    },
}

impl AnvilErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarUnavailable { .. } => error_code::PARSER_UNAVAILABLE,
            _ => error_code::PARSE_ERROR,
        }
    }
}
