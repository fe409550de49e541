//! Edit application errors.

use super::error_code::{self, AnvilErrorCode};

/// Errors that can occur while applying edits to a source buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Edits overlap: [{first_start}, {first_end}) and [{second_start}, {second_end})")]
    Overlap {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },

    #[error("Edit range [{start}, {end}) is outside a source of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

impl AnvilErrorCode for EditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Overlap { .. } => error_code::EDIT_CONFLICT,
            Self::OutOfBounds { .. } => error_code::EDIT_OUT_OF_BOUNDS,
        }
    }
}
