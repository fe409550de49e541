//! Edit types.

use std::fmt;

use anvil_core::errors::EditError;
use serde::{Deserialize, Serialize};

use crate::parsers::Range;

/// Half-open byte span `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn at(position: usize) -> Self {
        Span::new(position, position)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Spans sharing at least one byte. Adjacent spans do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<Range> for Span {
    fn from(range: Range) -> Self {
        Span::new(range.start_byte, range.end_byte)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// An edit proposed by a check. The core never writes files; edits are
/// lowered to [`Replacement`]s and applied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    Insert { at: usize, text: String },
    Replace { span: Span, text: String },
    /// Exchange the text of two non-overlapping spans.
    Swap { first: Span, second: Span },
}

/// A single `(span, text)` replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

impl Edit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Edit::Insert {
            at,
            text: text.into(),
        }
    }

    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Edit::Replace {
            span,
            text: text.into(),
        }
    }

    pub fn swap(first: Span, second: Span) -> Self {
        Edit::Swap { first, second }
    }

    /// Lower to replacements against `source`.
    pub fn to_replacements(&self, source: &str) -> Result<Vec<Replacement>, EditError> {
        match self {
            Edit::Insert { at, text } => {
                let span = Span::at(*at);
                check_bounds(source, span)?;
                Ok(vec![Replacement {
                    span,
                    text: text.clone(),
                }])
            }
            Edit::Replace { span, text } => {
                check_bounds(source, *span)?;
                Ok(vec![Replacement {
                    span: *span,
                    text: text.clone(),
                }])
            }
            Edit::Swap { first, second } => {
                let first_text = slice(source, *first)?;
                let second_text = slice(source, *second)?;
                if first.overlaps(second) {
                    return Err(overlap(*first, *second));
                }
                Ok(vec![
                    Replacement {
                        span: *first,
                        text: second_text.to_string(),
                    },
                    Replacement {
                        span: *second,
                        text: first_text.to_string(),
                    },
                ])
            }
        }
    }
}

pub(crate) fn overlap(first: Span, second: Span) -> EditError {
    EditError::Overlap {
        first_start: first.start,
        first_end: first.end,
        second_start: second.start,
        second_end: second.end,
    }
}

fn check_bounds(source: &str, span: Span) -> Result<(), EditError> {
    slice(source, span).map(|_| ())
}

fn slice(source: &str, span: Span) -> Result<&str, EditError> {
    if span.start > span.end {
        return Err(out_of_bounds(source, span));
    }
    source
        .get(span.start..span.end)
        .ok_or_else(|| out_of_bounds(source, span))
}

fn out_of_bounds(source: &str, span: Span) -> EditError {
    EditError::OutOfBounds {
        start: span.start,
        end: span.end,
        len: source.len(),
    }
}
