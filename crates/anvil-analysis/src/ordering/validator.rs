//! Order validation over classified definitions.
//!
//! Definitions are split into sections at blank-line gaps and at ignored
//! statements. Within a section, keyed definitions must be non-decreasing by
//! `(group rank, name)`. Each call fixes at most one violation per section;
//! the host re-runs until nothing is reported.

use crate::edits::{Edit, Span};
use crate::factories::{Definition, DefinitionKind};

/// A contiguous run of definitions.
#[derive(Debug, Clone)]
pub struct Section<'d, 't> {
    pub definitions: &'d [Definition<'t>],
}

impl<'d, 't> Section<'d, 't> {
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn last(&self) -> Option<&'d Definition<'t>> {
        self.definitions.last()
    }
}

/// An out-of-order pair inside one section.
#[derive(Debug, Clone, Copy)]
pub struct Violation<'d, 't> {
    pub first: &'d Definition<'t>,
    pub second: &'d Definition<'t>,
}

/// Partition `definitions` into sections. Ignored definitions never belong
/// to a section; they only separate their neighbours.
pub fn sections<'d, 't>(definitions: &'d [Definition<'t>]) -> Vec<Section<'d, 't>> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (index, definition) in definitions.iter().enumerate() {
        if definition.kind == DefinitionKind::Ignored {
            if let Some(s) = start.take() {
                out.push(Section {
                    definitions: &definitions[s..index],
                });
            }
            continue;
        }

        match start {
            None => start = Some(index),
            Some(s) => {
                let previous = &definitions[index - 1];
                if definition.first_line() > previous.last_line() + 1 {
                    out.push(Section {
                        definitions: &definitions[s..index],
                    });
                    start = Some(index);
                }
            }
        }
    }
    if let Some(s) = start {
        out.push(Section {
            definitions: &definitions[s..],
        });
    }
    out
}

/// First adjacent keyed pair in descending order. Unnamed definitions are
/// skipped and keep their place.
pub fn first_violation<'d, 't>(section: &Section<'d, 't>) -> Option<Violation<'d, 't>> {
    if section.len() < 2 {
        return None;
    }
    let keyed: Vec<&'d Definition<'t>> = section
        .definitions
        .iter()
        .filter(|d| d.order_key().is_some())
        .collect();

    keyed.windows(2).find_map(|pair| {
        let (first, second) = (pair[0], pair[1]);
        (first.order_key() > second.order_key()).then_some(Violation { first, second })
    })
}

/// Swap the comment-inclusive ranges of the violating pair.
pub fn fix(violation: &Violation<'_, '_>) -> Edit {
    Edit::swap(
        Span::from(violation.first.full_range()),
        Span::from(violation.second.full_range()),
    )
}
