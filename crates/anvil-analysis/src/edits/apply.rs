//! Edit application.
//!
//! Replacements are checked for overlap, then applied in reverse offset
//! order so earlier offsets stay valid. Inserts at the same position are
//! composed in list order.

use anvil_core::errors::EditError;

use super::types::{overlap, Edit, Replacement};

/// Lower and apply `edits` to `source`.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    let mut replacements = Vec::new();
    for edit in edits {
        replacements.extend(edit.to_replacements(source)?);
    }
    apply_replacements(source, replacements)
}

/// Apply already-lowered replacements.
pub fn apply_replacements(
    source: &str,
    replacements: Vec<Replacement>,
) -> Result<String, EditError> {
    // Stable sort keeps list order among equal start offsets.
    let mut ordered: Vec<(usize, Replacement)> = replacements.into_iter().enumerate().collect();
    ordered.sort_by_key(|(index, r)| (r.span.start, r.span.end, *index));

    for window in ordered.windows(2) {
        let (a, b) = (&window[0].1, &window[1].1);
        let overlapping = a.span.overlaps(&b.span)
            // A non-empty replacement and an insert at its start are ambiguous.
            || (a.span.start == b.span.start && a.span.len() != b.span.len());
        if overlapping {
            return Err(overlap(a.span, b.span));
        }
    }

    let mut out = source.to_string();
    // Walk backwards so earlier offsets stay valid. Among inserts at the same
    // offset the last one goes in first, which leaves them in list order.
    for (_, replacement) in ordered.iter().rev() {
        out.replace_range(replacement.span.start..replacement.span.end, &replacement.text);
    }
    Ok(out)
}

/// True when `candidate` touches text already claimed by `accepted`:
/// overlapping spans, or edits anchored at the same offset.
pub fn conflicts_with(accepted: &[Replacement], candidate: &[Replacement]) -> bool {
    candidate.iter().any(|c| {
        accepted
            .iter()
            .any(|a| a.span.overlaps(&c.span) || a.span.start == c.span.start)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edits::types::Span;

    #[test]
    fn same_position_inserts_keep_list_order() {
        let edits = vec![Edit::insert(2, "a"), Edit::insert(2, "b"), Edit::insert(2, "c")];
        assert_eq!(apply_edits("xxyy", &edits).unwrap(), "xxabcyy");
    }

    #[test]
    fn replacements_apply_in_reverse_order() {
        let edits = vec![
            Edit::replace(Span::new(0, 3), "one"),
            Edit::replace(Span::new(4, 7), "two"),
        ];
        assert_eq!(apply_edits("abc def", &edits).unwrap(), "one two");
    }

    #[test]
    fn overlapping_replacements_are_rejected() {
        let edits = vec![
            Edit::replace(Span::new(0, 4), "x"),
            Edit::replace(Span::new(2, 6), "y"),
        ];
        let err = apply_edits("abcdefgh", &edits).unwrap_err();
        assert!(matches!(err, EditError::Overlap { .. }));
    }

    #[test]
    fn swap_exchanges_text() {
        let edits = vec![Edit::swap(Span::new(0, 3), Span::new(4, 7))];
        assert_eq!(apply_edits("abc def", &edits).unwrap(), "def abc");
    }

    #[test]
    fn out_of_bounds_edit_is_rejected() {
        let err = apply_edits("abc", &[Edit::insert(9, "x")]).unwrap_err();
        assert!(matches!(err, EditError::OutOfBounds { .. }));
    }

    #[test]
    fn insert_adjacent_to_replacement_end_is_allowed() {
        let edits = vec![
            Edit::replace(Span::new(0, 3), "xyz"),
            Edit::insert(3, "!"),
        ];
        assert_eq!(apply_edits("abc", &edits).unwrap(), "xyz!");
    }

    #[test]
    fn conflicts_detect_shared_anchor() {
        let accepted = vec![Replacement {
            span: Span::at(5),
            text: "a".into(),
        }];
        let same_anchor = vec![Replacement {
            span: Span::at(5),
            text: "b".into(),
        }];
        let elsewhere = vec![Replacement {
            span: Span::new(8, 9),
            text: "c".into(),
        }];
        assert!(conflicts_with(&accepted, &same_anchor));
        assert!(!conflicts_with(&accepted, &elsewhere));
    }
}
