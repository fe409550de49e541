//! Insertion planning for missing template fields.

use crate::parsers::CallExpression;

use super::types::{Edit, Span};

/// Plan the edits that add `snippets` (already sorted) to the template
/// `call`. Existing content is kept.
///
/// - No block: the call is rewritten to `<call> do\n<indent>end`; fields
///   follow on the next pass once the block exists.
/// - Single-line block: the interior is rebuilt with the fields, then the
///   existing body, each on its own line, and the closing token on the last.
/// - Otherwise the fields go right after the block opening. A statement
///   sharing the opening line is moved below them.
pub fn plan(
    call: &CallExpression,
    snippets: &[String],
    source: &str,
    indent_width: usize,
) -> Vec<Edit> {
    if snippets.is_empty() {
        return Vec::new();
    }

    let indent = " ".repeat(call.range.start.column as usize);
    let inner_indent = " ".repeat(call.range.start.column as usize + indent_width);

    let Some(block) = &call.block else {
        let original = source
            .get(call.range.start_byte..call.range.end_byte)
            .unwrap_or_default();
        return vec![Edit::replace(
            Span::from(call.range),
            format!("{original} do\n{indent}end"),
        )];
    };

    let anchor = block.body_anchor();
    let fields: String = snippets
        .iter()
        .map(|snippet| format!("\n{inner_indent}{snippet}"))
        .collect();

    if block.is_single_line() {
        let mut interior = fields;
        let statements: Vec<_> = block.statements().collect();
        if let (Some(first), Some(last)) = (statements.first(), statements.last()) {
            let body = source
                .get(first.range().start_byte..last.range().end_byte)
                .unwrap_or_default();
            interior.push_str(&format!("\n{inner_indent}{body}"));
        }
        interior.push_str(&format!("\n{indent}"));
        return vec![Edit::replace(
            Span::new(anchor, block.close.start_byte),
            interior,
        )];
    }

    match block.statements().next() {
        Some(first) if first.range().start.line == block.head().end.line => vec![Edit::replace(
            Span::new(anchor, first.range().start_byte),
            format!("{fields}\n{inner_indent}"),
        )],
        _ => vec![Edit::insert(anchor, fields)],
    }
}
