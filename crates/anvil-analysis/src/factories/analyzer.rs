//! Classification of template block statements into definitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::parsers::{BlockExpression, CallExpression, Node, Range};

/// FactoryBot DSL helpers that never count as field definitions.
pub const HELPER_METHODS: &[&str] = &["trait", "transient", "before", "after"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Association,
    Sequence,
    Property,
    /// A non-call statement. Has no key and splits ordering sections.
    Ignored,
}

impl DefinitionKind {
    pub fn group_rank(self) -> Option<u8> {
        match self {
            Self::Association | Self::Sequence => Some(0),
            Self::Property => Some(1),
            Self::Ignored => None,
        }
    }
}

/// One top-level statement of a template block.
#[derive(Debug, Clone)]
pub struct Definition<'t> {
    pub kind: DefinitionKind,
    /// Resolved only from literals; `None` keeps the definition out of ordering.
    pub name: Option<String>,
    pub range: Range,
    /// Comment lines directly above the statement.
    pub comments: SmallVec<[Range; 2]>,
    /// Comment following the statement on its last line.
    pub trailing: Option<Range>,
    pub node: &'t Node,
}

impl<'t> Definition<'t> {
    /// `(group rank, name)`, or `None` for ignored and unnamed definitions.
    pub fn order_key(&self) -> Option<(u8, &str)> {
        Some((self.kind.group_rank()?, self.name.as_deref()?))
    }

    /// Range from the first leading comment to the end of the statement,
    /// or of its trailing comment.
    pub fn full_range(&self) -> Range {
        let start = self.comments.first().copied().unwrap_or(self.range);
        let end = self.trailing.unwrap_or(self.range);
        start.join(&end)
    }

    pub fn first_line(&self) -> u32 {
        self.full_range().start.line
    }

    pub fn last_line(&self) -> u32 {
        self.range.end.line
    }

    pub fn is_named(&self, kind: DefinitionKind, name: &str) -> bool {
        self.kind == kind && self.name.as_deref() == Some(name)
    }
}

/// Classify the direct statements of a template block.
pub fn classify(block: &BlockExpression) -> Vec<Definition<'_>> {
    let statements: Vec<&Node> = block.statements().collect();
    match statements.as_slice() {
        [] => Vec::new(),
        &[only] => match only.as_call() {
            Some(call) if !is_helper(call) => vec![classify_call(only, call, SmallVec::new())],
            _ => Vec::new(),
        },
        _ => classify_many(block),
    }
}

fn classify_many(block: &BlockExpression) -> Vec<Definition<'_>> {
    let mut definitions: Vec<Definition<'_>> = Vec::new();
    let mut pending: SmallVec<[Range; 2]> = SmallVec::new();
    // Comments on the opening line belong to the block, not to a statement.
    let mut previous_end_line = Some(block.head().end.line);
    let mut previous_defined = false;

    for node in &block.body {
        let range = node.range();

        if node.is_comment() {
            if previous_end_line == Some(range.start.line) {
                if previous_defined {
                    if let Some(last) = definitions.last_mut() {
                        last.trailing = Some(range);
                    }
                }
                continue;
            }
            if let Some(last) = pending.last() {
                if range.start.line > last.end.line + 1 {
                    pending.clear();
                }
            }
            pending.push(range);
            continue;
        }

        let attached = pending
            .last()
            .is_some_and(|last| last.end.line + 1 == range.start.line);
        let comments = if attached {
            std::mem::take(&mut pending)
        } else {
            SmallVec::new()
        };
        pending.clear();
        previous_end_line = Some(range.end.line);
        previous_defined = true;

        match node.as_call() {
            Some(call) if is_helper(call) => previous_defined = false,
            Some(call) => definitions.push(classify_call(node, call, comments)),
            None => definitions.push(Definition {
                kind: DefinitionKind::Ignored,
                name: None,
                range,
                comments,
                trailing: None,
                node,
            }),
        }
    }

    definitions
}

fn is_helper(call: &CallExpression) -> bool {
    !call.has_receiver() && HELPER_METHODS.contains(&call.method.as_str())
}

fn classify_call<'t>(
    node: &'t Node,
    call: &'t CallExpression,
    comments: SmallVec<[Range; 2]>,
) -> Definition<'t> {
    let (kind, name) = match call.method.as_str() {
        "association" => (DefinitionKind::Association, literal_name(call)),
        "sequence" => (DefinitionKind::Sequence, literal_name(call)),
        method if has_inline_association(call) => {
            (DefinitionKind::Association, Some(method.to_string()))
        }
        method => (DefinitionKind::Property, Some(method.to_string())),
    };
    Definition {
        kind,
        name,
        range: call.range,
        comments,
        trailing: None,
        node,
    }
}

fn literal_name(call: &CallExpression) -> Option<String> {
    call.first_argument()?
        .symbol_or_string()
        .map(str::to_string)
}

/// `profile { association :profile }`, or a multi-statement block whose last
/// statement is an `association` call.
fn has_inline_association(call: &CallExpression) -> bool {
    call.block_statements()
        .last()
        .and_then(Node::as_call)
        .is_some_and(|last| !last.has_receiver() && last.method == "association")
}
