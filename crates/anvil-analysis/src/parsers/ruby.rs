//! Ruby parser: tree-sitter-ruby front end and lowering into [`Node`].

use std::cell::RefCell;
use std::path::Path;

use anvil_core::errors::ParseError;
use tree_sitter::Parser;

use super::error_tolerant::count_errors;
use super::types::{
    ArgumentList, BlockExpression, CallExpression, HashExpression, Literal, LiteralExpression,
    Node, OtherNode, Pair, Range,
};

thread_local! {
    static RUBY_PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Strict Ruby parser. Sources with any ERROR or MISSING node are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct RubyParser;

impl RubyParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `source` and lower it. The returned root is an `Other` node of
    /// kind `"program"`.
    pub fn parse(&self, source: &str, path: &Path) -> Result<Node, ParseError> {
        let tree = RUBY_PARSER.with(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.is_none() {
                let mut parser = Parser::new();
                parser
                    .set_language(&tree_sitter_ruby::LANGUAGE.into())
                    .map_err(|e| ParseError::GrammarUnavailable {
                        message: e.to_string(),
                    })?;
                *slot = Some(parser);
            }
            match slot.as_mut() {
                Some(parser) => parser.parse(source, None).ok_or_else(|| ParseError::NoTree {
                    path: path.to_path_buf(),
                }),
                None => Err(ParseError::NoTree {
                    path: path.to_path_buf(),
                }),
            }
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let (error_count, ranges) = count_errors(root);
            let first = ranges.first().map(|r| r.start).unwrap_or_default();
            tracing::debug!(path = %path.display(), error_count, "rejecting source with syntax errors");
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: first.line + 1,
                column: first.column + 1,
                error_count,
            });
        }

        Ok(lower(root, source.as_bytes()))
    }
}

fn text<'s>(node: &tree_sitter::Node, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or("")
}

fn named_children<'t>(node: &tree_sitter::Node<'t>) -> Vec<tree_sitter::Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn literal(node: &tree_sitter::Node, value: Literal) -> Node {
    Node::Literal(LiteralExpression {
        value,
        range: Range::from_ts_node(node),
    })
}

fn other(node: &tree_sitter::Node, source: &[u8], name: Option<String>) -> Node {
    Node::Other(OtherNode {
        kind: node.kind().to_string(),
        name,
        range: Range::from_ts_node(node),
        children: named_children(node)
            .iter()
            .map(|child| lower(*child, source))
            .collect(),
    })
}

/// Lower one tree-sitter node.
pub(crate) fn lower(node: tree_sitter::Node, source: &[u8]) -> Node {
    match node.kind() {
        "call" => lower_call(&node, source),
        "identifier" => Node::Call(CallExpression {
            receiver: None,
            method: text(&node, source).to_string(),
            selector: Range::from_ts_node(&node),
            arguments: None,
            block: None,
            range: Range::from_ts_node(&node),
        }),
        "argument_list" => Node::Arguments(lower_arguments(&node, source)),
        "do_block" | "block" => Node::Block(lower_block(&node, source)),
        "hash" => Node::Hash(HashExpression {
            pairs: named_children(&node)
                .iter()
                .filter(|c| c.kind() == "pair")
                .filter_map(|c| lower_pair(c, source))
                .collect(),
            range: Range::from_ts_node(&node),
        }),
        "simple_symbol" => {
            let raw = text(&node, source);
            literal(&node, Literal::Symbol(raw.trim_start_matches(':').to_string()))
        }
        "hash_key_symbol" => literal(&node, Literal::Symbol(text(&node, source).to_string())),
        "delimited_symbol" => match string_content(&node, source) {
            Some(content) => literal(&node, Literal::Symbol(content)),
            None => other(&node, source, None),
        },
        "string" => match string_content(&node, source) {
            Some(content) => literal(&node, Literal::String(content)),
            None => other(&node, source, None),
        },
        "integer" => literal(&node, Literal::Integer(text(&node, source).to_string())),
        "float" => literal(&node, Literal::Float(text(&node, source).to_string())),
        "true" => literal(&node, Literal::Boolean(true)),
        "false" => literal(&node, Literal::Boolean(false)),
        "nil" => literal(&node, Literal::Nil),
        "constant" | "scope_resolution" => {
            other(&node, source, Some(text(&node, source).to_string()))
        }
        _ => other(&node, source, None),
    }
}

fn lower_call(node: &tree_sitter::Node, source: &[u8]) -> Node {
    let Some(method) = node.child_by_field_name("method") else {
        return other(node, source, None);
    };
    let receiver = node
        .child_by_field_name("receiver")
        .map(|r| Box::new(lower(r, source)));
    let arguments = node
        .child_by_field_name("arguments")
        .filter(|a| a.kind() == "argument_list")
        .map(|a| lower_arguments(&a, source));
    let block = node
        .child_by_field_name("block")
        .filter(|b| matches!(b.kind(), "do_block" | "block"))
        .map(|b| lower_block(&b, source));

    Node::Call(CallExpression {
        receiver,
        method: text(&method, source).to_string(),
        selector: Range::from_ts_node(&method),
        arguments,
        block,
        range: Range::from_ts_node(node),
    })
}

fn lower_arguments(node: &tree_sitter::Node, source: &[u8]) -> ArgumentList {
    let mut args = Vec::new();
    let mut pending: Vec<Pair> = Vec::new();

    for child in named_children(node) {
        if child.kind() == "comment" {
            continue;
        }
        if child.kind() == "pair" {
            if let Some(pair) = lower_pair(&child, source) {
                pending.push(pair);
            }
            continue;
        }
        flush_pairs(&mut pending, &mut args);
        args.push(lower(child, source));
    }
    flush_pairs(&mut pending, &mut args);

    ArgumentList {
        args,
        range: Range::from_ts_node(node),
    }
}

/// Bare keyword arguments become one implicit hash spanning the run.
fn flush_pairs(pending: &mut Vec<Pair>, args: &mut Vec<Node>) {
    let (Some(first), Some(last)) = (pending.first(), pending.last()) else {
        return;
    };
    let range = first.range.join(&last.range);
    args.push(Node::Hash(HashExpression {
        pairs: std::mem::take(pending),
        range,
    }));
}

fn lower_pair(node: &tree_sitter::Node, source: &[u8]) -> Option<Pair> {
    let key = node.child_by_field_name("key")?;
    let value = node.child_by_field_name("value")?;
    Some(Pair {
        key: Box::new(lower(key, source)),
        value: Box::new(lower(value, source)),
        range: Range::from_ts_node(node),
    })
}

fn lower_block(node: &tree_sitter::Node, source: &[u8]) -> BlockExpression {
    let range = Range::from_ts_node(node);

    let mut cursor = node.walk();
    let all: Vec<_> = node.children(&mut cursor).collect();
    let open = all
        .first()
        .map(|n| Range::from_ts_node(n))
        .unwrap_or(range);
    let close = all.last().map(|n| Range::from_ts_node(n)).unwrap_or(range);

    let mut params = None;
    let mut body = Vec::new();
    for child in named_children(node) {
        match child.kind() {
            "block_parameters" => params = Some(Range::from_ts_node(&child)),
            "body_statement" | "block_body" => {
                body.extend(named_children(&child).into_iter().map(|s| lower(s, source)));
            }
            _ => body.push(lower(child, source)),
        }
    }

    BlockExpression {
        open,
        close,
        params,
        body,
        range,
    }
}

/// Plain content of a string or delimited symbol; `None` when interpolated.
fn string_content(node: &tree_sitter::Node, source: &[u8]) -> Option<String> {
    let mut content = String::new();
    for child in named_children(node) {
        match child.kind() {
            "string_content" | "escape_sequence" => content.push_str(text(&child, source)),
            _ => return None,
        }
    }
    Some(content)
}
