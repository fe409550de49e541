//! Lowered Ruby syntax tree.
//!
//! Every tree-sitter node maps onto one variant of [`Node`]. Kinds the
//! checks never inspect collapse into [`Node::Other`], which still keeps its
//! children so generic descent reaches nested declarations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Zero-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Source range with both byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start: Position {
                line: start.row as u32,
                column: start.column as u32,
            },
            end: Position {
                line: end.row as u32,
                column: end.column as u32,
            },
        }
    }

    /// Smallest range covering both `self` and `other`.
    pub fn join(&self, other: &Range) -> Range {
        let (start_byte, start) = if self.start_byte <= other.start_byte {
            (self.start_byte, self.start)
        } else {
            (other.start_byte, other.start)
        };
        let (end_byte, end) = if self.end_byte >= other.end_byte {
            (self.end_byte, self.end)
        } else {
            (other.end_byte, other.end)
        };
        Range {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Closed set of lowered node kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Call(CallExpression),
    Block(BlockExpression),
    Literal(LiteralExpression),
    Arguments(ArgumentList),
    Hash(HashExpression),
    Other(OtherNode),
}

/// A method call, with or without receiver, arguments and block.
/// Bare identifiers in statement position lower to argument-less calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub receiver: Option<Box<Node>>,
    pub method: String,
    /// Range of the method name token.
    pub selector: Range,
    pub arguments: Option<ArgumentList>,
    pub block: Option<BlockExpression>,
    /// Range of the call including its block.
    pub range: Range,
}

/// A `do ... end` or `{ ... }` block attached to a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockExpression {
    /// The opening token (`do` or `{`).
    pub open: Range,
    /// The closing token (`end` or `}`).
    pub close: Range,
    /// Block parameters (`|t|`), if any.
    pub params: Option<Range>,
    /// Statements in source order, comments included.
    pub body: Vec<Node>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpression {
    pub value: Literal,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Symbol(String),
    String(String),
    /// Numeric literals keep their source text.
    Integer(String),
    Float(String),
    Boolean(bool),
    Nil,
}

/// Call arguments. Consecutive bare keyword arguments are grouped into a
/// single implicit [`HashExpression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentList {
    pub args: Vec<Node>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashExpression {
    pub pairs: Vec<Pair>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub key: Box<Node>,
    pub value: Box<Node>,
    pub range: Range,
}

/// Catch-all for node kinds without a dedicated variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherNode {
    /// The tree-sitter node kind, e.g. `"constant"`, `"assignment"`, `"comment"`.
    pub kind: String,
    /// Source text for name-like kinds (`constant`, `scope_resolution`).
    pub name: Option<String>,
    pub range: Range,
    pub children: Vec<Node>,
}

impl Node {
    pub fn range(&self) -> Range {
        match self {
            Node::Call(c) => c.range,
            Node::Block(b) => b.range,
            Node::Literal(l) => l.range,
            Node::Arguments(a) => a.range,
            Node::Hash(h) => h.range,
            Node::Other(o) => o.range,
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Call(c) => NodeRef::Call(c),
            Node::Block(b) => NodeRef::Block(b),
            Node::Literal(l) => NodeRef::Literal(l),
            Node::Arguments(a) => NodeRef::Arguments(a),
            Node::Hash(h) => NodeRef::Hash(h),
            Node::Other(o) => NodeRef::Other(o),
        }
    }

    pub fn as_call(&self) -> Option<&CallExpression> {
        match self {
            Node::Call(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(l) => Some(&l.value),
            _ => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Other(o) if o.kind == "comment")
    }

    /// Symbol or string literal content.
    pub fn symbol_or_string(&self) -> Option<&str> {
        match self.as_literal()? {
            Literal::Symbol(s) | Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Constant path text (`FactoryBot`, `Admin::User`).
    pub fn constant_name(&self) -> Option<&str> {
        match self {
            Node::Other(o) if o.kind == "constant" || o.kind == "scope_resolution" => {
                o.name.as_deref()
            }
            _ => None,
        }
    }
}

impl CallExpression {
    /// Positional and keyword arguments in order, empty when there are none.
    pub fn args(&self) -> &[Node] {
        self.arguments.as_ref().map(|a| a.args.as_slice()).unwrap_or(&[])
    }

    pub fn first_argument(&self) -> Option<&Node> {
        self.args().first()
    }

    pub fn has_receiver(&self) -> bool {
        self.receiver.is_some()
    }

    /// Finds a keyword option with a symbol key among the hash arguments.
    pub fn option(&self, key: &str) -> Option<&Pair> {
        self.args()
            .iter()
            .filter_map(|arg| match arg {
                Node::Hash(h) => Some(h),
                _ => None,
            })
            .flat_map(|h| h.pairs.iter())
            .find(|pair| pair.key_symbol() == Some(key))
    }

    /// Statements of the attached block, comments excluded.
    pub fn block_statements(&self) -> impl Iterator<Item = &Node> {
        self.block.iter().flat_map(|b| b.statements())
    }
}

impl BlockExpression {
    /// Statements in source order, comments excluded.
    pub fn statements(&self) -> impl Iterator<Item = &Node> {
        self.body.iter().filter(|n| !n.is_comment())
    }

    /// The opening token, or the block parameters when present.
    pub fn head(&self) -> Range {
        self.params.unwrap_or(self.open)
    }

    /// Insertion point after the opening token, any block parameters, and a
    /// comment sharing their line.
    pub fn body_anchor(&self) -> usize {
        let head = self.head();
        match self.body.first() {
            Some(first) if first.is_comment() && first.range().start.line == head.end.line => {
                first.range().end_byte
            }
            _ => head.end_byte,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.open.start.line == self.close.start.line
    }
}

impl Pair {
    pub fn key_symbol(&self) -> Option<&str> {
        match self.key.as_literal()? {
            Literal::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

/// Borrowed view over any node-like element of the tree, including the
/// argument lists and blocks that calls own inline.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Call(&'a CallExpression),
    Block(&'a BlockExpression),
    Literal(&'a LiteralExpression),
    Arguments(&'a ArgumentList),
    Hash(&'a HashExpression),
    Other(&'a OtherNode),
}

impl<'a> NodeRef<'a> {
    pub fn children(self) -> SmallVec<[NodeRef<'a>; 4]> {
        let mut out = SmallVec::new();
        match self {
            NodeRef::Call(c) => {
                if let Some(receiver) = &c.receiver {
                    out.push(receiver.as_node_ref());
                }
                if let Some(arguments) = &c.arguments {
                    out.push(NodeRef::Arguments(arguments));
                }
                if let Some(block) = &c.block {
                    out.push(NodeRef::Block(block));
                }
            }
            NodeRef::Block(b) => out.extend(b.body.iter().map(Node::as_node_ref)),
            NodeRef::Literal(_) => {}
            NodeRef::Arguments(a) => out.extend(a.args.iter().map(Node::as_node_ref)),
            NodeRef::Hash(h) => {
                for pair in &h.pairs {
                    out.push(pair.key.as_node_ref());
                    out.push(pair.value.as_node_ref());
                }
            }
            NodeRef::Other(o) => out.extend(o.children.iter().map(Node::as_node_ref)),
        }
        out
    }

    pub fn range(self) -> Range {
        match self {
            NodeRef::Call(c) => c.range,
            NodeRef::Block(b) => b.range,
            NodeRef::Literal(l) => l.range,
            NodeRef::Arguments(a) => a.range,
            NodeRef::Hash(h) => h.range,
            NodeRef::Other(o) => o.range,
        }
    }

    pub fn as_call(self) -> Option<&'a CallExpression> {
        match self {
            NodeRef::Call(c) => Some(c),
            _ => None,
        }
    }
}
