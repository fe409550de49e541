//! Ruby parsing: tree-sitter front end, lowered node tree, ancestor-aware traversal.

pub mod error_tolerant;
pub mod ruby;
pub mod types;
pub mod visit;

pub use ruby::RubyParser;
pub use types::{
    ArgumentList, BlockExpression, CallExpression, HashExpression, Literal, LiteralExpression,
    Node, NodeRef, OtherNode, Pair, Position, Range,
};
pub use visit::{walk, Visit};
