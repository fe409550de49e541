//! Association and enum extraction from model sources.

use std::path::Path;

use anvil_core::errors::ParseError;
use rustc_hash::FxHashMap;

use crate::parsers::{CallExpression, Literal, Node, NodeRef, RubyParser};

use super::types::{AssociationFact, AssociationKind, EnumFact, ModelFacts, OptionValue};

/// Association options recorded when their value is a literal.
const ASSOCIATION_OPTION_KEYS: &[&str] = &["dependent", "foreign_key", "class_name", "optional"];

const SOURCE_PATH: &str = "<source>";

#[derive(Debug, Default, Clone, Copy)]
pub struct ModelFactExtractor {
    parser: RubyParser,
}

impl ModelFactExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extract_associations(&self, source: &str) -> Result<Vec<AssociationFact>, ParseError> {
        let root = self.parser.parse(source, Path::new(SOURCE_PATH))?;
        Ok(associations_in(&root))
    }

    pub fn extract_enums(&self, source: &str) -> Result<Vec<EnumFact>, ParseError> {
        let root = self.parser.parse(source, Path::new(SOURCE_PATH))?;
        Ok(enums_in(&root))
    }

    /// Parse once and extract both fact kinds.
    pub fn extract(&self, source: &str, path: &Path) -> Result<ModelFacts, ParseError> {
        let root = self.parser.parse(source, path)?;
        Ok(ModelFacts {
            associations: associations_in(&root),
            enums: enums_in(&root),
        })
    }
}

/// Association declarations at any depth, in source order.
pub fn associations_in(root: &Node) -> Vec<AssociationFact> {
    let mut out = Vec::new();
    collect_associations(root.as_node_ref(), &mut out);
    out
}

fn collect_associations(node: NodeRef<'_>, out: &mut Vec<AssociationFact>) {
    if let NodeRef::Call(call) = node {
        if let Some(kind) = association_kind(call) {
            if let Some(fact) = association_fact(kind, call) {
                out.push(fact);
            }
            return;
        }
    }
    for child in node.children() {
        collect_associations(child, out);
    }
}

fn association_kind(call: &CallExpression) -> Option<AssociationKind> {
    if call.has_receiver() {
        return None;
    }
    AssociationKind::from_method(&call.method)
}

fn association_fact(kind: AssociationKind, call: &CallExpression) -> Option<AssociationFact> {
    let name = call.first_argument()?.symbol_or_string()?.to_string();

    let mut options = FxHashMap::default();
    for key in ASSOCIATION_OPTION_KEYS {
        let Some(pair) = call.option(key) else {
            continue;
        };
        let value = match pair.value.as_literal() {
            Some(Literal::Symbol(s)) => OptionValue::Symbol(s.clone()),
            Some(Literal::String(s)) => OptionValue::String(s.clone()),
            Some(Literal::Boolean(b)) => OptionValue::Boolean(*b),
            _ => continue,
        };
        options.insert((*key).to_string(), value);
    }

    Some(AssociationFact {
        kind,
        name,
        options,
    })
}

/// Enum field names at any depth, sorted and deduplicated.
pub fn enums_in(root: &Node) -> Vec<EnumFact> {
    let mut names = Vec::new();
    collect_enums(root.as_node_ref(), &mut names);
    names.sort();
    names.dedup();
    names.into_iter().map(|name| EnumFact { name }).collect()
}

fn collect_enums(node: NodeRef<'_>, out: &mut Vec<String>) {
    if let NodeRef::Call(call) = node {
        if !call.has_receiver() && call.method == "enum" {
            enum_names(call, out);
            return;
        }
    }
    for child in node.children() {
        collect_enums(child, out);
    }
}

fn enum_names(call: &CallExpression, out: &mut Vec<String>) {
    let args = call.args();
    match args.first() {
        // enum :role, { admin: 0, member: 1 }
        Some(Node::Literal(lit)) => {
            let Literal::Symbol(name) = &lit.value else {
                return;
            };
            if args.get(1).is_some_and(is_enum_mapping) {
                out.push(name.clone());
            }
        }
        // enum role: { admin: 0, member: 1 }, _prefix: true
        Some(Node::Hash(hash)) => {
            let Some(first) = hash.pairs.first() else {
                return;
            };
            if let Some(name) = first.key_symbol() {
                if is_enum_mapping(&first.value) {
                    out.push(name.to_string());
                }
            }
        }
        _ => {}
    }
}

fn is_enum_mapping(value: &Node) -> bool {
    match value {
        Node::Hash(_) => true,
        Node::Other(o) => o.kind == "array",
        _ => false,
    }
}
