//! Template locator.

use smallvec::SmallVec;

use crate::parsers::{walk, CallExpression, Node, NodeRef, Pair};

/// A `factory` call nested in a `FactoryBot.define` block.
#[derive(Debug, Clone, Copy)]
pub struct FactoryTemplate<'t> {
    pub call: &'t CallExpression,
}

impl<'t> FactoryTemplate<'t> {
    /// The factory name when it is a symbol or string literal.
    pub fn name(&self) -> Option<&'t str> {
        self.call.first_argument()?.symbol_or_string()
    }

    /// The `class:` option pair, whatever its value.
    pub fn class_option(&self) -> Option<&'t Pair> {
        self.call.option("class")
    }

    /// The model class name when `class:` is a string or symbol literal.
    pub fn class_name(&self) -> Option<&'t str> {
        self.class_option()?.value.symbol_or_string()
    }
}

/// All templates in source order, nested factories included.
pub fn locate_templates(root: &Node) -> Vec<FactoryTemplate<'_>> {
    let mut templates = Vec::new();
    walk(root, |visit| {
        let NodeRef::Call(call) = visit.node else {
            return;
        };
        if !is_factory_call(call) {
            return;
        }
        let ancestors: SmallVec<[NodeRef<'_>; 16]> = visit.ancestors().collect();
        if inside_factory_bot_define(&ancestors) {
            templates.push(FactoryTemplate { call });
        }
    });
    templates
}

/// `FactoryBot.define` calls in source order.
pub fn locate_defines(root: &Node) -> Vec<&CallExpression> {
    let mut defines = Vec::new();
    walk(root, |visit| {
        if let NodeRef::Call(call) = visit.node {
            if is_factory_bot_define(call) {
                defines.push(call);
            }
        }
    });
    defines
}

/// Factories of `define` that are not nested in another factory.
pub fn top_level_factories(define: &CallExpression) -> Vec<FactoryTemplate<'_>> {
    let mut factories = Vec::new();
    if let Some(block) = &define.block {
        collect_top_level(NodeRef::Block(block), &mut factories);
    }
    factories
}

fn collect_top_level<'t>(node: NodeRef<'t>, out: &mut Vec<FactoryTemplate<'t>>) {
    for child in node.children() {
        match child {
            NodeRef::Call(call) if is_factory_call(call) => out.push(FactoryTemplate { call }),
            NodeRef::Call(call) if is_factory_bot_define(call) => {}
            _ => collect_top_level(child, out),
        }
    }
}

fn is_factory_call(call: &CallExpression) -> bool {
    !call.has_receiver() && call.method == "factory"
}

/// True when some ancestor is the block of a `FactoryBot.define` call.
fn inside_factory_bot_define(ancestors: &[NodeRef<'_>]) -> bool {
    ancestors.windows(2).any(|pair| match (pair[0], pair[1]) {
        (NodeRef::Block(block), NodeRef::Call(call)) => {
            is_factory_bot_define(call)
                && call
                    .block
                    .as_ref()
                    .is_some_and(|b| std::ptr::eq(b, block))
        }
        _ => false,
    })
}

pub fn is_factory_bot_define(call: &CallExpression) -> bool {
    call.method == "define"
        && call
            .receiver
            .as_deref()
            .and_then(Node::constant_name)
            .is_some_and(|name| name.trim_start_matches("::") == "FactoryBot")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parsers::RubyParser;

    fn parse(source: &str) -> Node {
        RubyParser::new().parse(source, Path::new("factories.rb")).unwrap()
    }

    #[test]
    fn finds_factories_inside_define_only() {
        let root = parse(
            "factory :stray\n\
             FactoryBot.define do\n  factory :user, class: 'User' do\n    factory :admin, class: :Admin\n  end\nend\n",
        );
        let templates = locate_templates(&root);
        let names: Vec<_> = templates.iter().filter_map(|t| t.name()).collect();
        assert_eq!(names, vec!["user", "admin"]);
        assert_eq!(templates[0].class_name(), Some("User"));
        assert_eq!(templates[1].class_name(), Some("Admin"));
    }

    #[test]
    fn top_level_factories_skip_nested_ones() {
        let root = parse(
            "FactoryBot.define do\n  factory :user do\n    factory :admin\n  end\n  factory :post\nend\n\
             FactoryBot.define do\n  factory :comment\nend\n",
        );
        let defines = locate_defines(&root);
        assert_eq!(defines.len(), 2);
        let names: Vec<_> = top_level_factories(defines[0])
            .iter()
            .filter_map(|t| t.name())
            .collect();
        assert_eq!(names, vec!["user", "post"]);
    }

    #[test]
    fn ignores_define_on_other_receivers() {
        let root = parse("Other.define do\n  factory :user, class: 'User'\nend\n");
        assert!(locate_templates(&root).is_empty());
    }

    #[test]
    fn non_literal_class_has_no_name() {
        let root = parse("FactoryBot.define do\n  factory :user, class: User\nend\n");
        let templates = locate_templates(&root);
        assert_eq!(templates.len(), 1);
        assert!(templates[0].class_option().is_some());
        assert_eq!(templates[0].class_name(), None);
    }
}
