//! `inline_association`: associations are declared as `name { association :name }`.

use crate::edits::Edit;
use crate::factories::locate_templates;
use crate::parsers::{CallExpression, Literal};

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str =
    "Use inline association definition instead of separate `association` method call.";

pub struct InlineAssociation;

impl Check for InlineAssociation {
    fn id(&self) -> &'static str {
        "inline_association"
    }

    fn description(&self) -> &'static str {
        "Bare `association` calls are rewritten to the inline form"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for template in locate_templates(ctx.root) {
            for statement in template.call.block_statements() {
                let Some(call) = statement.as_call() else {
                    continue;
                };
                let Some(name) = bare_association_name(call) else {
                    continue;
                };
                findings.push(Finding {
                    check: self.id().to_string(),
                    message: MESSAGE.to_string(),
                    range: call.selector,
                    severity: self.severity(),
                    edits: vec![Edit::replace(
                        call.range.into(),
                        inline_form(name, call, ctx.source),
                    )],
                });
            }
        }
        findings
    }
}

/// Name of a receiverless, blockless `association :name, ...` call.
fn bare_association_name(call: &CallExpression) -> Option<&str> {
    if call.has_receiver() || call.block.is_some() || call.method != "association" {
        return None;
    }
    match call.first_argument()?.as_literal()? {
        Literal::Symbol(name) => Some(name.as_str()),
        _ => None,
    }
}

/// `user { association :user, factory: :admin }`, options kept verbatim.
fn inline_form(name: &str, call: &CallExpression, source: &str) -> String {
    let options: Vec<&str> = call
        .args()
        .iter()
        .skip(1)
        .filter_map(|arg| {
            let range = arg.range();
            source.get(range.start_byte..range.end_byte)
        })
        .collect();
    if options.is_empty() {
        format!("{name} {{ association :{name} }}")
    } else {
        format!("{name} {{ association :{name}, {} }}", options.join(", "))
    }
}
