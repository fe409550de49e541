//! `singular_factory_name`: factory names are singular.

use crate::edits::Edit;
use crate::factories::locate_templates;
use crate::naming::singularize;
use crate::parsers::{Literal, Node};

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Factory name should be singular, not plural.";

pub struct SingularFactoryName;

impl Check for SingularFactoryName {
    fn id(&self) -> &'static str {
        "singular_factory_name"
    }

    fn description(&self) -> &'static str {
        "Factory names are singular"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for template in locate_templates(ctx.root) {
            let Some(Node::Literal(literal)) = template.call.first_argument() else {
                continue;
            };
            let (name, quote) = match &literal.value {
                Literal::Symbol(name) => (name, None),
                Literal::String(name) => {
                    let quote = ctx
                        .source
                        .get(literal.range.start_byte..)
                        .and_then(|rest| rest.chars().next());
                    (name, quote)
                }
                _ => continue,
            };
            let singular = singularize(name);
            if &singular == name {
                continue;
            }

            let replacement = match quote {
                Some(q) => format!("{q}{singular}{q}"),
                None => format!(":{singular}"),
            };
            findings.push(Finding {
                check: self.id().to_string(),
                message: MESSAGE.to_string(),
                range: literal.range,
                severity: self.severity(),
                edits: vec![Edit::replace(literal.range.into(), replacement)],
            });
        }
        findings
    }
}
