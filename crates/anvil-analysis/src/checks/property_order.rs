//! `property_order`: associations first, then properties, alphabetical
//! within each blank-line-delimited section.

use crate::factories::{classify, locate_templates};
use crate::ordering::{first_violation, fix, sections};

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Sort properties and associations alphabetically.";

pub struct PropertyOrder;

impl Check for PropertyOrder {
    fn id(&self) -> &'static str {
        "property_order"
    }

    fn description(&self) -> &'static str {
        "Factory definitions are sorted within each section"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for template in locate_templates(ctx.root) {
            let Some(block) = &template.call.block else {
                continue;
            };
            let definitions = classify(block);
            for section in sections(&definitions) {
                let (Some(violation), Some(last)) = (first_violation(&section), section.last())
                else {
                    continue;
                };
                findings.push(Finding {
                    check: self.id().to_string(),
                    message: MESSAGE.to_string(),
                    range: last.range,
                    severity: self.severity(),
                    edits: vec![fix(&violation)],
                });
            }
        }
        findings
    }
}
