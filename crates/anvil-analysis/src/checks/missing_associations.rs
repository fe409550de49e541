//! `missing_associations`: every `belongs_to` of the model is declared.

use crate::coverage::{generate_association, missing_associations};
use crate::edits::plan;
use crate::factories::{classify, locate_templates};

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Ensure all associations of the model class are defined in the factory.";

pub struct MissingAssociations;

impl Check for MissingAssociations {
    fn id(&self) -> &'static str {
        "missing_associations"
    }

    fn description(&self) -> &'static str {
        "Factories declare every belongs_to association of their model"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for template in locate_templates(ctx.root) {
            let Some(class_name) = template.class_name() else {
                continue;
            };
            let call = template.call;
            let facts = ctx.models.facts_for(class_name);
            let declared = call.block.as_ref().map(classify).unwrap_or_default();

            let missing = missing_associations(&facts, &declared);
            if missing.is_empty() {
                continue;
            }
            tracing::debug!(class_name, ?missing, "missing associations");

            let snippets: Vec<String> = missing.iter().map(|n| generate_association(n)).collect();
            findings.push(Finding {
                check: self.id().to_string(),
                message: MESSAGE.to_string(),
                range: call.range,
                severity: self.severity(),
                edits: plan(
                    call,
                    &snippets,
                    ctx.source,
                    ctx.config.factories.effective_indent_width(),
                ),
            });
        }
        findings
    }
}
