//! `missing_properties`: every schema column of the model is declared.

use crate::coverage::{generate, missing_properties};
use crate::edits::plan;
use crate::factories::{classify, locate_templates};

use super::types::{Check, CheckContext, Finding};

pub struct MissingProperties;

impl Check for MissingProperties {
    fn id(&self) -> &'static str {
        "missing_properties"
    }

    fn description(&self) -> &'static str {
        "Factories declare every column of their model's table"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let restricted = ctx.config.rails.effective_restricted_columns();
        let mut findings = Vec::new();

        for template in locate_templates(ctx.root) {
            let Some(class_name) = template.class_name() else {
                continue;
            };
            let call = template.call;
            let table = ctx.schema.table_by_name(&ctx.models.table_name(class_name));
            let facts = ctx.models.facts_for(class_name);
            let declared = call.block.as_ref().map(classify).unwrap_or_default();

            let missing = missing_properties(table, &facts, &declared, &restricted);
            let Some(table) = table.filter(|_| !missing.is_empty()) else {
                continue;
            };
            tracing::debug!(class_name, table = %table.name, ?missing, "missing properties");

            let enum_fields = facts.enum_names();
            let snippets: Vec<String> = missing
                .iter()
                .filter_map(|name| table.column(name))
                .map(|column| generate(column, &enum_fields, class_name))
                .collect();

            let range = match template.class_option() {
                Some(option) => call.selector.join(&option.range),
                None => call.range,
            };
            findings.push(Finding {
                check: self.id().to_string(),
                message: message(&missing),
                range,
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

/// "Add properties `age`, `email`."
pub fn message(missing: &[String]) -> String {
    let names: Vec<String> = missing.iter().map(|m| format!("`{m}`")).collect();
    format!("Add properties {}.", names.join(", "))
}
