//! `class_existence`: the `class:` option names a model that has a source file.

use crate::factories::locate_templates;

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Specified class does not exist. Please make sure that the class exists.";

pub struct ClassExistence;

impl Check for ClassExistence {
    fn id(&self) -> &'static str {
        "class_existence"
    }

    fn description(&self) -> &'static str {
        "The class named by `class:` has a model file"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for template in locate_templates(ctx.root) {
            let (Some(option), Some(class_name)) = (template.class_option(), template.class_name())
            else {
                continue;
            };
            if ctx.models.source_for(class_name).is_some() {
                continue;
            }
            tracing::debug!(
                class_name,
                path = %ctx.models.model_path(class_name),
                "class option names a missing model"
            );
            findings.push(Finding {
                check: self.id().to_string(),
                message: MESSAGE.to_string(),
                range: option.value.range(),
                severity: self.severity(),
                edits: Vec::new(),
            });
        }
        findings
    }
}
