//! `missing_class_option`: every factory names its model class explicitly.

use crate::edits::Edit;
use crate::factories::locate_templates;
use crate::naming::camelize;

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Specify a class option explicitly in FactoryBot factory.";

pub struct MissingClassOption;

impl Check for MissingClassOption {
    fn id(&self) -> &'static str {
        "missing_class_option"
    }

    fn description(&self) -> &'static str {
        "Factories pass `class:` so the model can be resolved"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        locate_templates(ctx.root)
            .into_iter()
            .filter(|template| template.class_option().is_none())
            .map(|template| {
                let call = template.call;
                // Assumes the factory name matches the class name.
                let edits = match (template.name(), call.first_argument()) {
                    (Some(name), Some(first)) => vec![Edit::insert(
                        first.range().end_byte,
                        format!(", class: '{}'", camelize(name)),
                    )],
                    _ => Vec::new(),
                };
                Finding {
                    check: self.id().to_string(),
                    message: MESSAGE.to_string(),
                    range: call.selector,
                    severity: self.severity(),
                    edits,
                }
            })
            .collect()
    }
}
