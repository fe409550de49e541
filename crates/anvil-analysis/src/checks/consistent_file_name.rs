//! `consistent_file_name`: a file's top-level factory shares its name.

use crate::factories::{locate_defines, top_level_factories};

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Factory name should match the file name.";

pub struct ConsistentFileName;

impl Check for ConsistentFileName {
    fn id(&self) -> &'static str {
        "consistent_file_name"
    }

    fn description(&self) -> &'static str {
        "Top-level factory names match their file name"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let Some(file_name) = ctx.path.file_name().and_then(|f| f.to_str()) else {
            return Vec::new();
        };

        let mut findings = Vec::new();
        for define in locate_defines(ctx.root) {
            for template in top_level_factories(define) {
                let Some(name) = template.name() else {
                    continue;
                };
                if file_name == format!("{name}.rb") {
                    continue;
                }
                findings.push(Finding {
                    check: self.id().to_string(),
                    message: MESSAGE.to_string(),
                    range: template.call.range,
                    severity: self.severity(),
                    edits: Vec::new(),
                });
            }
        }
        findings
    }
}
