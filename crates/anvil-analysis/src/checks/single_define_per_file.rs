//! `single_define_per_file`: one `FactoryBot.define` block per file.

use crate::factories::locate_defines;

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Only one `FactoryBot.define` block is allowed per file.";

pub struct SingleDefinePerFile;

impl Check for SingleDefinePerFile {
    fn id(&self) -> &'static str {
        "single_define_per_file"
    }

    fn description(&self) -> &'static str {
        "A factory file holds a single `FactoryBot.define` block"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        locate_defines(ctx.root)
            .into_iter()
            .skip(1)
            .map(|define| Finding {
                check: self.id().to_string(),
                message: MESSAGE.to_string(),
                range: define.range,
                severity: self.severity(),
                edits: Vec::new(),
            })
            .collect()
    }
}
