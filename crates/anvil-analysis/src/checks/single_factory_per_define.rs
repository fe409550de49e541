//! `single_factory_per_define`: one top-level factory per `FactoryBot.define`.
//! Factories nested in another factory do not count.

use crate::factories::{locate_defines, top_level_factories};

use super::types::{Check, CheckContext, Finding};

pub const MESSAGE: &str = "Only one top-level factory is allowed per FactoryBot.define.";

pub struct SingleFactoryPerDefine;

impl Check for SingleFactoryPerDefine {
    fn id(&self) -> &'static str {
        "single_factory_per_define"
    }

    fn description(&self) -> &'static str {
        "Each `FactoryBot.define` block declares one top-level factory"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        locate_defines(ctx.root)
            .into_iter()
            .flat_map(|define| top_level_factories(define).into_iter().skip(1))
            .map(|template| Finding {
                check: self.id().to_string(),
                message: MESSAGE.to_string(),
                range: template.call.range,
                severity: self.severity(),
                edits: Vec::new(),
            })
            .collect()
    }
}
