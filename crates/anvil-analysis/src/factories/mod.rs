//! FactoryBot templates: location inside `FactoryBot.define` and
//! classification of the statements in a template block.

pub mod analyzer;
pub mod template;

pub use analyzer::{classify, Definition, DefinitionKind};
pub use template::{
    is_factory_bot_define, locate_defines, locate_templates, top_level_factories, FactoryTemplate,
};
