//! Check registry.

use anvil_core::config::ChecksConfig;

use super::types::Check;
use super::{
    ClassExistence, ConsistentFileName, InlineAssociation, MissingAssociations, MissingClassOption,
    MissingProperties, PropertyOrder, SingleDefinePerFile, SingleFactoryPerDefine,
    SingularFactoryName,
};

pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CheckRegistry {
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// All built-in checks, in run order: file layout, factory naming,
    /// field coverage, then ordering.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(SingleDefinePerFile));
        registry.register(Box::new(SingleFactoryPerDefine));
        registry.register(Box::new(ConsistentFileName));
        registry.register(Box::new(SingularFactoryName));
        registry.register(Box::new(MissingClassOption));
        registry.register(Box::new(ClassExistence));
        registry.register(Box::new(InlineAssociation));
        registry.register(Box::new(MissingAssociations));
        registry.register(Box::new(MissingProperties));
        registry.register(Box::new(PropertyOrder));
        registry
    }

    /// Register a check. A check with the same id replaces the earlier one.
    pub fn register(&mut self, check: Box<dyn Check>) {
        if let Some(slot) = self.checks.iter_mut().find(|c| c.id() == check.id()) {
            *slot = check;
        } else {
            self.checks.push(check);
        }
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    pub fn enabled<'a>(&'a self, config: &'a ChecksConfig) -> impl Iterator<Item = &'a dyn Check> {
        self.checks
            .iter()
            .map(|c| c.as_ref())
            .filter(move |c| config.is_enabled(c.id()))
    }
}
