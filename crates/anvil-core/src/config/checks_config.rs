//! Check selection configuration.

use serde::{Deserialize, Serialize};

/// Which checks run. An empty `enabled` list means every registered check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChecksConfig {
    #[serde(default)]
    pub enabled: Vec<String>,
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl ChecksConfig {
    /// Returns true if the check with this id should run.
    /// `disabled` wins over `enabled`.
    pub fn is_enabled(&self, id: &str) -> bool {
        if self.disabled.iter().any(|d| d == id) {
            return false;
        }
        self.enabled.is_empty() || self.enabled.iter().any(|e| e == id)
    }
}
