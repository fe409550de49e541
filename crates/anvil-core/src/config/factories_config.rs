//! Factory formatting and correction configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FactoriesConfig {
    /// Extra indentation for definitions inserted into a block. Default: 2.
    pub indent_width: Option<usize>,
    /// Upper bound on correction passes before giving up. Default: 200.
    pub max_correction_passes: Option<usize>,
}

impl FactoriesConfig {
    pub fn effective_indent_width(&self) -> usize {
        self.indent_width.unwrap_or(2)
    }

    pub fn effective_max_correction_passes(&self) -> usize {
        self.max_correction_passes.unwrap_or(200)
    }
}
