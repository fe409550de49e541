//! Rails project layout configuration.

use serde::{Deserialize, Serialize};

/// Where model sources and the schema artifact live, and which columns
/// factories never need to declare.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RailsConfig {
    /// Model source directory, relative to the project root. Default: `app/models`.
    pub models_dir: Option<String>,
    /// Schema artifact path, relative to the project root. Default: `db/schema.rb`.
    pub schema_path: Option<String>,
    /// Audit columns excluded from missing-property reports.
    /// Default: `created_at`, `updated_at`.
    #[serde(default)]
    pub restricted_columns: Vec<String>,
}

impl RailsConfig {
    pub fn effective_models_dir(&self) -> &str {
        self.models_dir.as_deref().unwrap_or("app/models")
    }

    pub fn effective_schema_path(&self) -> &str {
        self.schema_path.as_deref().unwrap_or("db/schema.rb")
    }

    /// Returns the restricted audit columns, defaulting to the Rails timestamps.
    pub fn effective_restricted_columns(&self) -> Vec<&str> {
        if self.restricted_columns.is_empty() {
            vec!["created_at", "updated_at"]
        } else {
            self.restricted_columns.iter().map(String::as_str).collect()
        }
    }
}
