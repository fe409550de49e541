//! Top-level anvil configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ChecksConfig, FactoriesConfig, RailsConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ANVIL_*`)
/// 3. Project config (`anvil.toml` in project root)
/// 4. User config (`~/.anvil/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnvilConfig {
    pub rails: RailsConfig,
    pub checks: ChecksConfig,
    pub factories: FactoriesConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub models_dir: Option<String>,
    pub schema_path: Option<String>,
    pub only_checks: Vec<String>,
    pub max_correction_passes: Option<usize>,
}

impl AnvilConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only malformed TOML is fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("anvil.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(root = %root.display(), "configuration loaded");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AnvilConfig) -> Result<(), ConfigError> {
        if let Some(width) = config.factories.indent_width {
            if width == 0 || width > 16 {
                return Err(ConfigError::ValidationFailed {
                    field: "factories.indent_width".to_string(),
                    message: "must be between 1 and 16".to_string(),
                });
            }
        }
        if config.factories.max_correction_passes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "factories.max_correction_passes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref dir) = config.rails.models_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "rails.models_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.rails.schema_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "rails.schema_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.anvil/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut AnvilConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AnvilConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it sets a value.
    fn merge(base: &mut AnvilConfig, other: &AnvilConfig) {
        // Rails
        if other.rails.models_dir.is_some() {
            base.rails.models_dir = other.rails.models_dir.clone();
        }
        if other.rails.schema_path.is_some() {
            base.rails.schema_path = other.rails.schema_path.clone();
        }
        if !other.rails.restricted_columns.is_empty() {
            base.rails.restricted_columns = other.rails.restricted_columns.clone();
        }

        // Checks
        if !other.checks.enabled.is_empty() {
            base.checks.enabled = other.checks.enabled.clone();
        }
        if !other.checks.disabled.is_empty() {
            base.checks.disabled = other.checks.disabled.clone();
        }

        // Factories
        if other.factories.indent_width.is_some() {
            base.factories.indent_width = other.factories.indent_width;
        }
        if other.factories.max_correction_passes.is_some() {
            base.factories.max_correction_passes = other.factories.max_correction_passes;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ANVIL_RAILS_MODELS_DIR`, `ANVIL_FACTORIES_INDENT_WIDTH`, etc.
    fn apply_env_overrides(config: &mut AnvilConfig) {
        if let Ok(val) = std::env::var("ANVIL_RAILS_MODELS_DIR") {
            config.rails.models_dir = Some(val);
        }
        if let Ok(val) = std::env::var("ANVIL_RAILS_SCHEMA_PATH") {
            config.rails.schema_path = Some(val);
        }
        if let Ok(val) = std::env::var("ANVIL_CHECKS_DISABLED") {
            config.checks.disabled = split_list(&val);
        }
        if let Ok(val) = std::env::var("ANVIL_FACTORIES_INDENT_WIDTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.factories.indent_width = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ANVIL_FACTORIES_MAX_CORRECTION_PASSES") {
            if let Ok(v) = val.parse::<usize>() {
                config.factories.max_correction_passes = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AnvilConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.models_dir {
            config.rails.models_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.schema_path {
            config.rails.schema_path = Some(v.clone());
        }
        if !cli.only_checks.is_empty() {
            config.checks.enabled = cli.only_checks.clone();
        }
        if let Some(v) = cli.max_correction_passes {
            config.factories.max_correction_passes = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the user-level anvil config directory: `~/.anvil/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".anvil"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
