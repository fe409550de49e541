//! Check runner and correction fixpoint loop.

use std::path::{Path, PathBuf};

use anvil_core::errors::{CheckError, CheckResult};
use anvil_core::AnvilConfig;
use tracing::instrument;

use crate::checks::{CheckContext, CheckRegistry, Finding};
use crate::edits::{apply_replacements, conflicts_with, Replacement};
use crate::models::{FsModelSource, ModelRepository};
use crate::parsers::RubyParser;
use crate::schema::{SchemaCatalog, SchemaLoader};

/// Result of [`Runner::correct_source`].
#[derive(Debug, Clone, Default)]
pub struct CorrectionOutcome {
    pub source: String,
    /// Passes that changed the source.
    pub passes: usize,
    /// Findings whose edits were applied, across all passes.
    pub applied: usize,
    /// Findings still reported by the final pass, none of them correctable.
    pub remaining: Vec<Finding>,
}

impl CorrectionOutcome {
    pub fn changed(&self) -> bool {
        self.passes > 0
    }
}

/// Runs enabled checks over factory sources. Owns the per-run schema and
/// model caches.
pub struct Runner {
    config: AnvilConfig,
    schema: SchemaCatalog,
    models: ModelRepository,
    registry: CheckRegistry,
    parser: RubyParser,
}

impl Runner {
    pub fn new(config: AnvilConfig, schema: SchemaCatalog, models: ModelRepository) -> Self {
        Self {
            config,
            schema,
            models,
            registry: CheckRegistry::with_defaults(),
            parser: RubyParser::new(),
        }
    }

    /// Runner for the Rails project at `root`: schema from disk, models
    /// read lazily from the configured models directory. Installs the
    /// `ANVIL_LOG` subscriber unless the host already set one.
    pub fn for_project(root: &Path, config: AnvilConfig) -> Result<Self, CheckError> {
        anvil_core::tracing::init_tracing();
        let schema = SchemaLoader::new().load(root, &config.rails)?;
        let models = ModelRepository::new(
            Box::new(FsModelSource::new(root)),
            config.rails.effective_models_dir(),
        );
        Ok(Self::new(config, schema, models))
    }

    pub fn with_registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &AnvilConfig {
        &self.config
    }

    /// One pass of every enabled check.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn check_source(&self, source: &str, path: &Path) -> Result<Vec<Finding>, CheckError> {
        let root = self.parser.parse(source, path)?;
        let ctx = CheckContext {
            config: &self.config,
            schema: &self.schema,
            models: &self.models,
            path,
            source,
            root: &root,
        };

        let mut findings = Vec::new();
        for check in self.registry.enabled(&self.config.checks) {
            let found = check.check(&ctx);
            tracing::trace!(check = check.id(), count = found.len(), "check finished");
            findings.extend(found);
        }
        Ok(findings)
    }

    /// Apply corrections until no finding carries edits.
    ///
    /// Each pass accepts a finding's edits as a unit when they touch nothing
    /// claimed by an earlier finding in the same pass; the rest wait for the
    /// re-parse.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn correct_source(&self, source: &str, path: &Path) -> Result<CorrectionOutcome, CheckError> {
        let max_passes = self.config.factories.effective_max_correction_passes();
        let mut current = source.to_string();
        let mut passes = 0;
        let mut applied = 0;

        loop {
            let findings = self.check_source(&current, path)?;

            let mut accepted: Vec<Replacement> = Vec::new();
            let mut remaining = Vec::new();
            for finding in findings {
                if !finding.is_correctable() {
                    remaining.push(finding);
                    continue;
                }
                let mut replacements = Vec::new();
                for edit in &finding.edits {
                    replacements.extend(edit.to_replacements(&current)?);
                }
                if conflicts_with(&accepted, &replacements) {
                    continue;
                }
                accepted.extend(replacements);
                applied += 1;
            }

            if accepted.is_empty() {
                tracing::debug!(passes, applied, "corrections converged");
                return Ok(CorrectionOutcome {
                    source: current,
                    passes,
                    applied,
                    remaining,
                });
            }
            if passes == max_passes {
                tracing::warn!(passes, "corrections did not converge");
                return Err(CheckError::NotConverged { passes });
            }

            current = apply_replacements(&current, accepted)?;
            passes += 1;
        }
    }

    /// Check factory files on disk. Unreadable or unparsable files are
    /// collected as non-fatal errors.
    pub fn check_files(&self, paths: &[PathBuf]) -> CheckResult<Vec<(PathBuf, Vec<Finding>)>> {
        let mut result = CheckResult::new(Vec::new());
        for path in paths {
            let source = match std::fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    result.add_error(CheckError::Io {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            match self.check_source(&source, path) {
                Ok(findings) => result.data.push((path.clone(), findings)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping file");
                    result.add_error(e);
                }
            }
        }
        result
    }
}
