//! Per-run model repository with memoized sources and facts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use moka::sync::Cache;
use rustc_hash::FxHashMap;

use super::extractor::ModelFactExtractor;
use super::resolver::{model_path, table_name};
use super::types::ModelFacts;

const MAX_CACHED_MODELS: u64 = 1_024;

/// Reads model sources by project-relative path.
pub trait ModelSourceProvider: Send + Sync {
    /// Returns the file contents, or `None` when the file is absent or unreadable.
    fn read(&self, relative_path: &str) -> Option<String>;
}

/// Reads model sources from a project root on disk.
pub struct FsModelSource {
    root: PathBuf,
}

impl FsModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModelSourceProvider for FsModelSource {
    fn read(&self, relative_path: &str) -> Option<String> {
        let path = self.root.join(relative_path);
        match std::fs::read_to_string(&path) {
            Ok(source) => Some(source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable model file");
                None
            }
        }
    }
}

/// Serves model sources from memory. Paths are project-relative.
#[derive(Default)]
pub struct InMemoryModelSource {
    files: FxHashMap<String, String>,
}

impl InMemoryModelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, relative_path: impl Into<String>, source: impl Into<String>) -> Self {
        self.files.insert(relative_path.into(), source.into());
        self
    }
}

impl ModelSourceProvider for InMemoryModelSource {
    fn read(&self, relative_path: &str) -> Option<String> {
        self.files.get(relative_path).cloned()
    }
}

/// Resolves class names to model facts. Owned by a single run; never global.
pub struct ModelRepository {
    provider: Box<dyn ModelSourceProvider>,
    models_dir: String,
    extractor: ModelFactExtractor,
    sources: Cache<String, Option<Arc<str>>>,
    facts: Cache<String, Arc<ModelFacts>>,
}

impl ModelRepository {
    pub fn new(provider: Box<dyn ModelSourceProvider>, models_dir: impl Into<String>) -> Self {
        Self {
            provider,
            models_dir: models_dir.into(),
            extractor: ModelFactExtractor::new(),
            sources: Cache::builder().max_capacity(MAX_CACHED_MODELS).build(),
            facts: Cache::builder().max_capacity(MAX_CACHED_MODELS).build(),
        }
    }

    pub fn model_path(&self, class_name: &str) -> String {
        model_path(&self.models_dir, class_name)
    }

    pub fn table_name(&self, class_name: &str) -> String {
        table_name(class_name)
    }

    /// Model source text, or `None` when the model file does not exist.
    pub fn source_for(&self, class_name: &str) -> Option<Arc<str>> {
        self.sources.get_with(class_name.to_string(), || {
            let path = self.model_path(class_name);
            let source = self.provider.read(&path).map(Arc::from);
            if source.is_none() {
                tracing::debug!(class_name, path = %path, "model file not found");
            }
            source
        })
    }

    /// Model facts; empty when the file is missing or does not parse.
    pub fn facts_for(&self, class_name: &str) -> Arc<ModelFacts> {
        self.facts.get_with(class_name.to_string(), || {
            let Some(source) = self.source_for(class_name) else {
                return Arc::new(ModelFacts::default());
            };
            let path = self.model_path(class_name);
            match self.extractor.extract(&source, Path::new(&path)) {
                Ok(facts) => Arc::new(facts),
                Err(e) => {
                    tracing::warn!(class_name, path = %path, error = %e, "model parse failed, treating as empty");
                    Arc::new(ModelFacts::default())
                }
            }
        })
    }
}
