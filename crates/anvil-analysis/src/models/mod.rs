//! Model facts: associations and enums declared in ActiveRecord model sources.

pub mod extractor;
pub mod repository;
pub mod resolver;
pub mod types;

pub use extractor::ModelFactExtractor;
pub use repository::{FsModelSource, InMemoryModelSource, ModelRepository, ModelSourceProvider};
pub use types::{AssociationFact, AssociationKind, EnumFact, ModelFacts, OptionValue};
