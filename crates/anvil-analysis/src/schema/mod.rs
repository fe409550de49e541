//! Schema catalog built from `db/schema.rb`.

pub mod loader;
pub mod types;

pub use loader::SchemaLoader;
pub use types::{ColumnFact, ColumnType, SchemaCatalog, Table};
