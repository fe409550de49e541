//! Schema catalog types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Column storage type as written in `t.<type>` calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Text,
    Integer,
    Float,
    Decimal,
    Datetime,
    Timestamp,
    Time,
    Date,
    Boolean,
    Json,
    Jsonb,
    Binary,
    /// `t.references` / `t.belongs_to`: an association, not a property.
    References,
    /// Anything else (`bigint`, `uuid`, `inet`, ...), kept verbatim.
    Other(String),
}

impl ColumnType {
    pub fn from_method(method: &str) -> Self {
        match method {
            "string" => Self::String,
            "text" => Self::Text,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "datetime" => Self::Datetime,
            "timestamp" => Self::Timestamp,
            "time" => Self::Time,
            "date" => Self::Date,
            "boolean" => Self::Boolean,
            "json" => Self::Json,
            "jsonb" => Self::Jsonb,
            "binary" => Self::Binary,
            "references" | "belongs_to" => Self::References,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFact {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
}

/// One `create_table` block with its columns in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<ColumnFact>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&ColumnFact> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaCatalog {
    tables: FxHashMap<String, Table>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table, replacing any earlier table with the same name.
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
