//! Loads `db/schema.rb` into a [`SchemaCatalog`].

use std::path::Path;

use anvil_core::config::RailsConfig;
use anvil_core::errors::SchemaError;

use crate::parsers::{walk, CallExpression, Literal, Node, NodeRef, RubyParser};

use super::types::{ColumnFact, ColumnType, SchemaCatalog, Table};

/// `t.<method>` calls inside `create_table` that do not declare a column.
const NON_COLUMN_METHODS: &[&str] = &[
    "index",
    "check_constraint",
    "exclusion_constraint",
    "unique_constraint",
];

pub struct SchemaLoader {
    parser: RubyParser,
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLoader {
    pub fn new() -> Self {
        Self {
            parser: RubyParser::new(),
        }
    }

    /// Load the schema configured for the project at `root`.
    /// A missing schema file yields an empty catalog.
    pub fn load(&self, root: &Path, rails: &RailsConfig) -> Result<SchemaCatalog, SchemaError> {
        let path = root.join(rails.effective_schema_path());
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no schema file, using empty catalog");
            return Ok(SchemaCatalog::new());
        }
        let source = std::fs::read_to_string(&path).map_err(|e| SchemaError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.parse(&source, &path)
    }

    /// Parse schema source text.
    pub fn parse(&self, source: &str, path: &Path) -> Result<SchemaCatalog, SchemaError> {
        let root = self.parser.parse(source, path)?;
        let mut catalog = SchemaCatalog::new();

        walk(&root, |visit| {
            if let NodeRef::Call(call) = visit.node {
                if let Some(table) = table_from_create_table(call) {
                    catalog.insert(table);
                }
            }
        });

        tracing::debug!(path = %path.display(), tables = catalog.len(), "schema loaded");
        Ok(catalog)
    }
}

fn table_from_create_table(call: &CallExpression) -> Option<Table> {
    if call.has_receiver() || call.method != "create_table" {
        return None;
    }
    let name = call.first_argument()?.symbol_or_string()?.to_string();
    let mut table = Table {
        name,
        columns: Vec::new(),
    };

    for statement in call.block_statements() {
        let Some(column_call) = statement.as_call() else {
            continue;
        };
        if !column_call.has_receiver() {
            continue;
        }
        push_columns(column_call, &mut table.columns);
    }
    Some(table)
}

fn push_columns(call: &CallExpression, columns: &mut Vec<ColumnFact>) {
    let method = call.method.as_str();
    if NON_COLUMN_METHODS.contains(&method) {
        return;
    }

    if method == "timestamps" {
        let nullable = nullable(call);
        for name in ["created_at", "updated_at"] {
            columns.push(ColumnFact {
                name: name.to_string(),
                column_type: ColumnType::Datetime,
                nullable,
            });
        }
        return;
    }

    let column_type = ColumnType::from_method(method);
    let nullable = nullable(call);
    // `t.string "first_name", "last_name"` declares several columns at once.
    for arg in call.args() {
        let Some(name) = arg.symbol_or_string() else {
            continue;
        };
        columns.push(ColumnFact {
            name: name.to_string(),
            column_type: column_type.clone(),
            nullable,
        });
    }
}

/// `null: false` makes a column non-nullable; anything else leaves the default.
fn nullable(call: &CallExpression) -> bool {
    !matches!(
        call.option("null").map(|pair| pair.value.as_ref()),
        Some(Node::Literal(lit)) if lit.value == Literal::Boolean(false)
    )
}
