//! Missing-field computation. Pure and deterministic.

use rustc_hash::FxHashSet;

use crate::factories::{Definition, DefinitionKind};
use crate::models::ModelFacts;
use crate::schema::{ColumnType, Table};

/// `belongs_to` associations with no Association or Sequence definition of
/// the same name. Sorted ascending.
pub fn missing_associations(facts: &ModelFacts, declared: &[Definition<'_>]) -> Vec<String> {
    let declared_names = declared_names(declared, &[
        DefinitionKind::Association,
        DefinitionKind::Sequence,
    ]);

    let mut missing: Vec<String> = facts
        .belongs_to_names()
        .into_iter()
        .filter(|name| !declared_names.contains(name))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing.dedup();
    missing
}

/// Table columns not covered by a Property or Sequence definition, leaving
/// out reference columns, restricted audit columns and `belongs_to` foreign
/// keys. Sorted ascending. A missing table yields no names.
pub fn missing_properties(
    table: Option<&Table>,
    facts: &ModelFacts,
    declared: &[Definition<'_>],
    restricted_columns: &[&str],
) -> Vec<String> {
    let Some(table) = table else {
        return Vec::new();
    };
    let declared_names = declared_names(declared, &[
        DefinitionKind::Property,
        DefinitionKind::Sequence,
    ]);
    let foreign_keys = facts.foreign_key_columns();

    let mut missing: Vec<String> = table
        .columns
        .iter()
        .filter(|c| c.column_type != ColumnType::References)
        .map(|c| c.name.as_str())
        .filter(|name| !restricted_columns.contains(name))
        .filter(|name| !declared_names.contains(name))
        .filter(|name| !foreign_keys.iter().any(|fk| fk == name))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing.dedup();
    missing
}

fn declared_names<'a>(
    declared: &'a [Definition<'_>],
    kinds: &[DefinitionKind],
) -> FxHashSet<&'a str> {
    declared
        .iter()
        .filter(|d| kinds.contains(&d.kind))
        .filter_map(|d| d.name.as_deref())
        .collect()
}
