//! Model fact types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    HasMany,
    HasOne,
    BelongsTo,
}

impl AssociationKind {
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "has_many" => Some(Self::HasMany),
            "has_one" => Some(Self::HasOne),
            "belongs_to" => Some(Self::BelongsTo),
            _ => None,
        }
    }
}

/// Literal option value on an association declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    Symbol(String),
    String(String),
    Boolean(bool),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) | Self::String(s) => Some(s),
            Self::Boolean(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationFact {
    pub kind: AssociationKind,
    pub name: String,
    pub options: FxHashMap<String, OptionValue>,
}

impl AssociationFact {
    /// Explicit `foreign_key:` option, or `<name>_id`.
    pub fn foreign_key(&self) -> String {
        self.options
            .get("foreign_key")
            .and_then(OptionValue::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}_id", self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumFact {
    pub name: String,
}

/// Everything the checks need from one model source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFacts {
    pub associations: Vec<AssociationFact>,
    pub enums: Vec<EnumFact>,
}

impl ModelFacts {
    pub fn belongs_to(&self) -> impl Iterator<Item = &AssociationFact> {
        self.associations
            .iter()
            .filter(|a| a.kind == AssociationKind::BelongsTo)
    }

    pub fn belongs_to_names(&self) -> Vec<&str> {
        self.belongs_to().map(|a| a.name.as_str()).collect()
    }

    /// Foreign-key columns of every `belongs_to` association.
    pub fn foreign_key_columns(&self) -> Vec<String> {
        self.belongs_to().map(AssociationFact::foreign_key).collect()
    }

    pub fn enum_names(&self) -> Vec<&str> {
        self.enums.iter().map(|e| e.name.as_str()).collect()
    }
}
