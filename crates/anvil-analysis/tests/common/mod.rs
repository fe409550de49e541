//! Shared fixtures for anvil-analysis integration tests.

#![allow(dead_code)]

use std::path::Path;

use anvil_analysis::models::{InMemoryModelSource, ModelRepository};
use anvil_analysis::schema::{SchemaCatalog, SchemaLoader};
use anvil_analysis::Runner;
use anvil_core::AnvilConfig;

pub const USERS_SCHEMA: &str = r#"
ActiveRecord::Schema[7.1].define(version: 2024_01_01_000000) do
  create_table "profiles", force: :cascade do |t|
    t.string "bio"
  end

  create_table "users", force: :cascade do |t|
    t.bigint "profile_id", null: false
    t.string "email", null: false
    t.integer "role", default: 0
    t.string "name"
    t.datetime "created_at", null: false
    t.datetime "updated_at", null: false
  end
end
"#;

pub const USER_MODEL: &str = r#"
class User < ApplicationRecord
  belongs_to :profile
  has_many :posts, dependent: :destroy

  enum role: { admin: 0, member: 1 }
end
"#;

pub fn schema(source: &str) -> SchemaCatalog {
    SchemaLoader::new()
        .parse(source, Path::new("db/schema.rb"))
        .expect("schema parses")
}

pub fn config_with_checks(enabled: &[&str]) -> AnvilConfig {
    let mut config = AnvilConfig::default();
    config.checks.enabled = enabled.iter().map(|s| s.to_string()).collect();
    config
}

/// Runner over in-memory models. `models` pairs are (relative path, source).
pub fn runner(schema_source: &str, models: &[(&str, &str)], enabled: &[&str]) -> Runner {
    let provider = models
        .iter()
        .fold(InMemoryModelSource::new(), |provider, (path, source)| {
            provider.with_file(*path, *source)
        });
    let repository = ModelRepository::new(Box::new(provider), "app/models");
    Runner::new(config_with_checks(enabled), schema(schema_source), repository)
}

pub fn users_runner(enabled: &[&str]) -> Runner {
    runner(USERS_SCHEMA, &[("app/models/user.rb", USER_MODEL)], enabled)
}

pub fn factory_path() -> &'static Path {
    Path::new("spec/factories/user.rb")
}
