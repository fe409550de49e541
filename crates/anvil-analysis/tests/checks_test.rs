//! End-to-end tests for the registered checks and the correction loop.

mod common;

use std::path::PathBuf;

use anvil_analysis::checks::{missing_associations, missing_class_option, property_order};
use anvil_analysis::models::{InMemoryModelSource, ModelRepository};
use anvil_analysis::{CheckRegistry, Runner, Severity};
use anvil_core::errors::CheckError;
use anvil_core::AnvilConfig;

fn factory(body: &str) -> String {
    format!("FactoryBot.define do\n  factory :user, class: 'User' do\n{body}  end\nend\n")
}

#[test]
fn test_missing_association_is_reported_and_inserted() {
    let runner = common::users_runner(&["missing_associations"]);
    let source = factory("    name { 'Alice' }\n");

    let findings = runner.check_source(&source, common::factory_path()).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].check, "missing_associations");
    assert_eq!(findings[0].message, missing_associations::MESSAGE);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].range.start.line, 1);
    assert_eq!(findings[0].range.start.column, 2);
    assert_eq!(findings[0].range.end.line, 3);

    let outcome = runner.correct_source(&source, common::factory_path()).unwrap();
    assert_eq!(
        outcome.source,
        factory("    profile { association :profile }\n    name { 'Alice' }\n")
    );
    assert_eq!(outcome.passes, 1);
    assert!(outcome.remaining.is_empty());
}

#[test]
fn test_has_many_is_not_required() {
    let runner = common::users_runner(&["missing_associations"]);
    let source = factory("    association :profile\n");
    assert!(runner.check_source(&source, common::factory_path()).unwrap().is_empty());
}

#[test]
fn test_unresolvable_model_reports_nothing() {
    let runner = common::users_runner(&["missing_associations", "missing_properties"]);
    let source = "FactoryBot.define do\n  factory :ghost, class: 'Ghost' do\n  end\nend\n";
    assert!(runner.check_source(source, common::factory_path()).unwrap().is_empty());
}

#[test]
fn test_missing_properties_fill_an_empty_block() {
    let runner = common::users_runner(&["missing_properties"]);
    let source = factory("");

    let findings = runner.check_source(&source, common::factory_path()).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Add properties `email`, `name`, `role`.");
    // Selector through the class option.
    let range = findings[0].range;
    assert_eq!((range.start.line, range.start.column), (1, 2));
    assert_eq!((range.end.line, range.end.column), (1, 30));

    let outcome = runner.correct_source(&source, common::factory_path()).unwrap();
    assert_eq!(
        outcome.source,
        factory(concat!(
            "    sequence(:email) { \"Email #{_1}\" }\n",
            "    sequence(:name) { \"Name #{_1}\" }\n",
            "    role { User.roles.keys.sample }\n",
        ))
    );
    assert_eq!(outcome.passes, 1);
}

#[test]
fn test_property_order_needs_one_pass_per_swap() {
    let runner = common::users_runner(&["property_order"]);
    let source = factory("    d { 1 }\n    b { 2 }\n    c { 3 }\n");

    let findings = runner.check_source(&source, common::factory_path()).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, property_order::MESSAGE);
    // Reported on the last definition of the section.
    assert_eq!(findings[0].range.start.line, 4);

    let outcome = runner.correct_source(&source, common::factory_path()).unwrap();
    assert_eq!(outcome.source, factory("    b { 2 }\n    c { 3 }\n    d { 1 }\n"));
    assert_eq!(outcome.passes, 2);
}

#[test]
fn test_each_section_is_fixed_independently() {
    let runner = common::users_runner(&["property_order"]);
    let source = factory("    b { 1 }\n    a { 1 }\n\n    d { 1 }\n    c { 1 }\n");

    let findings = runner.check_source(&source, common::factory_path()).unwrap();
    assert_eq!(findings.len(), 2);

    let outcome = runner.correct_source(&source, common::factory_path()).unwrap();
    assert_eq!(
        outcome.source,
        factory("    a { 1 }\n    b { 1 }\n\n    c { 1 }\n    d { 1 }\n")
    );
    assert_eq!(outcome.passes, 1);
    assert_eq!(outcome.applied, 2);
}

#[test]
fn test_class_option_is_inserted_from_factory_name() {
    let runner = common::users_runner(&["missing_class_option"]);
    let source = "FactoryBot.define do\n  factory :admin_user do\n  end\nend\n";

    let findings = runner.check_source(source, common::factory_path()).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, missing_class_option::MESSAGE);
    assert_eq!(findings[0].range.start.column, 2);
    assert_eq!(findings[0].range.end.column, 9);

    let outcome = runner.correct_source(source, common::factory_path()).unwrap();
    assert_eq!(
        outcome.source,
        "FactoryBot.define do\n  factory :admin_user, class: 'AdminUser' do\n  end\nend\n"
    );
}

#[test]
fn test_dynamic_factory_name_is_reported_without_edits() {
    let runner = common::users_runner(&["missing_class_option"]);
    let source = "FactoryBot.define do\n  factory NAME do\n  end\nend\n";

    let outcome = runner.correct_source(source, common::factory_path()).unwrap();
    assert_eq!(outcome.source, source);
    assert!(!outcome.changed());
    assert_eq!(outcome.remaining.len(), 1);
    assert!(!outcome.remaining[0].is_correctable());
}

#[test]
fn test_missing_block_takes_two_passes() {
    let runner = common::users_runner(&["missing_associations"]);
    let source = "FactoryBot.define do\n  factory :user, class: 'User'\nend\n";

    let outcome = runner.correct_source(source, common::factory_path()).unwrap();
    assert_eq!(outcome.source, factory("    profile { association :profile }\n"));
    assert_eq!(outcome.passes, 2);
}

#[test]
fn test_one_line_block_is_expanded() {
    let runner = common::users_runner(&["missing_associations"]);
    let source = "FactoryBot.define do\n  factory :user, class: 'User' do end\nend\n";

    let outcome = runner.correct_source(source, common::factory_path()).unwrap();
    assert_eq!(
        outcome.source,
        "FactoryBot.define do\n  factory :user, class: 'User' do\n    profile { association :profile }\n  end\nend\n"
    );
}

#[test]
fn test_all_checks_converge_and_are_idempotent() {
    let runner = common::users_runner(&[]);
    let source = factory("    name { 'Alice' }\n");

    let outcome = runner.correct_source(&source, common::factory_path()).unwrap();
    assert_eq!(
        outcome.source,
        factory(concat!(
            "    sequence(:email) { \"Email #{_1}\" }\n",
            "    profile { association :profile }\n",
            "    name { 'Alice' }\n",
            "    role { User.roles.keys.sample }\n",
        ))
    );
    assert_eq!(outcome.passes, 4);
    assert!(outcome.remaining.is_empty());

    let again = runner
        .correct_source(&outcome.source, common::factory_path())
        .unwrap();
    assert_eq!(again.passes, 0);
    assert_eq!(again.source, outcome.source);
}

#[test]
fn test_factories_outside_define_are_ignored() {
    let runner = common::users_runner(&[]);
    let source = "factory :user do\n  name { 'x' }\nend\n";
    assert!(runner.check_source(source, common::factory_path()).unwrap().is_empty());
}

#[test]
fn test_disabled_checks_do_not_run() {
    let mut config = AnvilConfig::default();
    config.checks.enabled = vec!["missing_properties".into(), "property_order".into()];
    config.checks.disabled = vec!["property_order".into()];
    let repository = ModelRepository::new(Box::new(InMemoryModelSource::new()), "app/models");
    let runner = Runner::new(config, common::schema(common::USERS_SCHEMA), repository);

    let source = "FactoryBot.define do\n  factory :widget, class: 'Widget' do\n    b { 1 }\n    a { 1 }\n  end\nend\n";
    assert!(runner.check_source(source, common::factory_path()).unwrap().is_empty());
}

#[test]
fn test_empty_registry_reports_nothing() {
    let runner = common::users_runner(&[]).with_registry(CheckRegistry::empty());
    let source = factory("");
    assert!(runner.check_source(&source, common::factory_path()).unwrap().is_empty());
    assert_eq!(CheckRegistry::with_defaults().ids().len(), 10);
}

#[test]
fn test_pass_limit_is_enforced() {
    let mut config = common::config_with_checks(&["property_order"]);
    config.factories.max_correction_passes = Some(1);
    let repository = ModelRepository::new(Box::new(InMemoryModelSource::new()), "app/models");
    let runner = Runner::new(config, common::schema(common::USERS_SCHEMA), repository);

    let source = factory("    d { 1 }\n    b { 2 }\n    c { 3 }\n");
    let err = runner
        .correct_source(&source, common::factory_path())
        .unwrap_err();
    assert!(matches!(err, CheckError::NotConverged { passes: 1 }));
}

#[test]
fn test_syntax_error_is_fatal_for_the_file() {
    let runner = common::users_runner(&[]);
    let err = runner
        .check_source("FactoryBot.define do\n  factory :user do\n", common::factory_path())
        .unwrap_err();
    assert!(matches!(err, CheckError::Parse(_)));
}

#[test]
fn test_check_files_collects_errors_per_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let good = dir.path().join("users.rb");
    let bad = dir.path().join("broken.rb");
    std::fs::write(&good, factory("    name { 'Alice' }\n")).unwrap();
    std::fs::write(&bad, "FactoryBot.define do\n").unwrap();
    let missing = dir.path().join("missing.rb");

    let runner = common::users_runner(&["missing_associations"]);
    let result = runner.check_files(&[good.clone(), bad, missing]);

    assert_eq!(result.error_count(), 2);
    assert!(!result.is_clean());
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].0, good);
    assert_eq!(result.data[0].1.len(), 1);
}

#[test]
fn test_runner_for_project_reads_schema_and_models_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("db")).unwrap();
    std::fs::create_dir_all(dir.path().join("app/models")).unwrap();
    std::fs::write(dir.path().join("db/schema.rb"), common::USERS_SCHEMA).unwrap();
    std::fs::write(dir.path().join("app/models/user.rb"), common::USER_MODEL).unwrap();

    let config = common::config_with_checks(&["missing_properties"]);
    let runner = Runner::for_project(dir.path(), config).unwrap();
    let findings = runner
        .check_source(&factory(""), &PathBuf::from("spec/factories/users.rb"))
        .unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].check, "missing_properties");
}
