//! Tests for section partitioning and order violations.

use std::path::Path;

use anvil_analysis::edits::apply_edits;
use anvil_analysis::factories::{classify, locate_templates};
use anvil_analysis::ordering::{first_violation, fix, sections};
use anvil_analysis::parsers::{Node, RubyParser};

fn parse(source: &str) -> Node {
    RubyParser::new()
        .parse(source, Path::new("factories.rb"))
        .expect("valid ruby")
}

fn factory(body: &str) -> String {
    format!("FactoryBot.define do\n  factory :user, class: 'User' do\n{body}  end\nend\n")
}

/// Section sizes and, per section, the names of the first violating pair.
fn analyze(body: &str) -> (Vec<usize>, Vec<Option<(String, String)>>) {
    let root = parse(&factory(body));
    let templates = locate_templates(&root);
    let definitions = classify(templates[0].call.block.as_ref().unwrap());
    let sections = sections(&definitions);
    let sizes = sections.iter().map(|s| s.len()).collect();
    let violations = sections
        .iter()
        .map(|s| {
            first_violation(s).map(|v| {
                (
                    v.first.name.clone().unwrap_or_default(),
                    v.second.name.clone().unwrap_or_default(),
                )
            })
        })
        .collect();
    (sizes, violations)
}

/// Apply the fix for the first violation in the first section that has one.
fn fix_once(body: &str) -> String {
    let source = factory(body);
    let root = parse(&source);
    let templates = locate_templates(&root);
    let definitions = classify(templates[0].call.block.as_ref().unwrap());
    let violation = sections(&definitions)
        .iter()
        .find_map(first_violation)
        .expect("a violation");
    apply_edits(&source, &[fix(&violation)]).unwrap()
}

#[test]
fn test_sorted_section_has_no_violation() {
    let (sizes, violations) = analyze("    profile { association :profile }\n    age { 1 }\n    name { 'x' }\n");
    assert_eq!(sizes, vec![3]);
    assert_eq!(violations, vec![None]);
}

#[test]
fn test_associations_sort_before_properties() {
    let (_, violations) = analyze("    age { 1 }\n    association :profile\n");
    assert_eq!(violations, vec![Some(("age".into(), "profile".into()))]);
}

#[test]
fn test_sequences_rank_with_associations() {
    let (_, violations) = analyze("    sequence(:email) { _1 }\n    association :profile\n    age { 1 }\n");
    assert_eq!(violations, vec![None]);
}

#[test]
fn test_blank_line_isolates_sections() {
    let (sizes, violations) = analyze("    b { 1 }\n    c { 1 }\n\n    a { 1 }\n");
    assert_eq!(sizes, vec![2, 1]);
    assert_eq!(violations, vec![None, None]);
}

#[test]
fn test_ignored_statement_cuts_sections() {
    let (sizes, violations) = analyze("    b { 1 }\n    @x = 1\n    a { 1 }\n");
    assert_eq!(sizes, vec![1, 1]);
    assert_eq!(violations, vec![None, None]);
}

#[test]
fn test_helpers_do_not_join_sections() {
    let body = "    c { 1 }\n    trait :admin do\n      admin { true }\n    end\n    a { 1 }\n";
    let (sizes, _) = analyze(body);
    assert_eq!(sizes, vec![1, 1]);
}

#[test]
fn test_unnamed_definitions_are_skipped() {
    let (sizes, violations) = analyze("    b { 1 }\n    association NAME\n    a { 1 }\n");
    assert_eq!(sizes, vec![3]);
    assert_eq!(violations, vec![Some(("b".into(), "a".into()))]);
}

#[test]
fn test_fix_swaps_adjacent_definitions() {
    assert_eq!(
        fix_once("    d { 1 }\n    b { 2 }\n    c { 3 }\n"),
        factory("    b { 2 }\n    d { 1 }\n    c { 3 }\n")
    );
}

#[test]
fn test_leading_comments_travel_with_their_definition() {
    assert_eq!(
        fix_once("    # about d\n    d { 1 }\n    b { 2 }\n"),
        factory("    b { 2 }\n    # about d\n    d { 1 }\n")
    );
}

#[test]
fn test_trailing_comments_travel_with_their_definition() {
    assert_eq!(
        fix_once("    b { 1 } # about b\n    # about a\n    a { 1 }\n"),
        factory("    # about a\n    a { 1 }\n    b { 1 } # about b\n")
    );
}

#[test]
fn test_comments_stay_with_their_definition_across_a_helper() {
    let body = concat!(
        "    # about c\n",
        "    c { 1 }\n",
        "    transient do\n",
        "      flag { false }\n",
        "    end\n",
        "    b { 1 } # about b\n",
        "    # about a\n",
        "    a { 1 }\n",
    );
    let expected = concat!(
        "    # about c\n",
        "    c { 1 }\n",
        "    transient do\n",
        "      flag { false }\n",
        "    end\n",
        "    # about a\n",
        "    a { 1 }\n",
        "    b { 1 } # about b\n",
    );
    assert_eq!(fix_once(body), factory(expected));
}

#[test]
fn test_multi_line_definitions_swap_whole() {
    assert_eq!(
        fix_once("    name do\n      'x'\n    end\n    age { 1 }\n"),
        factory("    age { 1 }\n    name do\n      'x'\n    end\n")
    );
}
