//! Property-based tests for the correction loop.
//!
//! Definitions are shuffled into a single section; the loop performs one
//! adjacent swap per pass, so it needs exactly as many passes as the
//! permutation has inversions, and a second run must find nothing to do.

mod common;

use proptest::prelude::*;

const NAMES: &[&str] = &["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];

fn factory(names: &[&str]) -> String {
    let body: String = names
        .iter()
        .map(|name| format!("    {name} {{ '{name}' }}\n"))
        .collect();
    format!("FactoryBot.define do\n  factory :user, class: 'User' do\n{body}  end\nend\n")
}

fn inversions(names: &[&str]) -> usize {
    let mut count = 0;
    for i in 0..names.len() {
        for j in i + 1..names.len() {
            if names[i] > names[j] {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_sorting_takes_one_pass_per_inversion(
        names in Just(NAMES.to_vec()).prop_shuffle()
    ) {
        let runner = common::users_runner(&["property_order"]);
        let source = factory(&names);

        let outcome = runner
            .correct_source(&source, common::factory_path())
            .unwrap();

        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(&outcome.source, &factory(&sorted));
        prop_assert_eq!(outcome.passes, inversions(&names));

        let again = runner
            .correct_source(&outcome.source, common::factory_path())
            .unwrap();
        prop_assert_eq!(again.passes, 0);
    }

    #[test]
    fn prop_blank_lines_keep_sections_apart(
        left in Just(NAMES[..3].to_vec()).prop_shuffle(),
        right in Just(NAMES[3..].to_vec()).prop_shuffle(),
    ) {
        let runner = common::users_runner(&["property_order"]);
        let body = |names: &[&str]| -> String {
            names.iter().map(|n| format!("    {n} {{ 1 }}\n")).collect()
        };
        let source = format!(
            "FactoryBot.define do\n  factory :user, class: 'User' do\n{}\n{}  end\nend\n",
            body(&right),
            body(&left),
        );

        let outcome = runner
            .correct_source(&source, common::factory_path())
            .unwrap();

        let (mut left_sorted, mut right_sorted) = (left.clone(), right.clone());
        left_sorted.sort();
        right_sorted.sort();
        let expected = format!(
            "FactoryBot.define do\n  factory :user, class: 'User' do\n{}\n{}  end\nend\n",
            body(&right_sorted),
            body(&left_sorted),
        );
        prop_assert_eq!(outcome.source, expected);
        prop_assert_eq!(
            outcome.passes,
            inversions(&left).max(inversions(&right))
        );
    }
}
