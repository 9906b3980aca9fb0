//! Property-based tests for the line comparison core.
//!
//! Random multi-line inputs are generated from a small alphabet so that the
//! two sides share lines often enough to exercise both the overlap and the
//! one-sided cases.

use std::collections::HashSet;

use file_compare::core::extractor::extract_lines;
use file_compare::domain::model::LineClass;
use file_compare::{ClassificationPolicy, DiffEngine, LineSet, SortMode};

use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]{1,2}",
        "[#!@ ][a-c]{0,2}",
        "[0-9]",
        Just(String::new()),
    ]
}

fn input_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(line_strategy(), 0..12), any::<bool>(), any::<bool>()).prop_map(
        |(lines, crlf, trailing)| {
            let sep = if crlf { "\r\n" } else { "\n" };
            let mut text = lines.join(sep);
            if trailing && !lines.is_empty() {
                text.push_str(sep);
            }
            text
        },
    )
}

fn sort_mode_strategy() -> impl Strategy<Value = SortMode> {
    prop_oneof![Just(SortMode::Top), Just(SortMode::Bottom)]
}

fn extract(raw: &str) -> LineSet {
    extract_lines("prop", Some(raw.as_bytes())).unwrap()
}

fn distinct(set: &LineSet) -> HashSet<&str> {
    set.iter().collect()
}

// ============================================================================
// Set properties
// ============================================================================

proptest! {
    /// No line can be unique to both sides
    #[test]
    fn prop_unique_sets_are_disjoint(
        a in input_strategy(),
        b in input_strategy(),
        mode in sort_mode_strategy()
    ) {
        let result = DiffEngine::default().compare(&extract(&a), &extract(&b), mode);
        let left: HashSet<&String> = result.unique_to_a.iter().collect();
        prop_assert!(result.unique_to_b.iter().all(|line| !left.contains(line)));
    }

    /// Every unique line comes from its own side and is absent from the other
    #[test]
    fn prop_unique_lines_are_one_sided(
        a in input_strategy(),
        b in input_strategy(),
        mode in sort_mode_strategy()
    ) {
        let (set_a, set_b) = (extract(&a), extract(&b));
        let (in_a, in_b) = (distinct(&set_a), distinct(&set_b));
        let result = DiffEngine::default().compare(&set_a, &set_b, mode);

        for line in &result.unique_to_a {
            prop_assert!(in_a.contains(line.as_str()) && !in_b.contains(line.as_str()));
        }
        for line in &result.unique_to_b {
            prop_assert!(in_b.contains(line.as_str()) && !in_a.contains(line.as_str()));
        }
    }

    /// Identity holds exactly when the distinct line sets are equal
    #[test]
    fn prop_identical_iff_set_equal(
        a in input_strategy(),
        b in input_strategy(),
        mode in sort_mode_strategy()
    ) {
        let (set_a, set_b) = (extract(&a), extract(&b));
        let result = DiffEngine::default().compare(&set_a, &set_b, mode);
        prop_assert_eq!(result.identical(), distinct(&set_a) == distinct(&set_b));
    }

    /// Swapping the inputs swaps the outputs
    #[test]
    fn prop_comparison_is_symmetric(
        a in input_strategy(),
        b in input_strategy(),
        mode in sort_mode_strategy()
    ) {
        let engine = DiffEngine::default();
        let forward = engine.compare(&extract(&a), &extract(&b), mode);
        let backward = engine.compare(&extract(&b), &extract(&a), mode);
        prop_assert_eq!(forward.unique_to_a, backward.unique_to_b);
        prop_assert_eq!(forward.unique_to_b, backward.unique_to_a);
    }

    /// Extracting the same bytes twice gives the same LineSet
    #[test]
    fn prop_extraction_is_idempotent(raw in input_strategy()) {
        prop_assert_eq!(extract(&raw), extract(&raw));
    }
}

// ============================================================================
// Ordering properties
// ============================================================================

proptest! {
    /// Each class keeps its relative order; only the class blocks move
    #[test]
    fn prop_partition_is_stable(a in input_strategy()) {
        let policy = ClassificationPolicy::Unicode;
        let engine = DiffEngine::new(policy);
        let set_a = extract(&a);
        let empty = extract("");

        let top = engine.compare(&set_a, &empty, SortMode::Top).unique_to_a;
        let bottom = engine.compare(&set_a, &empty, SortMode::Bottom).unique_to_a;

        let of_class = |lines: &[String], class: LineClass| -> Vec<String> {
            lines.iter().filter(|l| policy.classify(l) == class).cloned().collect()
        };
        let original: Vec<String> = set_a.lines().to_vec();

        for class in [LineClass::Special, LineClass::Ordinary] {
            prop_assert_eq!(of_class(&top, class), of_class(&original, class));
            prop_assert_eq!(of_class(&bottom, class), of_class(&original, class));
        }

        let top_classes: Vec<LineClass> = top.iter().map(|l| policy.classify(l)).collect();
        let first_ordinary = top_classes.iter().position(|c| *c == LineClass::Ordinary);
        if let Some(idx) = first_ordinary {
            prop_assert!(top_classes[idx..].iter().all(|c| *c == LineClass::Ordinary));
        }

        let bottom_classes: Vec<LineClass> = bottom.iter().map(|l| policy.classify(l)).collect();
        let first_special = bottom_classes.iter().position(|c| *c == LineClass::Special);
        if let Some(idx) = first_special {
            prop_assert!(bottom_classes[idx..].iter().all(|c| *c == LineClass::Special));
        }
    }
}
