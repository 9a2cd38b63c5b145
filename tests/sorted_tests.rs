//! Unit tests for the sorted set operations.
//!
//! These tests cover the documented scenarios, compare every operation with
//! a naive reference on all small sorted inputs, and check that the cursor
//! over the second input is released on every exit path.

use lambars_sorted::sequence::Sequence;
use lambars_sorted::sorted::{
    intersect, intersect_by, merge, merge_by, subtract, subtract_by, union, union_by,
};
use rstest::rstest;
use std::cell::Cell;
use std::collections::BTreeSet;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

// =============================================================================
// Helpers
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared view of what happened to an [`Instrumented`] sequence.
#[derive(Clone, Default)]
struct Tally {
    pulls: Rc<Cell<usize>>,
    released: Rc<Cell<bool>>,
}

impl Tally {
    fn pulls(&self) -> usize {
        self.pulls.get()
    }

    fn released(&self) -> bool {
        self.released.get()
    }
}

/// Sequence that counts the values taken from it and records its release.
struct Instrumented {
    values: std::vec::IntoIter<i32>,
    tally: Tally,
}

impl Iterator for Instrumented {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.values.next();
        if value.is_some() {
            self.tally.pulls.set(self.tally.pulls.get() + 1);
        }
        value
    }
}

impl Drop for Instrumented {
    fn drop(&mut self) {
        self.tally.released.set(true);
    }
}

fn instrumented(values: Vec<i32>) -> (Instrumented, Tally) {
    let tally = Tally::default();
    let sequence = Instrumented {
        values: values.into_iter(),
        tally: tally.clone(),
    };
    (sequence, tally)
}

/// All non-decreasing vectors over `[0, n)` in which every value occurs at
/// most `max` times.
fn sorted_vecs(n: i32, max: usize) -> Vec<Vec<i32>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for prefix in sorted_vecs(n - 1, max) {
        let mut extended = prefix.clone();
        result.push(prefix);
        for _ in 0..max {
            extended.push(n - 1);
            result.push(extended.clone());
        }
    }
    result
}

fn naive_merge(first: &[i32], second: &[i32]) -> Vec<i32> {
    let mut result = [first, second].concat();
    result.sort_unstable();
    result
}

fn naive_union(first: &[i32], second: &[i32]) -> Vec<i32> {
    let mut result = naive_merge(first, second);
    result.dedup();
    result
}

fn naive_intersect(first: &[i32], second: &[i32]) -> Vec<i32> {
    let first: BTreeSet<i32> = first.iter().copied().collect();
    let second: BTreeSet<i32> = second.iter().copied().collect();
    first.intersection(&second).copied().collect()
}

fn naive_subtract(first: &[i32], second: &[i32]) -> Vec<i32> {
    let first: BTreeSet<i32> = first.iter().copied().collect();
    let second: BTreeSet<i32> = second.iter().copied().collect();
    first.difference(&second).copied().collect()
}

#[rstest]
fn test_sorted_vecs_enumeration() {
    let expected: Vec<Vec<i32>> = vec![
        vec![],
        vec![1],
        vec![1, 1],
        vec![0],
        vec![0, 1],
        vec![0, 1, 1],
        vec![0, 0],
        vec![0, 0, 1],
        vec![0, 0, 1, 1],
    ];
    assert_eq!(sorted_vecs(2, 2), expected);
}

// =============================================================================
// Documented Scenarios
// =============================================================================

#[rstest]
#[case::duplicates_in_first(vec![0, 1, 1], vec![1], vec![0, 1, 1, 1], vec![0, 1], vec![1], vec![0])]
#[case::empty_first(vec![], vec![2, 2, 3], vec![2, 2, 3], vec![2, 3], vec![], vec![])]
#[case::empty_second(vec![5], vec![], vec![5], vec![5], vec![], vec![5])]
fn test_documented_scenarios(
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] merged: Vec<i32>,
    #[case] united: Vec<i32>,
    #[case] common: Vec<i32>,
    #[case] difference: Vec<i32>,
) {
    assert_eq!(merge(first.clone(), second.clone()).collect::<Vec<_>>(), merged);
    assert_eq!(union(first.clone(), second.clone()).collect::<Vec<_>>(), united);
    assert_eq!(intersect(first.clone(), second.clone()).collect::<Vec<_>>(), common);
    assert_eq!(subtract(first, second).collect::<Vec<_>>(), difference);
}

// =============================================================================
// Exhaustive Comparison With Naive References
// =============================================================================

#[rstest]
fn test_merge_matches_naive_on_all_small_inputs() {
    let inputs = sorted_vecs(3, 3);
    for first in &inputs {
        for second in &inputs {
            let merged: Vec<i32> = merge(first.clone(), second.clone()).collect();
            assert_eq!(
                merged,
                naive_merge(first, second),
                "merge({first:?}, {second:?})"
            );
        }
    }
}

#[rstest]
fn test_union_matches_naive_on_all_small_inputs() {
    let inputs = sorted_vecs(3, 3);
    for first in &inputs {
        for second in &inputs {
            let united: Vec<i32> = union(first.clone(), second.clone()).collect();
            assert_eq!(
                united,
                naive_union(first, second),
                "union({first:?}, {second:?})"
            );
        }
    }
}

#[rstest]
fn test_intersect_matches_naive_on_all_small_inputs() {
    let inputs = sorted_vecs(3, 3);
    for first in &inputs {
        for second in &inputs {
            let common: Vec<i32> = intersect(first.clone(), second.clone()).collect();
            assert_eq!(
                common,
                naive_intersect(first, second),
                "intersect({first:?}, {second:?})"
            );
        }
    }
}

#[rstest]
fn test_subtract_matches_naive_on_all_small_inputs() {
    let inputs = sorted_vecs(3, 3);
    for first in &inputs {
        for second in &inputs {
            let difference: Vec<i32> = subtract(first.clone(), second.clone()).collect();
            assert_eq!(
                difference,
                naive_subtract(first, second),
                "subtract({first:?}, {second:?})"
            );
        }
    }
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn test_construction_pulls_nothing() {
    let (first, first_tally) = instrumented(vec![1, 2, 3]);
    let (second, second_tally) = instrumented(vec![2, 3, 4]);

    let merged = merge(first, second);
    assert_eq!(first_tally.pulls(), 0);
    assert_eq!(second_tally.pulls(), 0);
    drop(merged);

    assert!(first_tally.released());
    assert!(second_tally.released());
}

#[rstest]
fn test_merge_pulls_only_what_it_needs() {
    let (first, first_tally) = instrumented(vec![1, 5, 9]);
    let (second, second_tally) = instrumented(vec![2, 3, 10]);

    let mut merged = merge(first, second);
    assert_eq!(merged.next(), Some(1));
    assert_eq!(first_tally.pulls(), 1);
    assert_eq!(second_tally.pulls(), 1);

    assert_eq!(merged.next(), Some(2));
    assert_eq!(first_tally.pulls(), 2);
    assert_eq!(second_tally.pulls(), 1);

    assert_eq!(merged.next(), Some(3));
    assert_eq!(first_tally.pulls(), 2);
    assert_eq!(second_tally.pulls(), 2);
}

#[rstest]
#[case::merge_drain("merge", vec![], vec![1, 2, 3], 1, 1)]
#[case::merge_interleaved("merge", vec![5], vec![1, 2, 3], 2, 2)]
#[case::union_drain("union", vec![], vec![1, 2, 3], 1, 1)]
#[case::union_duplicates("union", vec![2], vec![1, 1, 3], 1, 1)]
#[case::intersect("intersect", vec![1, 2, 3], vec![1, 2, 3], 1, 1)]
#[case::intersect_after_skip("intersect", vec![3, 4], vec![1, 3, 4], 1, 2)]
#[case::subtract("subtract", vec![1, 2, 3], vec![0, 5, 6], 1, 2)]
fn test_stop_leaves_second_input_unread(
    #[case] operation: &str,
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] limit: usize,
    #[case] expected_pulls: usize,
) {
    let (second, tally) = instrumented(second);

    let output: Box<dyn Iterator<Item = i32>> = match operation {
        "merge" => Box::new(merge(first, second)),
        "union" => Box::new(union(first, second)),
        "intersect" => Box::new(intersect(first, second)),
        _ => Box::new(subtract(first, second)),
    };
    let taken: Vec<i32> = output.take(limit).collect();

    assert_eq!(taken.len(), limit);
    assert_eq!(tally.pulls(), expected_pulls, "{operation} pulled ahead of its consumer");
    assert!(tally.released());
}

#[rstest]
#[case::merge("merge", vec![])]
#[case::union("union", vec![])]
#[case::intersect("intersect", vec![1, 2])]
#[case::subtract("subtract", vec![0])]
fn test_unrequested_second_values_are_never_produced(
    #[case] operation: &str,
    #[case] first: Vec<i32>,
) {
    let second = (1..=3).map(|value| {
        assert!(value < 2, "value {value} was produced without being requested");
        value
    });

    let output: Box<dyn Iterator<Item = i32>> = match operation {
        "merge" => Box::new(merge(first, second)),
        "union" => Box::new(union(first, second)),
        "intersect" => Box::new(intersect(first, second)),
        _ => Box::new(subtract(first, second)),
    };
    let taken: Vec<i32> = output.take(1).collect();

    assert_eq!(taken.len(), 1);
}

// =============================================================================
// Release on Every Exit Path
// =============================================================================

#[rstest]
#[case::merge("merge")]
#[case::union("union")]
#[case::intersect("intersect")]
#[case::subtract("subtract")]
fn test_release_after_exhaustion(#[case] operation: &str) {
    init_tracing();
    let (second, tally) = instrumented(vec![1, 2, 3]);
    let first = vec![0, 1, 2, 3, 4];

    let mut output: Box<dyn Iterator<Item = i32>> = match operation {
        "merge" => Box::new(merge(first, second)),
        "union" => Box::new(union(first, second)),
        "intersect" => Box::new(intersect(first, second)),
        _ => Box::new(subtract(first, second)),
    };

    while output.next().is_some() {}
    assert!(tally.released(), "{operation} kept its cursor after exhaustion");
}

#[rstest]
#[case::merge("merge", vec![0, 1, 1, 2, 2, 3, 3, 4])]
#[case::union("union", vec![0, 1, 2, 3, 4])]
#[case::intersect("intersect", vec![1, 2, 3])]
#[case::subtract("subtract", vec![0, 4])]
fn test_release_after_early_stop(#[case] operation: &str, #[case] full: Vec<i32>) {
    init_tracing();
    for limit in 1..=full.len() {
        let (second, tally) = instrumented(vec![1, 2, 3]);
        let first = vec![0, 1, 2, 3, 4];

        let output: Box<dyn Iterator<Item = i32>> = match operation {
            "merge" => Box::new(merge(first, second)),
            "union" => Box::new(union(first, second)),
            "intersect" => Box::new(intersect(first, second)),
            _ => Box::new(subtract(first, second)),
        };

        let mut accepted = Vec::new();
        let exhausted = output.drive(|value| {
            accepted.push(value);
            accepted.len() < limit
        });

        assert!(!exhausted);
        assert_eq!(accepted, full[..limit].to_vec());
        assert!(tally.released(), "{operation} leaked its cursor after {limit} values");
    }
}

#[rstest]
fn test_release_when_output_dropped_midway() {
    let (second, tally) = instrumented((0..100).collect());
    let taken: Vec<i32> = union(0..100, second).take(3).collect();

    assert_eq!(taken, vec![0, 1, 2]);
    assert!(tally.released());
    assert!(tally.pulls() < 100);
}

#[rstest]
fn test_release_when_comparator_panics() {
    let (second, tally) = instrumented(vec![1, 2, 3]);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        merge_by(vec![1, 2, 3], second, |left: &i32, right: &i32| {
            assert!(*left != 2 && *right != 2, "comparator refused 2");
            left.cmp(right)
        })
        .collect::<Vec<_>>()
    }));

    assert!(outcome.is_err());
    assert!(tally.released());
}

#[rstest]
fn test_release_when_producer_panics() {
    let (second, tally) = instrumented(vec![1, 2, 3]);
    let first = (0..5).map(|value| {
        assert!(value < 3, "producer failed");
        value
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| subtract(first, second).count()));

    assert!(outcome.is_err());
    assert!(tally.released());
}

#[rstest]
fn test_intersect_stops_reading_first_when_second_runs_out() {
    let (first, first_tally) = instrumented((0..1000).collect());
    let common: Vec<i32> = intersect(first, vec![3, 4]).collect();

    assert_eq!(common, vec![3, 4]);
    assert!(first_tally.pulls() <= 6);
}

// =============================================================================
// Custom Comparators
// =============================================================================

#[rstest]
fn test_by_forms_with_key_projection() {
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        key: u32,
        source: &'static str,
    }

    let entry = |key, source| Entry { key, source };
    let by_key = |left: &Entry, right: &Entry| left.key.cmp(&right.key);

    let first = vec![entry(1, "a"), entry(3, "a"), entry(3, "a")];
    let second = vec![entry(2, "b"), entry(3, "b")];

    let merged: Vec<Entry> = merge_by(first.clone(), second.clone(), by_key).collect();
    assert_eq!(
        merged,
        vec![entry(1, "a"), entry(2, "b"), entry(3, "a"), entry(3, "a"), entry(3, "b")]
    );

    let united: Vec<Entry> = union_by(first.clone(), second.clone(), by_key).collect();
    assert_eq!(united, vec![entry(1, "a"), entry(2, "b"), entry(3, "a")]);

    let common: Vec<Entry> = intersect_by(first.clone(), second.clone(), by_key).collect();
    assert_eq!(common, vec![entry(3, "a")]);

    let difference: Vec<Entry> = subtract_by(first, second, by_key).collect();
    assert_eq!(difference, vec![entry(1, "a")]);
}

#[rstest]
fn test_unsorted_input_terminates() {
    let first = vec![5, 1, 4];
    let second = vec![3, 0, 2];

    assert_eq!(merge(first.clone(), second.clone()).count(), 6);
    let _ = union(first.clone(), second.clone()).count();
    let _ = intersect(first.clone(), second.clone()).count();
    let _ = subtract(first, second).count();
}
