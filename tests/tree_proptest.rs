// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Property-based tests for the range-sum trees.

use proptest::prelude::*;
use rangesum::RangeSum;
use rangesum::aggregate::sum_all;
use rangesum::flat::FlatSegmentTree;
use rangesum::tree::SegmentTree;

// =============================================================================
// Test helpers
// =============================================================================

/// A random operation against a sequence of unknown length
#[derive(Clone, Debug)]
enum TreeOp {
    Query { a_pct: f64, b_pct: f64 },
    Update { pos_pct: f64, value: i64 },
}

fn arbitrary_tree_op() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        (0.0..1.0f64, 0.0..1.0f64).prop_map(|(a_pct, b_pct)| TreeOp::Query { a_pct, b_pct }),
        (0.0..1.0f64, -1_000_000i64..1_000_000)
            .prop_map(|(pos_pct, value)| TreeOp::Update { pos_pct, value }),
    ]
}

fn arbitrary_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 0..=100)
}

fn index_at(pct: f64, len: usize) -> usize {
    return ((pct * len as f64) as usize).min(len.saturating_sub(1));
}

fn brute_force(values: &[i64], start: usize, end: usize) -> i64 {
    if values.is_empty() {
        return 0;
    }
    return sum_all(&values[start..=end]);
}

// =============================================================================
// Model properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every query matches a linear scan, at every step of a random
    /// interleaving of queries and updates.
    #[test]
    fn matches_brute_force(
        values in arbitrary_values(),
        ops in prop::collection::vec(arbitrary_tree_op(), 0..60),
    ) {
        let mut model = values.clone();
        let mut boxed = SegmentTree::new(&values);
        let mut flat = FlatSegmentTree::new(&values);

        for op in &ops {
            match op {
                TreeOp::Query { a_pct, b_pct } => {
                    let a = index_at(*a_pct, model.len());
                    let b = index_at(*b_pct, model.len());
                    let (start, end) = (a.min(b), a.max(b));
                    let expected = brute_force(&model, start, end);
                    prop_assert_eq!(boxed.query(start, end), Ok(expected));
                    prop_assert_eq!(flat.query(start, end), Ok(expected));
                }
                TreeOp::Update { pos_pct, value } => {
                    if model.is_empty() {
                        prop_assert!(boxed.update(0, *value).is_err());
                        prop_assert!(flat.update(0, *value).is_err());
                        continue;
                    }
                    let index = index_at(*pos_pct, model.len());
                    model[index] = *value;
                    prop_assert!(boxed.update(index, *value).is_ok());
                    prop_assert!(flat.update(index, *value).is_ok());
                }
            }
            prop_assert_eq!(boxed.total(), sum_all(&model));
        }

        prop_assert_eq!(boxed.to_vec(), model.clone());
        for (i, value) in model.iter().enumerate() {
            prop_assert_eq!(flat.get(i), Some(*value));
        }
    }

    /// Full-range query equals the sum of all current values.
    #[test]
    fn full_range_is_total(
        values in arbitrary_values(),
        updates in prop::collection::vec((0.0..1.0f64, -1000i64..1000), 0..30),
    ) {
        let mut tree = SegmentTree::new(&values);
        let mut model = values.clone();

        for (pct, value) in updates {
            if model.is_empty() {
                break;
            }
            let index = index_at(pct, model.len());
            model[index] = value;
            tree.update(index, value).unwrap();
        }

        let last = model.len().saturating_sub(1);
        prop_assert_eq!(tree.query(0, last), Ok(sum_all(&model)));
        prop_assert_eq!(tree.query_range(..), Ok(sum_all(&model)));
        prop_assert_eq!(RangeSum::total(&tree), tree.total());
    }
}

// =============================================================================
// Update properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Updating twice is the same as updating once.
    #[test]
    fn update_is_idempotent(
        values in prop::collection::vec(-1000i64..1000, 1..=100),
        pos_pct in 0.0..1.0f64,
        value in -1000i64..1000,
    ) {
        let index = index_at(pos_pct, values.len());

        let mut once = SegmentTree::new(&values);
        once.update(index, value).unwrap();

        let mut twice = SegmentTree::new(&values);
        twice.update(index, value).unwrap();
        twice.update(index, value).unwrap();

        prop_assert_eq!(once.to_vec(), twice.to_vec());
        prop_assert_eq!(once.total(), twice.total());
    }

    /// A range that doesn't contain the updated index keeps its sum.
    #[test]
    fn update_is_local(
        values in prop::collection::vec(-1000i64..1000, 2..=100),
        pos_pct in 0.0..1.0f64,
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
        value in -1000i64..1000,
    ) {
        let index = index_at(pos_pct, values.len());
        let a = index_at(a_pct, values.len());
        let b = index_at(b_pct, values.len());
        let (start, end) = (a.min(b), a.max(b));

        let mut tree = SegmentTree::new(&values);
        let before = tree.query(start, end);
        tree.update(index, value).unwrap();

        if index < start || index > end {
            prop_assert_eq!(tree.query(start, end), before);
        } else {
            prop_assert_eq!(tree.query(start, end), Ok(brute_force(&tree.to_vec(), start, end)));
        }
    }
}

// =============================================================================
// Cover properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The cover tiles the query exactly, left to right, with at most two
    /// nodes per level, and its sums add up to the query.
    #[test]
    fn cover_tiles_query(
        values in prop::collection::vec(-1000i64..1000, 1..=100),
        a_pct in 0.0..1.0f64,
        b_pct in 0.0..1.0f64,
    ) {
        let tree = SegmentTree::new(&values);
        let a = index_at(a_pct, values.len());
        let b = index_at(b_pct, values.len());
        let (start, end) = (a.min(b), a.max(b));

        let cover = tree.cover(start, end).unwrap();
        prop_assert!(!cover.is_empty());
        prop_assert!(cover.len() <= 2 * tree.depth().max(1));

        let mut next = start;
        let mut sum = 0i64;
        for span in &cover {
            prop_assert_eq!(span.start, next);
            next = span.end + 1;
            sum += tree.query(span.start, span.end).unwrap();
        }
        prop_assert_eq!(next, end + 1);
        prop_assert_eq!(Ok(sum), tree.query(start, end));
        prop_assert_eq!(cover.iter().map(|span| span.len()).sum::<usize>(), end - start + 1);
    }

    /// Anything past the end is rejected, however far past.
    #[test]
    fn out_of_bounds_is_rejected(
        values in prop::collection::vec(-1000i64..1000, 1..=100),
        past in 0usize..1000,
    ) {
        let tree = SegmentTree::new(&values);
        let flat = FlatSegmentTree::new(&values);
        let beyond = values.len() + past;

        prop_assert!(tree.query(0, beyond).is_err());
        prop_assert!(tree.query(beyond, beyond).is_err());
        prop_assert!(flat.query(beyond, beyond).is_err());
        prop_assert_eq!(tree.get(beyond), None);
    }
}
