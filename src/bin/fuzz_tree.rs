//! AFL Fuzz harness for the range-sum trees
//!
//! This harness checks both tree layouts against a plain `Vec` model:
//! 1. Every query matches a linear-scan sum over the model
//! 2. Every update is visible to later queries and leaves other ranges alone
//! 3. Out-of-bounds and inverted ranges are rejected, never answered
//!
//! Model: the first bytes pick a sequence, the rest is a stream of ops.

use afl::fuzz;
use rangesum::RangeSum;
use rangesum::aggregate::sum_all;
use rangesum::flat::FlatSegmentTree;
use rangesum::tree::SegmentTree;

const MAX_LEN: usize = 100;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Sum over a range picked as two fractions of the length
    Query { a_frac: u8, b_frac: u8 },
    /// Set one element
    Update { index_frac: u8, value: i8 },
    /// Query a range that starts at or past the end
    OutOfBounds { past: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 3;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => Some((FuzzOp::Query { a_frac: rest[0], b_frac: rest[1] }, &rest[2..])),
            1 if rest.len() >= 2 => Some((
                FuzzOp::Update { index_frac: rest[0], value: rest[1] as i8 },
                &rest[2..],
            )),
            2 if !rest.is_empty() => Some((FuzzOp::OutOfBounds { past: rest[0] }, &rest[1..])),
            _ => None,
        }
    }
}

fn scale(frac: u8, len: usize) -> usize {
    return ((frac as usize) * len / 256).min(len.saturating_sub(1));
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&len_byte, rest)) = data.split_first() else {
            return;
        };
        let len = (len_byte as usize % (MAX_LEN + 1)).min(rest.len());
        let (initial, mut remaining) = rest.split_at(len);

        let mut model: Vec<i64> = initial.iter().map(|b| *b as i8 as i64).collect();
        let mut boxed = SegmentTree::new(&model);
        let mut flat = FlatSegmentTree::new(&model);

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Query { a_frac, b_frac } => {
                    let a = scale(a_frac, model.len());
                    let b = scale(b_frac, model.len());
                    let (start, end) = (a.min(b), a.max(b));
                    let expected = if model.is_empty() { 0 } else { sum_all(&model[start..=end]) };

                    assert_eq!(boxed.query(start, end), Ok(expected), "boxed [{}, {}]", start, end);
                    assert_eq!(flat.query(start, end), Ok(expected), "flat [{}, {}]", start, end);
                    if start < end {
                        assert!(boxed.query(end, start).is_err(), "inverted range accepted");
                    }
                }

                FuzzOp::Update { index_frac, value } => {
                    if model.is_empty() {
                        assert!(boxed.update(0, value as i64).is_err());
                        assert!(flat.update(0, value as i64).is_err());
                        continue;
                    }
                    let index = scale(index_frac, model.len());
                    model[index] = value as i64;
                    boxed.update(index, value as i64).expect("in-bounds update rejected");
                    flat.update(index, value as i64).expect("in-bounds update rejected");
                    assert_eq!(boxed.get(index), Some(value as i64));
                }

                FuzzOp::OutOfBounds { past } => {
                    let start = model.len() + past as usize;
                    if model.is_empty() {
                        assert_eq!(boxed.query(start, start), Ok(0));
                    } else {
                        assert!(boxed.query(start, start).is_err(), "out-of-bounds accepted");
                        assert!(flat.query(0, start).is_err(), "out-of-bounds accepted");
                    }
                }
            }
        }

        // Full-range sums and leaf order must match the model
        let total = sum_all(&model);
        assert_eq!(boxed.total(), total, "boxed total");
        assert_eq!(RangeSum::total(&flat), total, "flat total");
        assert_eq!(boxed.to_vec(), model, "leaf order");
        boxed.check_invariants();
    });
}
