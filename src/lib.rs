// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Rangesum - range-sum trees over fixed-length integer sequences.
//!
//! A tree is built once from a sequence and then answers two operations in
//! O(log n): the sum of any contiguous index range, and setting the value
//! at a single index.
//!
//! # Quick Start
//!
//! ```
//! use rangesum::tree::SegmentTree;
//!
//! let mut tree = SegmentTree::new(&[2, 8, 6, 7, -2, -8, 4, 9]);
//! assert_eq!(tree.query(1, 3), Ok(8 + 6 + 7));
//!
//! tree.update(2, 10).unwrap();
//! assert_eq!(tree.query(1, 3), Ok(8 + 10 + 7));
//! ```
//!
//! # Layouts
//!
//! | Type | Storage | Notes |
//! |------|---------|-------|
//! | `tree::SegmentTree` | Boxed nodes, each owning its children | Spans, covers, iteration |
//! | `flat::FlatSegmentTree` | One `Vec`, children at `2k+1` / `2k+2` | No per-node allocation |
//!
//! Both implement `range_sum::RangeSum`, and both reject out-of-bounds or
//! inverted ranges with a `error::RangeError` instead of clamping them.

pub mod aggregate;
pub mod error;
pub mod flat;
pub mod range_sum;
pub mod tree;

pub use aggregate::Aggregate;
pub use error::RangeError;
pub use range_sum::RangeSum;
pub use tree::SegmentTree;
