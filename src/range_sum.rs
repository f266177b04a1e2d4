// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! The `RangeSum` trait defines the interface shared by every tree layout.
//!
//! It exists so one conformance suite, one fuzz harness, and one benchmark
//! can run against both the boxed tree and the flat array tree.

use crate::aggregate::Aggregate;
use crate::error::Result;

/// A fixed-length sequence supporting range sums and point updates.
///
/// Implementors must keep every sum consistent with the current values:
/// after `update(i, v)` returns, `query(i, i) == Ok(v)` and every range
/// containing `i` reflects the change.
pub trait RangeSum<T: Aggregate> {
    /// Build from a sequence of values.
    fn build(values: &[T]) -> Self;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Check if there are no elements.
    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Sum of the elements in the inclusive range `[start, end]`.
    ///
    /// Returns zero on an empty tree. Otherwise the range must satisfy
    /// `start <= end < len`.
    fn query(&self, start: usize, end: usize) -> Result<T>;

    /// Set the element at `index` to `value`.
    fn update(&mut self, index: usize, value: T) -> Result<()>;

    /// Current value at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<T>;

    /// Sum of all elements.
    fn total(&self) -> T;
}
