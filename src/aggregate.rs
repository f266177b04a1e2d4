// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Values that can be summed by a range-sum tree.
//!
//! Every node of a tree stores the aggregate of the range it covers, and
//! a parent's aggregate is always the combination of its two children.
//! `Default` is the identity: an empty range (or a range with no overlap)
//! contributes `T::default()`.

use std::fmt::Debug;

/// A trait for values that can be aggregated in a range-sum tree.
pub trait Aggregate: Copy + Default + Debug + PartialEq {
    /// Combine two aggregates.
    ///
    /// Must be associative, with `Self::default()` as the identity.
    fn combine(&self, other: &Self) -> Self;
}

// Sums wrap on overflow, the same as two's-complement machine integers.
// An update can then never panic halfway up the tree and leave a parent
// out of sync with its children.
macro_rules! impl_sum_aggregate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Aggregate for $t {
                #[inline]
                fn combine(&self, other: &Self) -> Self {
                    return self.wrapping_add(*other);
                }
            }
        )*
    };
}

impl_sum_aggregate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Fold a sequence of values into a single aggregate.
///
/// This is the linear-scan reference the trees are checked against.
pub fn sum_all<'a, T: Aggregate + 'a>(values: impl IntoIterator<Item = &'a T>) -> T {
    return values
        .into_iter()
        .fold(T::default(), |acc, value| acc.combine(value));
}
