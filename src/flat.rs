// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Range-sum tree in a single flat array.
//!
//! Same shape and midpoint split as [`crate::tree::SegmentTree`], but nodes
//! live in one `Vec` and are addressed implicitly: node `k` has children
//! `2k + 1` and `2k + 2`, and the root is node 0. Spans are not stored; they
//! are recomputed on the way down from the root's `[0, len - 1]`.
//!
//! Trades a little slack in the array (up to `4n` slots) for no per-node
//! allocation and no pointer chasing.

use log::debug;
use log::trace;

use crate::aggregate::Aggregate;
use crate::error::Result;
use crate::error::check_index;
use crate::error::check_range;
use crate::range_sum::RangeSum;

#[inline]
fn left(node: usize) -> usize {
    2 * node + 1
}

#[inline]
fn right(node: usize) -> usize {
    2 * node + 2
}

#[derive(Clone, Debug)]
pub struct FlatSegmentTree<T: Aggregate = i64> {
    sums: Vec<T>,
    len: usize,
}

impl<T: Aggregate> FlatSegmentTree<T> {
    pub fn new(values: &[T]) -> Self {
        let len = values.len();
        let mut tree = FlatSegmentTree {
            sums: vec![T::default(); 4 * len],
            len,
        };
        if len > 0 {
            tree.build(values, 0, 0, len - 1);
        }
        debug!("built flat range-sum tree: len={} slots={}", len, tree.sums.len());
        tree.check_invariants();
        return tree;
    }

    fn build(&mut self, values: &[T], node: usize, start: usize, end: usize) {
        if start == end {
            self.sums[node] = values[start];
            return;
        }
        let mid = start + (end - start) / 2;
        self.build(values, left(node), start, mid);
        self.build(values, right(node), mid + 1, end);
        self.sums[node] = self.sums[left(node)].combine(&self.sums[right(node)]);
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    pub fn total(&self) -> T {
        return self.sums.first().copied().unwrap_or_default();
    }

    /// Sum of the elements in the inclusive range `[start, end]`.
    pub fn query(&self, start: usize, end: usize) -> Result<T> {
        if self.len == 0 {
            return Ok(T::default());
        }
        if let Err(err) = check_range(start, end, self.len) {
            debug!("rejected query [{}, {}]: {}", start, end, err);
            return Err(err);
        }
        return Ok(self.query_node(0, 0, self.len - 1, start, end));
    }

    fn query_node(&self, node: usize, lo: usize, hi: usize, start: usize, end: usize) -> T {
        if hi < start || lo > end {
            return T::default();
        }
        if start <= lo && hi <= end {
            return self.sums[node];
        }
        let mid = lo + (hi - lo) / 2;
        let l = self.query_node(left(node), lo, mid, start, end);
        let r = self.query_node(right(node), mid + 1, hi, start, end);
        return l.combine(&r);
    }

    /// Set the element at `index` to `value`.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        if let Err(err) = check_index(index, self.len) {
            debug!("rejected update at {}: {}", index, err);
            return Err(err);
        }
        trace!("update index={} value={:?}", index, value);
        self.update_node(0, 0, self.len - 1, index, value);
        self.check_invariants();
        return Ok(());
    }

    fn update_node(&mut self, node: usize, lo: usize, hi: usize, index: usize, value: T) {
        if lo == hi {
            self.sums[node] = value;
            return;
        }
        let mid = lo + (hi - lo) / 2;
        if index <= mid {
            self.update_node(left(node), lo, mid, index, value);
        } else {
            self.update_node(right(node), mid + 1, hi, index, value);
        }
        self.sums[node] = self.sums[left(node)].combine(&self.sums[right(node)]);
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let (mut node, mut lo, mut hi) = (0, 0, self.len - 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if index <= mid {
                node = left(node);
                hi = mid;
            } else {
                node = right(node);
                lo = mid + 1;
            }
        }
        return Some(self.sums[node]);
    }

    // --- Invariant checking ---

    /// Walks every node asserting that each internal slot equals the sum of
    /// slots `2k + 1` and `2k + 2`.
    ///
    /// Compiled out of release builds.
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self) {
        assert_eq!(
            self.sums.len(),
            4 * self.len,
            "INVARIANT VIOLATED: {} slots for len()={}",
            self.sums.len(),
            self.len
        );
        if self.len > 0 {
            self.check_node(0, 0, self.len - 1);
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub fn check_invariants(&self) {}

    #[cfg(debug_assertions)]
    fn check_node(&self, node: usize, lo: usize, hi: usize) {
        if lo == hi {
            return;
        }
        assert_eq!(
            self.sums[node],
            self.sums[left(node)].combine(&self.sums[right(node)]),
            "INVARIANT VIOLATED: slot {} over [{}, {}] sum != left + right",
            node,
            lo,
            hi
        );
        let mid = lo + (hi - lo) / 2;
        self.check_node(left(node), lo, mid);
        self.check_node(right(node), mid + 1, hi);
    }
}

impl<T: Aggregate> Default for FlatSegmentTree<T> {
    fn default() -> Self {
        return FlatSegmentTree { sums: Vec::new(), len: 0 };
    }
}

impl<T: Aggregate> RangeSum<T> for FlatSegmentTree<T> {
    fn build(values: &[T]) -> Self {
        return FlatSegmentTree::new(values);
    }

    fn len(&self) -> usize {
        return self.len;
    }

    fn query(&self, start: usize, end: usize) -> Result<T> {
        return FlatSegmentTree::query(self, start, end);
    }

    fn update(&mut self, index: usize, value: T) -> Result<()> {
        return FlatSegmentTree::update(self, index, value);
    }

    fn get(&self, index: usize) -> Option<T> {
        return FlatSegmentTree::get(self, index);
    }

    fn total(&self) -> T {
        return FlatSegmentTree::total(self);
    }
}
