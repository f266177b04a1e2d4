// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Range-sum tree with owned, boxed nodes.
//!
//! Each node covers an inclusive span `[start, end]` of the input and stores
//! the sum of the current values in that span. A node over more than one
//! element owns exactly two children, split at
//! `mid = start + (end - start) / 2`, so the left child gets the extra
//! element when the length is odd.
//!
//! The shape is fixed at construction. Updates only rewrite the sums on the
//! path from the root to one leaf.
//!
//! - build: O(n)
//! - query: O(log n), independent of the range width
//! - update: O(log n)

use std::fmt;
use std::ops::Bound;
use std::ops::RangeBounds;

use log::debug;
use log::trace;
use smallvec::SmallVec;

use crate::aggregate::Aggregate;
use crate::error::RangeError;
use crate::error::Result;
use crate::error::check_index;
use crate::error::check_range;
use crate::range_sum::RangeSum;

/// An inclusive span of element indices, `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        return Span { start, end };
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        return self.end - self.start + 1;
    }

    pub fn is_leaf(&self) -> bool {
        return self.start == self.end;
    }

    /// Last index of the left half when this span is split in two.
    pub fn mid(&self) -> usize {
        return self.start + (self.end - self.start) / 2;
    }

    pub fn contains(&self, index: usize) -> bool {
        return self.start <= index && index <= self.end;
    }
}

/// Canonical decomposition of a query, see [`SegmentTree::cover`].
pub type Cover = SmallVec<[Span; 32]>;

#[derive(Clone)]
struct Node<T> {
    span: Span,
    sum: T,
    /// `None` for leaves, otherwise `(left, right)`.
    children: Option<Box<(Node<T>, Node<T>)>>,
}

impl<T: Aggregate> Node<T> {
    fn build(values: &[T], start: usize, end: usize) -> Self {
        let span = Span::new(start, end);
        if span.is_leaf() {
            return Node { span, sum: values[start], children: None };
        }

        let mid = span.mid();
        let left = Node::build(values, start, mid);
        let right = Node::build(values, mid + 1, end);
        return Node {
            span,
            sum: left.sum.combine(&right.sum),
            children: Some(Box::new((left, right))),
        };
    }

    fn query(&self, start: usize, end: usize) -> T {
        // No overlap.
        if self.span.end < start || self.span.start > end {
            return T::default();
        }
        // Total overlap: the stored sum answers for the whole subtree.
        if start <= self.span.start && self.span.end <= end {
            return self.sum;
        }
        // Partial overlap. A leaf is always disjoint or covered, so this is
        // an internal node.
        let Some(children) = &self.children else {
            return self.sum;
        };
        let (left, right) = &**children;
        return left.query(start, end).combine(&right.query(start, end));
    }

    fn update(&mut self, index: usize, value: T) {
        if !self.span.contains(index) {
            return;
        }
        let Some(children) = &mut self.children else {
            self.sum = value;
            return;
        };

        let (left, right) = &mut **children;
        if index <= self.span.mid() {
            left.update(index, value);
        } else {
            right.update(index, value);
        }
        self.sum = left.sum.combine(&right.sum);
    }

    fn get(&self, index: usize) -> T {
        let mut node = self;
        while let Some(children) = &node.children {
            node = if index <= node.span.mid() { &children.0 } else { &children.1 };
        }
        return node.sum;
    }

    fn cover(&self, start: usize, end: usize, out: &mut Cover) {
        if self.span.end < start || self.span.start > end {
            return;
        }
        if start <= self.span.start && self.span.end <= end {
            out.push(self.span);
            return;
        }
        if let Some(children) = &self.children {
            children.0.cover(start, end, out);
            children.1.cover(start, end, out);
        }
    }

    fn depth(&self) -> usize {
        return match &self.children {
            None => 0,
            Some(children) => 1 + children.0.depth().max(children.1.depth()),
        };
    }

    /// Checks the subtree rooted here and returns the index the next leaf
    /// should start at.
    #[cfg(debug_assertions)]
    fn check(&self, next_leaf: usize) -> usize {
        assert_eq!(
            self.span.start, next_leaf,
            "INVARIANT VIOLATED: node {:?} starts after a gap or overlap at {}",
            self.span, next_leaf
        );
        let Some(children) = &self.children else {
            assert!(self.span.is_leaf(), "INVARIANT VIOLATED: childless node {:?}", self.span);
            return self.span.end + 1;
        };

        let (left, right) = &**children;
        assert_eq!(left.span, Span::new(self.span.start, self.span.mid()));
        assert_eq!(right.span, Span::new(self.span.mid() + 1, self.span.end));
        assert_eq!(
            self.sum,
            left.sum.combine(&right.sum),
            "INVARIANT VIOLATED: node {:?} sum != left + right",
            self.span
        );
        let after_left = left.check(next_leaf);
        return right.check(after_left);
    }
}

/// A fixed-length sequence of integers with O(log n) range sums and point
/// updates.
///
/// ```
/// use rangesum::tree::SegmentTree;
///
/// let mut tree = SegmentTree::new(&[2, 8, 6, 7, -2, -8, 4, 9]);
/// assert_eq!(tree.query(1, 3), Ok(21));
///
/// tree.update(2, 10).unwrap();
/// assert_eq!(tree.query(1, 3), Ok(25));
/// assert_eq!(tree.query_range(..), Ok(30));
/// ```
#[derive(Clone)]
pub struct SegmentTree<T: Aggregate = i64> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T: Aggregate> SegmentTree<T> {
    /// Build a tree whose leaves are `values`, in order.
    ///
    /// An empty slice gives an empty tree: every query on it sums to zero
    /// and every update is rejected.
    pub fn new(values: &[T]) -> Self {
        let root = match values.len() {
            0 => None,
            len => Some(Node::build(values, 0, len - 1)),
        };
        let tree = SegmentTree { root, len: values.len() };
        debug!("built range-sum tree: len={} depth={}", tree.len, tree.depth());
        tree.check_invariants();
        return tree;
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Sum of all elements, zero for the empty tree.
    pub fn total(&self) -> T {
        return self.root.as_ref().map_or(T::default(), |root| root.sum);
    }

    /// Height of the tree: 0 for a single leaf (and for the empty tree).
    pub fn depth(&self) -> usize {
        return self.root.as_ref().map_or(0, Node::depth);
    }

    /// Sum of the elements in the inclusive range `[start, end]`.
    ///
    /// An empty tree answers zero for any range. Otherwise a range with
    /// `start > end` or `end >= len` is rejected rather than clamped.
    pub fn query(&self, start: usize, end: usize) -> Result<T> {
        let Some(root) = &self.root else {
            return Ok(T::default());
        };
        if let Err(err) = check_range(start, end, self.len) {
            debug!("rejected query [{}, {}]: {}", start, end, err);
            return Err(err);
        }
        return Ok(root.query(start, end));
    }

    /// Sum over a Rust range expression, e.g. `1..=3`, `..4`, or `..`.
    ///
    /// A half-open range with equal ends (`a..a`, `a <= len`) is empty and
    /// sums to zero. Inverted ranges are reported with their inclusive end.
    pub fn query_range(&self, range: impl RangeBounds<usize>) -> Result<T> {
        if self.root.is_none() {
            return Ok(T::default());
        }

        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1).ok_or(RangeError::IndexOutOfBounds {
                index: start,
                len: self.len,
            })?,
            Bound::Unbounded => 0,
        };
        let end_exclusive = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1).ok_or(RangeError::IndexOutOfBounds {
                index: end,
                len: self.len,
            })?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        if end_exclusive > self.len {
            let err = RangeError::IndexOutOfBounds { index: end_exclusive - 1, len: self.len };
            debug!("rejected query over {}..{}: {}", start, end_exclusive, err);
            return Err(err);
        }
        if start > self.len {
            let err = RangeError::IndexOutOfBounds { index: start, len: self.len };
            debug!("rejected query over {}..{}: {}", start, end_exclusive, err);
            return Err(err);
        }
        if start == end_exclusive {
            return Ok(T::default());
        }
        if start > end_exclusive {
            let err = RangeError::InvalidRange { start, end: end_exclusive.saturating_sub(1) };
            debug!("rejected query over {}..{}: {}", start, end_exclusive, err);
            return Err(err);
        }
        return self.query(start, end_exclusive - 1);
    }

    /// Set the element at `index` to `value`.
    ///
    /// Only the sums on the path from the root to that leaf are rewritten.
    /// Setting the same value twice leaves the tree as setting it once.
    ///
    /// O(log n) in release builds. Debug builds also walk the whole tree
    /// with [`SegmentTree::check_invariants`], which makes each update O(n).
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        if let Err(err) = check_index(index, self.len) {
            debug!("rejected update at {}: {}", index, err);
            return Err(err);
        }
        let Some(root) = &mut self.root else {
            return Err(RangeError::EmptyTree);
        };

        trace!("update index={} value={:?}", index, value);
        root.update(index, value);
        self.check_invariants();
        return Ok(());
    }

    /// Current value at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        return self.root.as_ref().map(|root| root.get(index));
    }

    /// The nodes a query over `[start, end]` takes whole sums from, left to
    /// right.
    ///
    /// The spans tile the range exactly, and there are at most two per level
    /// of the tree. Empty for the empty tree.
    pub fn cover(&self, start: usize, end: usize) -> Result<Cover> {
        let mut out = Cover::new();
        let Some(root) = &self.root else {
            return Ok(out);
        };
        check_range(start, end, self.len)?;
        root.cover(start, end, &mut out);
        return Ok(out);
    }

    /// Current values in index order.
    pub fn iter(&self) -> Leaves<'_, T> {
        let mut stack = SmallVec::new();
        if let Some(root) = &self.root {
            stack.push(root);
        }
        return Leaves { stack };
    }

    pub fn to_vec(&self) -> Vec<T> {
        return self.iter().collect();
    }

    // --- Invariant checking ---

    /// Walks the whole tree asserting that every internal sum equals the
    /// sum of its children and that the leaves tile `[0, len - 1]` in order.
    ///
    /// Compiled out of release builds.
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self) {
        let covered = self.root.as_ref().map_or(0, |root| root.check(0));
        assert_eq!(
            covered, self.len,
            "INVARIANT VIOLATED: leaves cover {} elements, len()={}",
            covered, self.len
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub fn check_invariants(&self) {}
}

/// Iterator over the current values of a [`SegmentTree`].
pub struct Leaves<'a, T> {
    stack: SmallVec<[&'a Node<T>; 32]>,
}

impl<'a, T: Aggregate> Iterator for Leaves<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(node) = self.stack.pop() {
            match &node.children {
                None => return Some(node.sum),
                Some(children) => {
                    self.stack.push(&children.1);
                    self.stack.push(&children.0);
                }
            }
        }
        return None;
    }
}

impl<T: Aggregate> Default for SegmentTree<T> {
    fn default() -> Self {
        return SegmentTree { root: None, len: 0 };
    }
}

impl<T: Aggregate> From<Vec<T>> for SegmentTree<T> {
    fn from(values: Vec<T>) -> Self {
        return SegmentTree::new(&values);
    }
}

impl<T: Aggregate> FromIterator<T> for SegmentTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        return SegmentTree::new(&values);
    }
}

impl<T: Aggregate> fmt::Debug for SegmentTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SegmentTree ")?;
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: Aggregate> RangeSum<T> for SegmentTree<T> {
    fn build(values: &[T]) -> Self {
        return SegmentTree::new(values);
    }

    fn len(&self) -> usize {
        return self.len;
    }

    fn query(&self, start: usize, end: usize) -> Result<T> {
        return SegmentTree::query(self, start, end);
    }

    fn update(&mut self, index: usize, value: T) -> Result<()> {
        return SegmentTree::update(self, index, value);
    }

    fn get(&self, index: usize) -> Option<T> {
        return SegmentTree::get(self, index);
    }

    fn total(&self) -> T {
        return SegmentTree::total(self);
    }
}
