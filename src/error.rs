// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Errors returned when a call breaks a tree's index contract.

use thiserror::Error;

/// Error returned when an index or range does not fit the tree.
///
/// These are caller mistakes, reported immediately. A tree never clamps an
/// index or swaps the ends of a range to make a call succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// An index (or the end of a range) lies past the last element.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The start of a range lies after its end.
    #[error("range start {start} is after range end {end}")]
    InvalidRange { start: usize, end: usize },
    /// The tree holds no elements, so no index is valid.
    #[error("tree is empty")]
    EmptyTree,
}

pub type Result<T> = std::result::Result<T, RangeError>;

/// Validate an inclusive range `[start, end]` against a non-zero length.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end {
        return Err(RangeError::InvalidRange { start, end });
    }
    if end >= len {
        return Err(RangeError::IndexOutOfBounds { index: end, len });
    }
    return Ok(());
}

/// Validate a single element index against a length.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if len == 0 {
        return Err(RangeError::EmptyTree);
    }
    if index >= len {
        return Err(RangeError::IndexOutOfBounds { index, len });
    }
    return Ok(());
}
