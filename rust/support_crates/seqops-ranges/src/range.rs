//! A pair of symbolic bounds describing a contiguous slice of a sequence.

use std::fmt;
use std::ops::{RangeFrom, RangeFull, RangeTo};

use seqops_common::{Result, error::Error};

use crate::index::Index;

/// A half-open interval `[start, end)` over a sequence, where either bound may
/// be measured from the end.
///
/// A `Range` is meaningful only relative to a sequence; see
/// [`resolve`](crate::resolve::resolve) for turning it into concrete offsets.
///
/// Conversions exist from the standard range syntax over `usize`, all of which
/// produce start-relative bounds (open ends map to `0` and `^0`):
///
/// ```
/// use seqops_ranges::{Index, Range};
///
/// assert_eq!(Range::from(2..5), Range::new(Index::from_start(2), Index::from_start(5)));
/// assert_eq!(Range::from(3..), Range::new(Index::from_start(3), Index::end()));
/// assert_eq!(Range::from(..), Range::all());
/// assert_eq!(Range::new(Index::from_start(2), Index::from_end(1)).to_string(), "2..^1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Index,
    pub end: Index,
}

impl Range {
    pub const fn new(start: Index, end: Index) -> Range {
        Range { start, end }
    }

    /// The whole sequence (`0..^0`).
    pub const fn all() -> Range {
        Range::new(Index::start(), Index::end())
    }

    /// Everything from `start` to the end of the sequence.
    pub const fn start_at(start: Index) -> Range {
        Range::new(start, Index::end())
    }

    /// Everything from the beginning of the sequence up to `end`.
    pub const fn end_at(end: Index) -> Range {
        Range::new(Index::start(), end)
    }

    /// Returns `true` if at least one bound is measured from the end, i.e. the
    /// range cannot be resolved without knowing the sequence length.
    #[inline]
    pub fn is_end_relative(&self) -> bool {
        self.start.is_from_end() || self.end.is_from_end()
    }

    /// Computes the strict `(offset, length)` of this range within a sequence
    /// of `len` elements.
    ///
    /// Unlike resolution, which clamps out-of-bounds offsets to the sequence,
    /// this fails with an invalid-argument error when either bound falls
    /// outside `0..=len` or the end precedes the start.
    pub fn offset_and_length(&self, len: usize) -> Result<(usize, usize)> {
        let out_of_bounds =
            || Error::invalid_arg("range", format!("{self} is out of bounds for length {len}"));
        let start = self
            .start
            .offset(len)
            .filter(|&start| start <= len)
            .ok_or_else(out_of_bounds)?;
        let end = self
            .end
            .offset(len)
            .filter(|&end| end <= len && end >= start)
            .ok_or_else(out_of_bounds)?;
        Ok((start, end - start))
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::all()
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(range: std::ops::Range<usize>) -> Self {
        Range::new(Index::from_start(range.start), Index::from_start(range.end))
    }
}

impl From<RangeFrom<usize>> for Range {
    fn from(range: RangeFrom<usize>) -> Self {
        Range::start_at(Index::from_start(range.start))
    }
}

impl From<RangeTo<usize>> for Range {
    fn from(range: RangeTo<usize>) -> Self {
        Range::end_at(Index::from_start(range.end))
    }
}

impl From<RangeFull> for Range {
    fn from(_: RangeFull) -> Self {
        Range::all()
    }
}

impl From<(Index, Index)> for Range {
    fn from((start, end): (Index, Index)) -> Self {
        Range::new(start, end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
