//! Resolution of symbolic [`Range`] values into concrete forward offsets.
//!
//! A range can often be decided without knowing the sequence length: a purely
//! start-relative range is already concrete, and some end-relative shapes are
//! empty for every possible length. All other shapes have to wait until the
//! length becomes known, which for a single-pass source means until it has
//! been fully consumed.

use crate::range::Range;

/// Concrete half-open offsets `[start, end)` into a sequence.
///
/// When `start >= end` the bounds describe an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedBounds {
    pub start: usize,
    pub end: usize,
}

impl ResolvedBounds {
    pub const fn new(start: usize, end: usize) -> ResolvedBounds {
        ResolvedBounds { start, end }
    }

    /// Resolves `range` against a sequence of exactly `len` elements.
    ///
    /// The start offset is clamped at `0` and the end offset at `len`, so the
    /// result always lies within the sequence.
    pub fn against(range: &Range, len: usize) -> ResolvedBounds {
        ResolvedBounds {
            start: resolve_start(range.start.is_from_end(), range.start.value(), len),
            end: resolve_end(range.end.is_from_end(), range.end.value(), len),
        }
    }

    /// Number of elements covered by the bounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end.max(self.start)
    }
}

/// Outcome of resolving a range without (or with) a known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The range selects nothing, whatever the length.
    Empty,
    /// The range reduces to these concrete, non-empty bounds.
    Bounds(ResolvedBounds),
    /// The range references the end of the sequence and the length is not known.
    Deferred,
}

/// Resolves `range`, optionally against a known sequence length.
///
/// Shapes that can be decided without a length are decided first:
/// - `a..b` with both bounds from the start is concrete (empty if `a >= b`);
/// - `^0..x` is always empty;
/// - `^a..^b` with `b >= a` is always empty.
///
/// Anything else yields [`Resolution::Deferred`] unless `known_len` is given.
pub fn resolve(range: &Range, known_len: Option<usize>) -> Resolution {
    let (start, end) = (range.start, range.end);
    if start.is_from_end() {
        if start.value() == 0 || (end.is_from_end() && end.value() >= start.value()) {
            return Resolution::Empty;
        }
    } else if !end.is_from_end() && known_len.is_none() {
        return bounds_or_empty(ResolvedBounds::new(start.value(), end.value()));
    }

    match known_len {
        Some(len) => bounds_or_empty(ResolvedBounds::against(range, len)),
        None => Resolution::Deferred,
    }
}

/// `max(0, from_end ? len - magnitude : magnitude)`
#[inline]
pub fn resolve_start(from_end: bool, magnitude: usize, len: usize) -> usize {
    if from_end {
        len.saturating_sub(magnitude)
    } else {
        magnitude
    }
}

/// `min(len, from_end ? len - magnitude : magnitude)`, never negative.
#[inline]
pub fn resolve_end(from_end: bool, magnitude: usize, len: usize) -> usize {
    if from_end {
        len.saturating_sub(magnitude)
    } else {
        magnitude.min(len)
    }
}

fn bounds_or_empty(bounds: ResolvedBounds) -> Resolution {
    if bounds.is_empty() {
        Resolution::Empty
    } else {
        Resolution::Bounds(bounds)
    }
}
