//! Deferred range extraction over any [`IntoIterator`] source.
//!
//! The operators here only record the source and the requested [`Range`]; the
//! source is iterated when the resulting [`Slice`] is itself iterated, and each
//! iteration re-runs the whole pass against the source as it is at that time.
//!
//! ```
//! use seqops::{Index, Range, SequenceExt};
//!
//! let source: Vec<u32> = (1..=10).collect();
//!
//! let middle = source.iter().take_range(Range::new(Index::from_start(2), Index::from_end(1)));
//! assert!(middle.into_iter().copied().eq(3..=9));
//!
//! let last = (&source).take_last(3);
//! assert_eq!(last.into_iter().copied().collect::<Vec<_>>(), [8, 9, 10]);
//!
//! // An owned source can be re-iterated through a borrowed slice.
//! let head = source.skip_last(3);
//! assert_eq!(head.iter().count(), 7);
//! assert_eq!(head.iter().last(), Some(&7));
//! ```

use seqops_ranges::{Index, Range};

use crate::window::WindowIter;

/// A lazily evaluated range of a source sequence.
///
/// Created by [`SequenceExt::take_range`], [`SequenceExt::take_last`] and
/// [`SequenceExt::skip_last`]. Consuming a `Slice` consumes the source; a
/// borrowed `Slice` can be iterated any number of times when the source can be
/// iterated by reference.
#[derive(Debug, Clone)]
pub struct Slice<S> {
    source: S,
    range: Range,
}

impl<S> Slice<S> {
    pub fn new(source: S, range: Range) -> Self {
        Slice { source, range }
    }

    /// The range of the source this slice selects.
    pub fn range(&self) -> Range {
        self.range
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Iterates the selected elements of a borrowed source.
    ///
    /// Every call starts a fresh pass over the source.
    pub fn iter<'a>(&'a self) -> WindowIter<<&'a S as IntoIterator>::IntoIter>
    where
        &'a S: IntoIterator,
    {
        WindowIter::new((&self.source).into_iter(), self.range)
    }
}

impl<S: IntoIterator> IntoIterator for Slice<S> {
    type Item = S::Item;
    type IntoIter = WindowIter<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        WindowIter::new(self.source.into_iter(), self.range)
    }
}

impl<'a, S> IntoIterator for &'a Slice<S>
where
    &'a S: IntoIterator,
{
    type Item = <&'a S as IntoIterator>::Item;
    type IntoIter = WindowIter<<&'a S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Range extraction operators for every [`IntoIterator`].
pub trait SequenceExt: IntoIterator + Sized {
    /// Selects the elements addressed by `range`, whose bounds may be measured
    /// from the end of the sequence.
    fn take_range(self, range: impl Into<Range>) -> Slice<Self> {
        Slice::new(self, range.into())
    }

    /// Selects the last `count` elements, or all of them if there are fewer.
    ///
    /// A `count` of zero or less selects nothing.
    fn take_last(self, count: isize) -> Slice<Self> {
        let range = if count <= 0 {
            Range::new(Index::end(), Index::end())
        } else {
            Range::start_at(Index::from_end(count.unsigned_abs()))
        };
        Slice::new(self, range)
    }

    /// Selects everything except the last `count` elements.
    ///
    /// A `count` of zero or less selects the whole sequence.
    fn skip_last(self, count: isize) -> Slice<Self> {
        let range = if count <= 0 {
            Range::all()
        } else {
            Range::end_at(Index::from_end(count.unsigned_abs()))
        };
        Slice::new(self, range)
    }
}

impl<S: IntoIterator> SequenceExt for S {}
