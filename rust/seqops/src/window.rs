//! The sliding-window iterator behind `take_range`, `take_last` and `skip_last`.
//!
//! A range whose bounds reference the end of the sequence cannot be resolved
//! until the sequence length is known. For a single-pass source the length is
//! only known once the source is exhausted, so the iterator buffers just enough
//! trailing elements to produce the correct output at that point:
//!
//! - Both bounds from the start: skip, then yield a bounded number of elements.
//!   No buffering.
//! - Start from the end (`^n..x`): keep the last `n` elements in a FIFO window
//!   while consuming the whole source, then resolve both bounds against the
//!   measured length and drain the matching part of the window.
//! - Start from the start, end from the end (`m..^n`): skip `m` elements, then
//!   yield each element once `n` newer elements have been seen. The final `n`
//!   elements are never yielded.
//!
//! The source iterator is owned by the window iterator and dropped as soon as
//! it is no longer needed: on exhaustion, before draining a tail window, when
//! the requested element count has been produced, or when the consumer drops
//! the window iterator early.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use seqops_ranges::{Index, Range, Resolution, ResolvedBounds, resolve};

/// Iterator over the elements of a source selected by a [`Range`].
///
/// Created by iterating a [`Slice`](crate::slice::Slice), or directly via
/// [`WindowIter::new`].
pub struct WindowIter<I: Iterator> {
    /// The source, present until it is exhausted or no longer needed.
    source: Option<I>,
    /// Buffered elements whose fate depends on the not-yet-known length.
    buffer: VecDeque<I::Item>,
    phase: Phase,
}

/// Progress of a [`WindowIter`] through its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Skip `skip` elements, then yield at most `take` elements.
    Forward { skip: usize, take: usize },
    /// Retain the last `capacity` elements until the source is exhausted.
    FillTail { capacity: usize, end: Index },
    /// Yield the buffered elements front to back.
    DrainTail,
    /// Skip `skip` elements before entering [`Phase::Lag`].
    SkipHead { skip: usize, gap: usize },
    /// Yield every element once `gap` newer elements have been buffered.
    Lag { gap: usize },
    Done,
}

impl<I: Iterator> WindowIter<I> {
    /// Creates an iterator over the part of `source` addressed by `range`.
    ///
    /// No element is pulled from `source` here. When the source reports an
    /// exact size hint, the range is resolved against it right away and the
    /// elements are streamed without buffering; otherwise end-relative bounds
    /// are resolved once the source is exhausted.
    pub fn new(source: I, range: Range) -> Self {
        let (lower, upper) = source.size_hint();
        let known_len = (upper == Some(lower)).then_some(lower);

        let phase = match resolve(&range, known_len) {
            Resolution::Empty => Phase::Done,
            Resolution::Bounds(bounds) => {
                if range.is_end_relative() {
                    log::trace!(
                        "window {range}: resolved against exact length {lower} to {bounds:?}"
                    );
                }
                Phase::Forward {
                    skip: bounds.start,
                    take: bounds.len(),
                }
            }
            Resolution::Deferred if range.start.is_from_end() => Phase::FillTail {
                capacity: range.start.value(),
                end: range.end,
            },
            Resolution::Deferred => Phase::SkipHead {
                skip: range.start.value(),
                gap: range.end.value(),
            },
        };

        let source = (phase != Phase::Done).then_some(source);
        WindowIter {
            source,
            buffer: VecDeque::new(),
            phase,
        }
    }

    /// Returns `true` once the underlying source iterator has been released.
    pub fn is_source_released(&self) -> bool {
        self.source.is_none()
    }

    /// Releases the source and discards any buffered elements.
    fn finish(&mut self) {
        self.phase = Phase::Done;
        self.source = None;
        self.buffer.clear();
    }

    /// Consumes the whole source into a FIFO window of at most `capacity`
    /// elements, then keeps only the part selected by the resolved bounds.
    fn fill_tail(&mut self, capacity: usize, end: Index) {
        let mut count = 0usize;
        if let Some(source) = self.source.take() {
            for item in source {
                if self.buffer.len() == capacity {
                    self.buffer.pop_front();
                }
                self.buffer.push_back(item);
                count = increment_count(count);
            }
        }

        // The window holds the elements at offsets `count - len..count`, and
        // `count - len` is exactly the resolved start.
        let bounds = ResolvedBounds::against(&Range::new(Index::from_end(capacity), end), count);
        debug_assert_eq!(bounds.start, count - self.buffer.len());
        log::trace!(
            "window ^{capacity}..{end}: source exhausted after {count} elements, yielding {}",
            bounds.len()
        );

        self.buffer.truncate(bounds.len());
        self.phase = Phase::DrainTail;
    }
}

#[inline]
fn increment_count(count: usize) -> usize {
    count.checked_add(1).unwrap_or_else(|| {
        panic!(
            "Arithmetic overflow: source yields more than {} elements",
            usize::MAX
        )
    })
}

impl<I: Iterator> Iterator for WindowIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Forward { skip, take } => {
                    let source = self.source.as_mut()?;
                    let item = if skip > 0 {
                        source.nth(skip)
                    } else {
                        source.next()
                    };
                    let Some(item) = item else {
                        self.finish();
                        return None;
                    };
                    if take <= 1 {
                        self.finish();
                    } else {
                        self.phase = Phase::Forward {
                            skip: 0,
                            take: take - 1,
                        };
                    }
                    return Some(item);
                }
                Phase::FillTail { capacity, end } => self.fill_tail(capacity, end),
                Phase::DrainTail => {
                    let item = self.buffer.pop_front();
                    if item.is_none() {
                        self.finish();
                    }
                    return item;
                }
                Phase::SkipHead { skip, gap } => {
                    let source = self.source.as_mut()?;
                    if skip > 0 && source.nth(skip - 1).is_none() {
                        self.finish();
                        return None;
                    }
                    self.phase = Phase::Lag { gap };
                }
                Phase::Lag { gap } => {
                    let source = self.source.as_mut()?;
                    loop {
                        match source.next() {
                            Some(item) => {
                                self.buffer.push_back(item);
                                if self.buffer.len() > gap {
                                    return self.buffer.pop_front();
                                }
                            }
                            None => {
                                self.finish();
                                return None;
                            }
                        }
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self
            .source
            .as_ref()
            .map_or((0, Some(0)), |source| source.size_hint());
        let buffered = self.buffer.len();
        match self.phase {
            Phase::Done => (0, Some(0)),
            Phase::DrainTail => (buffered, Some(buffered)),
            Phase::Forward { skip, take } => (
                lower.saturating_sub(skip).min(take),
                Some(upper.map_or(take, |upper| upper.saturating_sub(skip).min(take))),
            ),
            Phase::FillTail { capacity, .. } => (0, upper.map(|upper| upper.min(capacity))),
            Phase::SkipHead { skip, gap } => {
                let excluded = skip.saturating_add(gap);
                (
                    lower.saturating_sub(excluded),
                    upper.map(|upper| upper.saturating_sub(excluded)),
                )
            }
            Phase::Lag { gap } => (
                lower.saturating_add(buffered).saturating_sub(gap),
                upper
                    .and_then(|upper| upper.checked_add(buffered))
                    .map(|upper| upper.saturating_sub(gap)),
            ),
        }
    }
}

impl<I: Iterator> FusedIterator for WindowIter<I> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use seqops_ranges::{Index, Range};
    use seqops_testkit::OneShot;

    use super::WindowIter;

    fn window(len: i32, range: Range) -> Vec<i32> {
        WindowIter::new(OneShot(1..=len), range).collect()
    }

    fn fast(len: i32, range: Range) -> Vec<i32> {
        WindowIter::new((1..=len).collect::<Vec<_>>().into_iter(), range).collect()
    }

    #[test]
    fn test_forward_range() {
        let r = Range::from(2..5);
        assert_eq!(window(10, r), vec![3, 4, 5]);
        assert_eq!(window(4, r), vec![3, 4]);
        assert_eq!(window(2, r), Vec::<i32>::new());
        assert_eq!(fast(10, r), vec![3, 4, 5]);
    }

    #[test]
    fn test_start_from_end() {
        let r = Range::new(Index::from_end(3), Index::end());
        assert_eq!(window(10, r), vec![8, 9, 10]);
        assert_eq!(window(2, r), vec![1, 2]);
        assert_eq!(window(0, r), Vec::<i32>::new());

        let r = Range::new(Index::from_end(5), Index::from_end(2));
        assert_eq!(window(10, r), vec![6, 7, 8]);
        assert_eq!(window(4, r), vec![1, 2]);
        assert_eq!(window(2, r), Vec::<i32>::new());

        let r = Range::new(Index::from_end(5), Index::from_start(7));
        assert_eq!(window(10, r), vec![6, 7]);
        assert_eq!(window(3, r), vec![1, 2, 3]);
        assert_eq!(fast(10, r), vec![6, 7]);
    }

    #[test]
    fn test_end_from_end() {
        let r = Range::new(Index::from_start(2), Index::from_end(1));
        assert_eq!(window(10, r), vec![3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(window(3, r), Vec::<i32>::new());
        assert_eq!(window(1, r), Vec::<i32>::new());
        assert_eq!(fast(10, r), vec![3, 4, 5, 6, 7, 8, 9]);

        assert_eq!(window(4, Range::all()), vec![1, 2, 3, 4]);
        assert_eq!(window(5, Range::end_at(Index::from_end(2))), vec![1, 2, 3]);
    }

    #[test]
    fn test_lag_yields_lazily() {
        let pulled = Cell::new(0);
        let source = (1..=10).inspect(|_| pulled.set(pulled.get() + 1));
        let mut it = WindowIter::new(OneShot(source), Range::end_at(Index::from_end(3)));
        assert_eq!(pulled.get(), 0);
        assert_eq!(it.next(), Some(1));
        // The first element can only be released once three newer ones are seen.
        assert_eq!(pulled.get(), 4);
        assert_eq!(it.next(), Some(2));
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_statically_empty_range_never_pulls() {
        let pulled = Cell::new(0);
        let source = (1..=10).inspect(|_| pulled.set(pulled.get() + 1));
        let mut it = WindowIter::new(OneShot(source), Range::new(Index::end(), Index::end()));
        assert!(it.is_source_released());
        assert_eq!(it.next(), None);
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn test_source_released_before_draining_tail() {
        let mut it = WindowIter::new(OneShot(1..=10), Range::start_at(Index::from_end(2)));
        assert!(!it.is_source_released());
        assert_eq!(it.next(), Some(9));
        assert!(it.is_source_released());
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_source_released_after_forward_take() {
        let mut it = WindowIter::new(OneShot(1..), Range::from(0..2));
        assert_eq!(it.next(), Some(1));
        assert!(!it.is_source_released());
        assert_eq!(it.next(), Some(2));
        assert!(it.is_source_released());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_size_hint() {
        let it = WindowIter::new(1..=10, Range::from(2..5));
        assert_eq!(it.size_hint(), (3, Some(3)));

        let it = WindowIter::new(1..=10, Range::new(Index::from_start(2), Index::from_end(1)));
        assert_eq!(it.size_hint(), (7, Some(7)));
        assert_eq!(it.count(), 7);

        let mut it = WindowIter::new(OneShot(1..=10), Range::start_at(Index::from_end(4)));
        assert_eq!(it.size_hint(), (0, None));
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow")]
    fn test_count_overflow_is_fatal() {
        super::increment_count(usize::MAX);
    }
}
