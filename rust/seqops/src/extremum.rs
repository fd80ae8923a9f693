//! Single-pass maximum selection.
//!
//! Every operator here folds its source once, front to back, and keeps the
//! first maximal element: a candidate only replaces the incumbent when it ranks
//! strictly greater under the comparer in use.
//!
//! Sources whose elements can be absent (`Option<T>`) skip absent elements and
//! report an all-absent or empty source as `None`. Other sources fail with
//! [`ErrorKind::EmptySequence`](seqops_common::error::ErrorKind::EmptySequence)
//! when they yield nothing.
//!
//! ```
//! use seqops::ExtremumExt;
//!
//! assert_eq!(["bb", "a", "ccc"].try_max_by(|s| s.len()).unwrap(), "ccc");
//! assert_eq!([None, None, Some(3), Some(1)].max_present(), Some(3));
//! assert!(Vec::<u8>::new().try_max().unwrap_err().is_empty_sequence());
//! ```

use seqops_common::{Result, error::Error};

use crate::comparer::{Comparer, DefaultComparer};

/// Observable state of a [`MaxAccumulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorState {
    /// Nothing has been pushed yet.
    Empty,
    /// Only elements without a key have been seen; the first one is retained.
    Placeholder,
    /// At least one keyed element has been seen.
    Established,
}

enum Candidate<T, K> {
    Empty,
    Placeholder(T),
    Established { value: T, key: K },
}

/// Running maximum over `(value, key)` pairs where the key may be absent.
///
/// - An absent key never displaces a keyed candidate. While no keyed element
///   has been seen, the first element is kept as a placeholder result.
/// - A present key replaces the current candidate if there is no keyed
///   candidate yet, or if it ranks strictly greater than the current key.
pub struct MaxAccumulator<T, K> {
    candidate: Candidate<T, K>,
}

impl<T, K> MaxAccumulator<T, K> {
    pub fn new() -> Self {
        MaxAccumulator {
            candidate: Candidate::Empty,
        }
    }

    pub fn state(&self) -> AccumulatorState {
        match self.candidate {
            Candidate::Empty => AccumulatorState::Empty,
            Candidate::Placeholder(_) => AccumulatorState::Placeholder,
            Candidate::Established { .. } => AccumulatorState::Established,
        }
    }

    pub fn push<C>(&mut self, value: T, key: Option<K>, comparer: &C)
    where
        C: Comparer<K> + ?Sized,
    {
        let Some(key) = key else {
            if let Candidate::Empty = self.candidate {
                self.candidate = Candidate::Placeholder(value);
            }
            return;
        };
        let replace = match &self.candidate {
            Candidate::Established { key: best, .. } => comparer.is_greater(&key, best),
            Candidate::Empty | Candidate::Placeholder(_) => true,
        };
        if replace {
            self.candidate = Candidate::Established { value, key };
        }
    }

    /// The selected element, or `None` if nothing was pushed.
    pub fn finish(self) -> Option<T> {
        match self.candidate {
            Candidate::Empty => None,
            Candidate::Placeholder(value) | Candidate::Established { value, .. } => Some(value),
        }
    }
}

impl<T, K> Default for MaxAccumulator<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Greatest element of `source` under `comparer`, or `None` if it is empty.
pub fn max_with<I, C>(source: I, comparer: &C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Comparer<I::Item> + ?Sized,
{
    source
        .into_iter()
        .reduce(|best, next| if comparer.is_greater(&next, &best) { next } else { best })
}

/// Element of `source` with the greatest key, where keys may be absent.
///
/// See [`MaxAccumulator`] for how absent keys are treated. Returns `None` only
/// if `source` is empty.
pub fn max_by_nullable_key<I, K, F, C>(
    source: I,
    mut key_selector: F,
    comparer: &C,
) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Option<K>,
    C: Comparer<K> + ?Sized,
{
    let mut acc = MaxAccumulator::new();
    for value in source {
        let key = key_selector(&value);
        acc.push(value, key, comparer);
    }
    acc.finish()
}

/// Maximum selection operators for every [`IntoIterator`].
pub trait ExtremumExt: IntoIterator + Sized {
    /// The greatest element under its natural order.
    ///
    /// Fails with an empty-sequence error if the source yields nothing.
    fn try_max(self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.try_max_with(DefaultComparer)
    }

    /// The greatest element under `comparer`.
    fn try_max_with<C>(self, comparer: C) -> Result<Self::Item>
    where
        C: Comparer<Self::Item>,
    {
        max_with(self, &comparer).ok_or_else(Error::empty_sequence)
    }

    /// The greatest value produced by `selector`.
    fn try_max_of<R, F>(self, selector: F) -> Result<R>
    where
        R: Ord,
        F: FnMut(Self::Item) -> R,
    {
        self.into_iter().map(selector).try_max()
    }

    /// The greatest present value, ignoring `None` elements.
    ///
    /// Returns `None` if the source is empty or every element is `None`.
    fn max_present<T>(self) -> Option<T>
    where
        Self: IntoIterator<Item = Option<T>>,
        T: Ord,
    {
        max_with(self.into_iter().flatten(), &DefaultComparer)
    }

    /// The greatest present value produced by `selector`.
    fn max_present_of<R, F>(self, selector: F) -> Option<R>
    where
        R: Ord,
        F: FnMut(Self::Item) -> Option<R>,
    {
        self.into_iter().map(selector).max_present()
    }

    /// The first element with the greatest key under the natural key order.
    ///
    /// Fails with an empty-sequence error if the source yields nothing.
    fn try_max_by<K, F>(self, key_selector: F) -> Result<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.try_max_by_with(key_selector, DefaultComparer)
    }

    /// The first element with the greatest key under `comparer`.
    fn try_max_by_with<K, F, C>(self, mut key_selector: F, comparer: C) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        max_by_nullable_key(self, |value| Some(key_selector(value)), &comparer)
            .ok_or_else(Error::empty_sequence)
    }

    /// The first element with the greatest present key.
    ///
    /// Elements whose key is `None` are ignored once any keyed element has been
    /// seen; if no element has a key, the first element is returned. Returns
    /// `None` only for an empty source.
    fn max_by_nullable<K, F>(self, key_selector: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> Option<K>,
    {
        max_by_nullable_key(self, key_selector, &DefaultComparer)
    }

    /// Like [`ExtremumExt::max_by_nullable`], ranking keys with `comparer`.
    fn max_by_nullable_with<K, F, C>(self, key_selector: F, comparer: C) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item) -> Option<K>,
        C: Comparer<K>,
    {
        max_by_nullable_key(self, key_selector, &comparer)
    }
}

impl<S: IntoIterator> ExtremumExt for S {}
