//! Orderings used to rank keys during extremum selection.

use std::cmp::Ordering;

/// A total order over values of type `K`.
///
/// Implemented by [`DefaultComparer`] for every `K: Ord`, by closures of the
/// form `Fn(&K, &K) -> Ordering`, and by [`ReverseComparer`].
pub trait Comparer<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns `true` if `a` ranks strictly above `b`.
    #[inline]
    fn is_greater(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// The natural order of `K` as given by its [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultComparer;

impl<K: Ord + ?Sized> Comparer<K> for DefaultComparer {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Flips the order of an inner comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseComparer<C>(pub C);

impl<K: ?Sized, C: Comparer<K>> Comparer<K> for ReverseComparer<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}
