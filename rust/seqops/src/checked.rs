//! Operator entry points that accept possibly-absent arguments.
//!
//! These mirror the extension-trait operators for callers that hold their
//! inputs as `Option`s (for example when bridging from a dynamically typed
//! host). Every required argument is checked before any iteration starts, and
//! an absent one fails with an invalid-argument error naming it. An absent
//! comparer selects the natural key order.

use seqops_common::{Result, require_arg};
use seqops_ranges::{Index, Range};

use crate::{
    comparer::{Comparer, DefaultComparer},
    extremum::ExtremumExt,
    slice::{SequenceExt, Slice},
};

pub fn take<S: IntoIterator>(source: Option<S>, range: impl Into<Range>) -> Result<Slice<S>> {
    let source = require_arg!(source);
    Ok(source.take_range(range))
}

/// Like [`take`], with each bound given as a signed magnitude and a from-end
/// flag. A negative magnitude fails with an invalid-argument error.
pub fn take_between<S: IntoIterator>(
    source: Option<S>,
    (start, start_from_end): (i64, bool),
    (end, end_from_end): (i64, bool),
) -> Result<Slice<S>> {
    let source = require_arg!(source);
    let range = Range::new(Index::new(start, start_from_end)?, Index::new(end, end_from_end)?);
    Ok(source.take_range(range))
}

pub fn take_last<S: IntoIterator>(source: Option<S>, count: isize) -> Result<Slice<S>> {
    let source = require_arg!(source);
    Ok(source.take_last(count))
}

pub fn skip_last<S: IntoIterator>(source: Option<S>, count: isize) -> Result<Slice<S>> {
    let source = require_arg!(source);
    Ok(source.skip_last(count))
}

/// See [`ExtremumExt::try_max`].
pub fn max<S>(source: Option<S>) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    let source = require_arg!(source);
    source.try_max()
}

/// See [`ExtremumExt::max_present`]. Only an absent `source` is an error.
pub fn max_present<S, T>(source: Option<S>) -> Result<Option<T>>
where
    S: IntoIterator<Item = Option<T>>,
    T: Ord,
{
    let source = require_arg!(source);
    Ok(source.max_present())
}

/// See [`ExtremumExt::try_max_of`].
pub fn max_of<S, R, F>(source: Option<S>, selector: Option<F>) -> Result<R>
where
    S: IntoIterator,
    R: Ord,
    F: FnMut(S::Item) -> R,
{
    let source = require_arg!(source);
    let selector = require_arg!(selector);
    source.try_max_of(selector)
}

/// See [`ExtremumExt::try_max_by_with`].
///
/// Both an absent `source` and an absent `key_selector` fail with the same
/// invalid-argument error kind; an empty source fails with an empty-sequence
/// error.
pub fn max_by<S, K, F, C>(
    source: Option<S>,
    key_selector: Option<F>,
    comparer: Option<C>,
) -> Result<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
    C: Comparer<K>,
{
    let source = require_arg!(source);
    let key_selector = require_arg!(key_selector);
    match comparer {
        Some(comparer) => source.try_max_by_with(key_selector, comparer),
        None => source.try_max_by_with(key_selector, DefaultComparer),
    }
}
