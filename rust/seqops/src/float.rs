//! Maximum selection over floating-point values.
//!
//! `f32` and `f64` are not [`Ord`], so they are ranked through
//! [`OrderedFloat`]: a total order in which NaN ranks above every other value,
//! so any NaN in the source is returned as the maximum.

use ordered_float::{FloatCore, OrderedFloat};
use seqops_common::Result;

use crate::extremum::ExtremumExt;

/// The greatest value of a floating-point sequence.
///
/// Fails with an empty-sequence error if the source yields nothing.
pub fn max_float<S, T>(source: S) -> Result<T>
where
    S: IntoIterator<Item = T>,
    T: FloatCore,
{
    source
        .into_iter()
        .map(OrderedFloat)
        .try_max()
        .map(OrderedFloat::into_inner)
}

/// The greatest present value of an optional floating-point sequence.
///
/// Returns `None` if the source is empty or holds only `None`.
pub fn max_present_float<S, T>(source: S) -> Option<T>
where
    S: IntoIterator<Item = Option<T>>,
    T: FloatCore,
{
    source
        .into_iter()
        .map(|value| value.map(OrderedFloat))
        .max_present()
        .map(OrderedFloat::into_inner)
}
