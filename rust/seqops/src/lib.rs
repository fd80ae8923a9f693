//! Lazy range extraction and single-pass extremum selection over sequences.
//!
//! This crate provides operators over any [`IntoIterator`] source that is
//! consumed front to back exactly once per pass:
//!
//! - **Range extraction**: [`SequenceExt::take_range`], [`SequenceExt::take_last`]
//!   and [`SequenceExt::skip_last`] select a contiguous part of a sequence whose
//!   bounds may be measured from its end, buffering only as many trailing
//!   elements as the range requires.
//! - **Extremum selection**: [`ExtremumExt`] finds the greatest element, the
//!   greatest projected value, or the element with the greatest key, with a
//!   pluggable [`Comparer`] and stable (first-wins) tie-breaking.
//!
//! # Key Types
//!
//! - [`Slice`] - A deferred range of a source; iterating it runs the pass
//! - [`WindowIter`] - The sliding-window iterator behind every [`Slice`]
//! - [`MaxAccumulator`] - Running maximum with absent-key handling
//! - [`Index`] / [`Range`] - Symbolic bounds, re-exported from `seqops-ranges`

pub mod checked;
pub mod comparer;
pub mod extremum;
pub mod float;
pub mod slice;
pub mod window;

pub use comparer::{Comparer, DefaultComparer, ReverseComparer};
pub use extremum::{AccumulatorState, ExtremumExt, MaxAccumulator};
pub use float::{max_float, max_present_float};
pub use seqops_common::{Result, error::Error, error::ErrorKind};
pub use seqops_ranges::{Index, Range, Resolution, ResolvedBounds, resolve};
pub use slice::{SequenceExt, Slice};
pub use window::WindowIter;
