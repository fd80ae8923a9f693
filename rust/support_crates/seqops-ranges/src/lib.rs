//! Symbolic ranges over sequences of not-yet-known length.
//!
//! This crate provides the value types used to address a contiguous slice of a
//! sequence where each bound may be measured from the start or from the end,
//! and the resolution rules that reduce such a range to concrete offsets.
//!
//! # Key Types
//!
//! - [`Index`] - A non-negative position, counted from the start or from the end
//! - [`Range`] - A pair of [`Index`] bounds
//! - [`ResolvedBounds`] - Concrete forward offsets produced by [`resolve`]

pub mod index;
pub mod range;
pub mod resolve;

pub use index::Index;
pub use range::Range;
pub use resolve::{Resolution, ResolvedBounds, resolve};
