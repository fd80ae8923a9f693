//! Test utilities and helpers for the seqops crates.
//!
//! This crate provides:
//! - Data generation for random sequences and range shapes
//! - A brute-force reference implementation of range slicing
//! - Instrumented sources that record how they are iterated
//! - An adapter that hides an iterator's size hint
//!
//! # Usage
//!
//! This crate is intended for use within the seqops test suites only.

pub mod data_gen;
pub mod one_shot;
pub mod reference;
pub mod tracked;

pub use one_shot::OneShot;
pub use tracked::{SourceStats, TrackedSource};
