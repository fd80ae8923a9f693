//! Data generation utilities for testing.
//!
//! This module provides functions to generate synthetic sequences and ranges.
//! All randomness comes from a caller-supplied [`fastrand::Rng`], so a failing
//! case can be replayed from its seed.

use seqops_ranges::{Index, Range};

/// Generates `len` random values in `-1000..1000`.
pub fn random_sequence(rng: &mut fastrand::Rng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.i32(-1000..1000)).collect()
}

/// Generates `len` optional values where roughly one in `absent_ratio`
/// elements is `None`.
pub fn random_optional_sequence(
    rng: &mut fastrand::Rng,
    len: usize,
    absent_ratio: u32,
) -> Vec<Option<i32>> {
    assert_ne!(absent_ratio, 0);
    (0..len)
        .map(|_| {
            if rng.u32(0..absent_ratio) == 0 {
                None
            } else {
                Some(rng.i32(-1000..1000))
            }
        })
        .collect()
}

/// Generates a random index with a magnitude in `0..=max_magnitude`.
pub fn random_index(rng: &mut fastrand::Rng, max_magnitude: usize) -> Index {
    let value = rng.usize(0..=max_magnitude);
    if rng.bool() {
        Index::from_end(value)
    } else {
        Index::from_start(value)
    }
}

/// Generates a random range with bound magnitudes in `0..=max_magnitude`.
pub fn random_range(rng: &mut fastrand::Rng, max_magnitude: usize) -> Range {
    Range::new(
        random_index(rng, max_magnitude),
        random_index(rng, max_magnitude),
    )
}

/// Enumerates every range whose bound magnitudes lie in `0..=max_magnitude`,
/// covering all four combinations of start- and end-relative bounds.
pub fn all_ranges(max_magnitude: usize) -> impl Iterator<Item = Range> {
    let indices = move || {
        (0..=max_magnitude).flat_map(|value| [Index::from_start(value), Index::from_end(value)])
    };
    indices().flat_map(move |start| indices().map(move |end| Range::new(start, end)))
}
