//! Brute-force reference semantics for range slicing.
//!
//! The reference decides membership of every offset independently, without
//! going through range resolution, so it can serve as an oracle for it.

use seqops_ranges::{Index, Range};

/// Returns the elements of `items` addressed by `range`.
pub fn reference_slice<T: Clone>(items: &[T], range: &Range) -> Vec<T> {
    let len = items.len();
    items
        .iter()
        .enumerate()
        .filter(|&(offset, _)| {
            after_start(range.start, offset, len) && before_end(range.end, offset, len)
        })
        .map(|(_, item)| item.clone())
        .collect()
}

/// Returns the last `count` elements of `items` (none for `count <= 0`).
pub fn reference_take_last<T: Clone>(items: &[T], count: isize) -> Vec<T> {
    let count = usize::try_from(count).unwrap_or(0).min(items.len());
    items[items.len() - count..].to_vec()
}

/// Returns `items` without its last `count` elements (all of them for `count <= 0`).
pub fn reference_skip_last<T: Clone>(items: &[T], count: isize) -> Vec<T> {
    let count = usize::try_from(count).unwrap_or(0).min(items.len());
    items[..items.len() - count].to_vec()
}

fn after_start(start: Index, offset: usize, len: usize) -> bool {
    if start.is_from_end() {
        len - offset <= start.value()
    } else {
        offset >= start.value()
    }
}

fn before_end(end: Index, offset: usize, len: usize) -> bool {
    if end.is_from_end() {
        len - offset > end.value()
    } else {
        offset < end.value()
    }
}
