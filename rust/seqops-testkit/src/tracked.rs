//! Instrumented sources for observing how an operator iterates its input.
//!
//! A [`TrackedSource`] is a shared, mutable list of values. Every iterator it
//! hands out records the number of elements pulled, and whether it is still
//! alive, in a [`SourceStats`] shared by all clones of the source. Iterators
//! read the list by position, so changes made between two passes are visible
//! to the second pass.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Counters shared by a [`TrackedSource`] and all iterators created from it.
#[derive(Debug, Default)]
pub struct SourceStats {
    opened: Cell<usize>,
    live: Cell<usize>,
    pulled: Cell<usize>,
}

impl SourceStats {
    /// Number of iterators created so far.
    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    /// Number of iterators created but not yet dropped.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Total number of elements yielded across all iterators.
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

/// A shared list of values whose iteration is recorded in [`SourceStats`].
#[derive(Debug)]
pub struct TrackedSource<T> {
    items: Rc<RefCell<Vec<T>>>,
    stats: Rc<SourceStats>,
    exact_size: bool,
}

impl<T> Clone for TrackedSource<T> {
    fn clone(&self) -> Self {
        TrackedSource {
            items: self.items.clone(),
            stats: self.stats.clone(),
            exact_size: self.exact_size,
        }
    }
}

impl<T: Clone> TrackedSource<T> {
    /// Creates a source whose iterators report no size hint, so consumers
    /// cannot learn the length without iterating to the end.
    pub fn new(items: Vec<T>) -> Self {
        TrackedSource {
            items: Rc::new(RefCell::new(items)),
            stats: Rc::new(SourceStats::default()),
            exact_size: false,
        }
    }

    /// Creates a source whose iterators report an exact size hint.
    pub fn with_exact_size(items: Vec<T>) -> Self {
        TrackedSource {
            exact_size: true,
            ..Self::new(items)
        }
    }

    pub fn stats(&self) -> &SourceStats {
        &self.stats
    }

    /// Appends a value, visible to every iterator created afterwards and to
    /// live iterators that have not yet reached the end.
    pub fn push(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    /// Replaces the contents of the source.
    pub fn replace(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items;
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn iter(&self) -> TrackedIter<T> {
        SourceStats::bump(&self.stats.opened);
        SourceStats::bump(&self.stats.live);
        TrackedIter {
            items: self.items.clone(),
            stats: self.stats.clone(),
            position: 0,
            exact_size: self.exact_size,
        }
    }
}

impl<T: Clone> IntoIterator for TrackedSource<T> {
    type Item = T;
    type IntoIter = TrackedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for &TrackedSource<T> {
    type Item = T;
    type IntoIter = TrackedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator created by [`TrackedSource::iter`].
pub struct TrackedIter<T> {
    items: Rc<RefCell<Vec<T>>>,
    stats: Rc<SourceStats>,
    position: usize,
    exact_size: bool,
}

impl<T: Clone> Iterator for TrackedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.borrow().get(self.position).cloned()?;
        self.position += 1;
        SourceStats::bump(&self.stats.pulled);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exact_size {
            let remaining = self.items.borrow().len().saturating_sub(self.position);
            (remaining, Some(remaining))
        } else {
            (0, None)
        }
    }
}

impl<T> Drop for TrackedIter<T> {
    fn drop(&mut self) {
        self.stats.live.set(self.stats.live.get() - 1);
    }
}
