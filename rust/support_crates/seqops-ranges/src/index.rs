//! Symbolic sequence positions, measured either from the start or from the end.

use std::fmt;

use seqops_common::{Result, verify_arg};

/// A position within a sequence of not-yet-known length.
///
/// An `Index` is a non-negative magnitude plus a flag telling whether the
/// magnitude counts forward from the first element or backward from one past
/// the last element. `Index::from_end(0)` therefore addresses the position
/// right after the last element, and `Index::from_end(1)` the last element.
///
/// No arithmetic is defined on an `Index`; it only becomes a concrete offset
/// once resolved against a length (see [`Index::offset`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Index {
    value: usize,
    from_end: bool,
}

impl Index {
    /// The first position of a sequence (`0`).
    pub const fn start() -> Index {
        Index {
            value: 0,
            from_end: false,
        }
    }

    /// The position one past the last element (`^0`).
    pub const fn end() -> Index {
        Index {
            value: 0,
            from_end: true,
        }
    }

    pub const fn from_start(value: usize) -> Index {
        Index {
            value,
            from_end: false,
        }
    }

    pub const fn from_end(value: usize) -> Index {
        Index {
            value,
            from_end: true,
        }
    }

    /// Creates an index from a signed magnitude.
    ///
    /// Fails with an invalid-argument error when `value` is negative or does
    /// not fit into `usize`.
    pub fn new(value: i64, from_end: bool) -> Result<Index> {
        verify_arg!(value, value >= 0);
        let value = usize::try_from(value)
            .map_err(|_| seqops_common::error::Error::invalid_arg("value", "exceeds usize"))?;
        Ok(Index { value, from_end })
    }

    /// The non-negative magnitude of the index.
    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    #[inline]
    pub fn is_from_end(&self) -> bool {
        self.from_end
    }

    /// Resolves the index against a sequence of `len` elements.
    ///
    /// Returns `None` when an end-relative index reaches before the first
    /// element. The returned offset may exceed `len` for start-relative indices.
    pub fn offset(&self, len: usize) -> Option<usize> {
        if self.from_end {
            len.checked_sub(self.value)
        } else {
            Some(self.value)
        }
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Index::from_start(value)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_end {
            write!(f, "^{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
