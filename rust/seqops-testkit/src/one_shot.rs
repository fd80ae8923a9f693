//! An iterator adapter that withholds its length.

/// Wraps an iterator and reports no size hint, so a consumer can only learn
/// the length by iterating to the end.
#[derive(Debug, Clone)]
pub struct OneShot<I>(pub I);

impl<I: Iterator> Iterator for OneShot<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

#[cfg(test)]
mod tests {
    use super::OneShot;

    #[test]
    fn test_hides_size_hint() {
        let mut it = OneShot(vec![1, 2, 3].into_iter());
        assert_eq!(it.size_hint(), (0, None));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!(it.size_hint(), (0, None));
    }
}
