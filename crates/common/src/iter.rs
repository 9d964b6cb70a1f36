//! Lazy transform and dereferencing iterator adapters.
//!
//! [`TransformIter`] applies a per-element transform at the moment an
//! element is produced, never eagerly. Cloning the adapter saves its
//! position, so a traversal can be restarted from any point. The
//! [`deref_iter`] constructor builds the common read-only view that turns a
//! cursor over ownership/indirection handles into a cursor over plain
//! borrows, so consumers never see the handles themselves.

use std::iter::FusedIterator;
use std::ops::Deref;

/// An iterator adapter applying a transform once per produced element.
#[derive(Clone)]
pub struct TransformIter<I, F> {
    iter: I,
    f: F,
}

impl<I: std::fmt::Debug, F> std::fmt::Debug for TransformIter<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformIter")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

/// Builds a [`TransformIter`] over `iter` applying `f` lazily.
///
/// # Examples
///
/// ```rust
/// use common::transform_iter;
///
/// let doubled: Vec<i32> = transform_iter([1, 2, 3].iter(), |x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn transform_iter<I, F, B>(iter: I, f: F) -> TransformIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    TransformIter { iter, f }
}

/// Builds a read-only dereferencing view over a cursor of owning or
/// borrowing handles, yielding plain borrows of the pointed-to values.
///
/// # Examples
///
/// ```rust
/// use common::deref_iter;
///
/// let xs = vec![Box::new(1), Box::new(2)];
/// let values: Vec<&i32> = deref_iter(xs.iter()).collect();
/// assert_eq!(values, vec![&1, &2]);
/// ```
pub fn deref_iter<'a, I, D>(iter: I) -> TransformIter<I, fn(&'a D) -> &'a D::Target>
where
    I: Iterator<Item = &'a D>,
    D: Deref + 'a,
{
    TransformIter {
        iter,
        f: |d: &'a D| -> &'a D::Target { &**d },
    }
}

impl<I, F, B> Iterator for TransformIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<B> {
        // random offset access when the underlying cursor supports it
        self.iter.nth(n).map(&mut self.f)
    }
}

impl<I, F, B> DoubleEndedIterator for TransformIter<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> B,
{
    fn next_back(&mut self) -> Option<B> {
        self.iter.next_back().map(&mut self.f)
    }
}

impl<I, F, B> ExactSizeIterator for TransformIter<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> B,
{
}

impl<I, F, B> FusedIterator for TransformIter<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> B,
{
}

/// Position equality: two adapters over the same underlying sequence are
/// equal when their cursors are, regardless of transform.
impl<I: PartialEq, F, G> PartialEq<TransformIter<I, G>> for TransformIter<I, F> {
    fn eq(&self, other: &TransformIter<I, G>) -> bool {
        self.iter == other.iter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn transform_applied_lazily() {
        let calls = Cell::new(0);
        let xs = [1, 2, 3];
        let mut it = transform_iter(xs.iter(), |x| {
            calls.set(calls.get() + 1);
            x * 10
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(it.next(), Some(10));
        assert_eq!(calls.get(), 1);
        assert_eq!(it.next(), Some(20));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn restartable_from_saved_position() {
        let xs = [1, 2, 3];
        let mut it = transform_iter(xs.iter(), |x| x + 1);
        assert_eq!(it.next(), Some(2));
        let saved = it.clone();
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), Some(4));
        // the saved cursor replays from where it stopped
        assert_eq!(saved.collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn forward_and_backward_stepping() {
        let xs = [1, 2, 3];
        let mut it = transform_iter(xs.iter(), |x| x * 2);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(6));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn random_offset_access() {
        let xs = [10, 20, 30, 40];
        let mut it = transform_iter(xs.iter(), |x| x + 1);
        assert_eq!(it.nth(2), Some(31));
        assert_eq!(it.next(), Some(41));
    }

    #[test]
    fn exact_size_forwarded() {
        let xs = [1, 2, 3];
        let it = transform_iter(xs.iter(), |x| *x);
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn cursor_position_equality() {
        let mut a = transform_iter(0..4, |x| x * 2);
        let mut b = transform_iter(0..4, |x| x * 3);
        assert_eq!(a, b);
        a.next();
        assert_ne!(a, b);
        b.next();
        assert_eq!(a, b);
    }

    #[test]
    fn deref_view_hides_handles() {
        let owned = vec![Box::new("a".to_string()), Box::new("b".to_string())];
        let view: Vec<&String> = deref_iter(owned.iter()).collect();
        assert_eq!(view, vec![&"a".to_string(), &"b".to_string()]);
        // the originals are still owned by the vector
        assert_eq!(owned.len(), 2);
    }
}
