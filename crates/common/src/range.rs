//! Contiguous interval abstraction with near-equal partitioning.
//!
//! A [`Range`] marks the stretch between two positions of an ordered
//! sequence. Its one non-trivial operation is [`Range::partition`], which
//! splits the interval into at most `np` contiguous sub-ranges of
//! near-equal size. Whole-program analyses use this to hand independent,
//! non-overlapping slices of a large node collection to parallel read-only
//! workers; within one range everything stays in original order.

/// Default number of partitions for bulk operations.
pub const DEFAULT_PARTITIONS: usize = 100;

/// A contiguous interval between two positions of an ordered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range<'a, T> {
    items: &'a [T],
}

/// Builds a [`Range`] covering the whole of `items`.
#[must_use]
pub fn make_range<T>(items: &[T]) -> Range<'_, T> {
    Range { items }
}

impl<'a, T> Range<'a, T> {
    /// Number of elements in the interval.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the interval covers no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The covered elements, in original order.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Iterates the covered elements in order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    /// Splits this interval into at most `np` contiguous sub-ranges.
    ///
    /// Sub-range sizes differ by at most one element; the remainder of
    /// `len() / np` is distributed over the first `len() % np` sub-ranges.
    /// Empty sub-ranges are never emitted, so fewer than `np` ranges come
    /// back when the interval holds fewer than `np` elements.
    /// Concatenating the result in order reproduces the interval exactly.
    ///
    /// # Panics
    ///
    /// Panics if `np` is zero.
    #[must_use]
    pub fn partition(&self, np: usize) -> Vec<Range<'a, T>> {
        assert!(np > 0, "partition count must be positive");
        let n = self.items.len();
        let size = n / np;
        let rem = n % np;

        let mut out = Vec::with_capacity(np.min(n));
        let mut start = 0;
        for p in 0..np {
            let extent = size + usize::from(p < rem);
            if extent == 0 {
                break;
            }
            out.push(Range {
                items: &self.items[start..start + extent],
            });
            start += extent;
        }
        out
    }

    /// [`Range::partition`] with the default partition count.
    #[must_use]
    pub fn partition_default(&self) -> Vec<Range<'a, T>> {
        self.partition(DEFAULT_PARTITIONS)
    }
}

impl<'a, T> IntoIterator for &Range<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_coverage(items: &[u32], np: usize) {
        let parts = make_range(items).partition(np);
        // union is exactly the original sequence, in order
        let rejoined: Vec<u32> = parts.iter().flat_map(|p| p.iter().copied()).collect();
        assert_eq!(rejoined, items);
        // no empty partitions
        assert!(parts.iter().all(|p| !p.is_empty()) || items.is_empty());
        // sizes differ by at most one
        if let (Some(max), Some(min)) = (
            parts.iter().map(Range::len).max(),
            parts.iter().map(Range::len).min(),
        ) {
            assert!(max - min <= 1, "max {max} min {min}");
        }
    }

    #[test]
    fn partition_coverage_law() {
        let items: Vec<u32> = (0..137).collect();
        for np in [1, 2, 3, 10, 100, 137, 200] {
            check_coverage(&items, np);
        }
    }

    #[test]
    fn partition_exact_division() {
        let items: Vec<u32> = (0..10).collect();
        let parts = make_range(&items).partition(5);
        assert_eq!(parts.len(), 5);
        assert!(parts.iter().all(|p| p.len() == 2));
    }

    #[test]
    fn partition_remainder_goes_first() {
        let items: Vec<u32> = (0..7).collect();
        let parts = make_range(&items).partition(3);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }

    #[test]
    fn partition_fewer_elements_than_partitions() {
        let items: Vec<u32> = (0..4).collect();
        let parts = make_range(&items).partition(100);
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.len() == 1));
    }

    #[test]
    fn partition_empty_range() {
        let items: Vec<u32> = vec![];
        assert!(make_range(&items).partition(10).is_empty());
    }

    #[test]
    fn default_partition_count() {
        let items: Vec<u32> = (0..1000).collect();
        let parts = make_range(&items).partition_default();
        assert_eq!(parts.len(), DEFAULT_PARTITIONS);
        check_coverage(&items, DEFAULT_PARTITIONS);
    }

    #[test]
    #[should_panic(expected = "partition count must be positive")]
    fn partition_zero_is_a_programmer_error() {
        let items = [1, 2, 3];
        let _ = make_range(&items).partition(0);
    }
}
