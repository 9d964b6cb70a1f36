//! Deep-equality engine over sequences and ordered maps.
//!
//! Structural comparisons of child lists share the same skeleton: an
//! identity short-circuit, a length check, then an element-wise deep
//! comparison. The helpers here factor that skeleton out so node equality
//! never hand-rolls it.

use itertools::Itertools;
use std::collections::BTreeMap;

/// Policy for comparing two absent elements in [`equal_opt_seq`].
///
/// An absent-vs-present mismatch is always unequal. Whether absent-vs-absent
/// counts as equal is a deliberate, named choice: `NeverEqual` reproduces
/// the historical engine behavior that forces callers to special-case
/// absence themselves, `BothAbsentEqual` is the conventional reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbsentPolicy {
    /// Two absent elements never compare equal.
    NeverEqual,
    /// Two absent elements compare equal.
    BothAbsentEqual,
}

/// Deep-compares two sequences element-wise with `eq`.
///
/// Identical slices (same address and length) compare equal without
/// inspecting elements; sequences of different lengths are unequal.
///
/// # Examples
///
/// ```rust
/// use common::equal_seq;
///
/// let a = [Box::new(1), Box::new(2)];
/// let b = [Box::new(1), Box::new(2)];
/// assert!(equal_seq(&a, &b, |x, y| **x == **y));
/// ```
pub fn equal_seq<T, F>(a: &[T], b: &[T], mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    // identity short-circuit: avoids deep recursion on self-comparisons
    if std::ptr::eq(a, b) {
        return true;
    }
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip_eq(b.iter()).all(|(x, y)| eq(x, y))
}

/// Deep-compares two sequences of optional elements.
///
/// Present elements are compared with `eq`; an absent-vs-present mismatch
/// is always `false`; absent-vs-absent is decided by `policy`.
pub fn equal_opt_seq<T, F>(a: &[Option<T>], b: &[Option<T>], policy: AbsentPolicy, mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    equal_seq(a, b, |x, y| match (x, y) {
        (Some(x), Some(y)) => eq(x, y),
        (None, None) => policy == AbsentPolicy::BothAbsentEqual,
        _ => false,
    })
}

/// Deep-compares two ordered maps: keys must match exactly, values are
/// compared with `eq`.
pub fn equal_map<K, V, F>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>, mut eq: F) -> bool
where
    K: Ord,
    F: FnMut(&V, &V) -> bool,
{
    if std::ptr::eq(a, b) {
        return true;
    }
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip_eq(b.iter())
        .all(|((ka, va), (kb, vb))| ka == kb && eq(va, vb))
}
