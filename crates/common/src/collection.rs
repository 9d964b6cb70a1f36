//! Membership, lookup, and vector-building helpers shared across passes.

use std::collections::BTreeMap;

/// Returns true if `item` occurs in `items`.
///
/// # Examples
///
/// ```rust
/// use common::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
#[must_use]
pub fn contains<T: PartialEq>(items: &[T], item: &T) -> bool {
    items.iter().any(|x| x == item)
}

/// Returns the first element satisfying `pred`, or `None`.
///
/// # Examples
///
/// ```rust
/// use common::get_if;
///
/// let xs = ["alpha", "beta", "gamma"];
/// assert_eq!(get_if(xs.iter(), |s| s.starts_with('b')), Some(&"beta"));
/// assert_eq!(get_if(xs.iter(), |s| s.starts_with('z')), None);
/// ```
pub fn get_if<I, F>(items: I, mut pred: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().find(|item| pred(item))
}

/// Returns the value stored under `key`, or `default` if the key is absent.
///
/// # Examples
///
/// ```rust
/// use common::get_or;
/// use std::collections::BTreeMap;
///
/// let mut m = BTreeMap::new();
/// m.insert("a", 1);
/// assert_eq!(*get_or(&m, "a", &0), 1);
/// assert_eq!(*get_or(&m, "b", &0), 0);
/// ```
#[must_use]
pub fn get_or<'a, K: Ord, V>(map: &'a BTreeMap<K, V>, key: K, default: &'a V) -> &'a V {
    map.get(&key).unwrap_or(default)
}

/// Applies `f` to each element of a slice and collects the results.
///
/// Eager counterpart of `iter().map(..)` with capacity reserved up front,
/// for call sites that want a `Vec` in a single expression.
pub fn map_vec<T, B, F>(items: &[T], mut f: F) -> Vec<B>
where
    F: FnMut(&T) -> B,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(f(item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_checks_membership() {
        let xs = vec!["a".to_string(), "b".to_string()];
        assert!(contains(&xs, &"a".to_string()));
        assert!(!contains(&xs, &"c".to_string()));
        let empty: Vec<i32> = vec![];
        assert!(!contains(&empty, &1));
    }

    #[test]
    fn get_if_returns_first_match() {
        let xs = [1, 7, 9, 7];
        assert_eq!(get_if(xs.iter(), |x| **x > 5), Some(&7));
        assert_eq!(get_if(xs.iter(), |x| **x > 100), None);
    }

    #[test]
    fn get_or_falls_back_to_default() {
        let mut m = BTreeMap::new();
        m.insert(1, "one");
        assert_eq!(*get_or(&m, 1, &"none"), "one");
        assert_eq!(*get_or(&m, 2, &"none"), "none");
    }

    #[test]
    fn map_vec_preserves_length_and_order() {
        let xs = [1, 2, 3];
        assert_eq!(map_vec(&xs, |x| x * 10), vec![10, 20, 30]);
        let empty: [i32; 0] = [];
        assert!(map_vec(&empty, |x| *x).is_empty());
    }
}
