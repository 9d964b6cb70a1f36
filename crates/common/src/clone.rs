//! Deep-copy engine over sequences of (optionally absent) elements.
//!
//! Tree passes duplicate whole child lists at once. These helpers funnel
//! every per-element copy through a caller-supplied clone function so the
//! result can never alias the input, and so absent slots stay absent
//! instead of faulting.

/// Deep-copies every element of `items` through `f`.
///
/// The result has the same length and order as the input.
///
/// # Examples
///
/// ```rust
/// use common::clone_all;
///
/// let xs = vec![Box::new(1), Box::new(2)];
/// let ys = clone_all(&xs, |x| Box::new(**x));
/// assert_eq!(xs.len(), ys.len());
/// ```
pub fn clone_all<T, F>(items: &[T], mut f: F) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(f(item));
    }
    out
}

/// Deep-copies a sequence of optional elements, preserving per-index
/// presence: present slots are copied through `f`, absent slots stay
/// absent.
pub fn clone_present<T, F>(items: &[Option<T>], mut f: F) -> Vec<Option<T>>
where
    F: FnMut(&T) -> T,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(item.as_ref().map(&mut f));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_all_produces_independent_copies() {
        let xs = vec![Box::new(1), Box::new(2), Box::new(3)];
        let mut ys = clone_all(&xs, |x| Box::new(**x));
        assert_eq!(ys.len(), xs.len());
        *ys[0] = 99;
        assert_eq!(*xs[0], 1);
    }

    #[test]
    fn clone_present_preserves_presence() {
        let xs = vec![Some(Box::new(1)), None, Some(Box::new(3))];
        let ys = clone_present(&xs, |x| Box::new(**x));
        assert_eq!(ys.len(), 3);
        assert_eq!(ys[0].as_deref(), Some(&1));
        assert!(ys[1].is_none());
        assert_eq!(ys[2].as_deref(), Some(&3));
    }

    #[test]
    fn clone_empty_sequences() {
        let xs: Vec<Box<i32>> = vec![];
        assert!(clone_all(&xs, |x| x.clone()).is_empty());
        let ys: Vec<Option<Box<i32>>> = vec![];
        assert!(clone_present(&ys, |x| x.clone()).is_empty());
    }
}
