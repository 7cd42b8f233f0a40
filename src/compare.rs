use core::cmp::Ordering;

/// A total order over the values stored in a [`DllAvlTree`].
///
/// The tree never inspects values other than through its comparator. It is a
/// logic error for a comparator to be inconsistent (not a total order) or for
/// its result on two stored values to change while they are in the tree. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the tree and not result in undefined behavior.
///
/// Every closure `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use dllbest::{DllAvlTree, Redundancy};
///
/// let mut tree = DllAvlTree::with_comparator(Redundancy::Unique, |a: &i32, b: &i32| b.cmp(a));
/// tree.extend([1, 3, 2]);
/// assert_eq!(tree.dll_dump(), [&3, &2, &1]);
/// ```
///
/// [`DllAvlTree`]: crate::DllAvlTree
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn natural_follows_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert_eq!(Natural.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"xyz"), Ordering::Less);
        assert_eq!(by_len.compare(&"ab", &"xy"), Ordering::Equal);
    }
}
