use core::ops::Index;

use super::DllAvlTree;
use crate::{Comparator, Rank};

impl<T, C> DllAvlTree<T, C> {
    /// Returns the value at position `index` in ascending order.
    ///
    /// The index is zero-based and counts every duplicate. Returns `None` if
    /// `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// tree.extend([30, 10, 20, 10]);
    /// assert_eq!(tree.get(1), Some(&10));
    /// assert_eq!(tree.get(2), Some(&20));
    /// assert!(tree.get(4).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) plus the length of one equal chain.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.raw.get_by_rank(index)
    }
}

impl<T, C: Comparator<T>> DllAvlTree<T, C> {
    /// Returns the rank of the first value equal to `value`, or `None` if
    /// the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// tree.extend([10, 20, 10]);
    /// assert_eq!(tree.rank_of(&20), Some(2));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        self.raw.rank_of(value)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<T, C> Index<Rank> for DllAvlTree<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get(rank.0).expect("index out of bounds")
    }
}
