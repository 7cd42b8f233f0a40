use super::DllAvlTree;
use crate::raw::RawTree;
use crate::{Natural, Redundancy};

impl<T: Ord> DllAvlTree<T> {
    /// Creates an empty tree with room for at least `capacity` values,
    /// duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let tree: DllAvlTree<i32> = DllAvlTree::with_capacity(Redundancy::Unique, 16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(redundancy: Redundancy, capacity: usize) -> Self {
        DllAvlTree {
            raw: RawTree::with_capacity(Natural, redundancy, capacity),
        }
    }
}

impl<T, C> DllAvlTree<T, C> {
    /// Creates an empty tree ordered by `comparator` with room for at least
    /// `capacity` values.
    #[must_use]
    pub fn with_capacity_and_comparator(redundancy: Redundancy, capacity: usize, comparator: C) -> Self {
        DllAvlTree {
            raw: RawTree::with_capacity(comparator, redundancy, capacity),
        }
    }

    /// Returns how many values the tree can hold without reallocating.
    ///
    /// Slots freed by removals are reused before the storage grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
