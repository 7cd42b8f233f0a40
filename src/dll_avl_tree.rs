use alloc::vec::Vec;
use core::fmt;

use crate::raw::{Handle, RawTree};
use crate::{Comparator, Natural, Redundancy};

mod capacity;
mod iter;
mod node_ref;
mod order_statistic;

pub use iter::{Iter, Range, Values};
pub use node_ref::NodeRef;

/// An AVL tree whose nodes are also threaded into a sorted doubly linked list.
///
/// The tree gives O(log n) insertion, removal, lookup and rank queries. The
/// list gives O(1) access to both ends and a full ascending walk that never
/// touches the tree structure. Every structural node also keeps a chain of
/// values whose keys compare equal to its own; whether that chain is used is
/// decided by the tree's [`Redundancy`].
///
/// Values are ordered by a [`Comparator`], [`Natural`] (`Ord`) by default.
/// It is a logic error for a value to be modified in such a way that its
/// ordering relative to any other value changes while it is in the tree. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `DllAvlTree` that observed the logic error and not
/// result in undefined behavior.
///
/// # Examples
///
/// ```
/// use dllbest::{DllAvlTree, Redundancy};
///
/// let mut tree = DllAvlTree::new(Redundancy::Unique);
/// for value in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
///     tree.insert(value);
/// }
///
/// assert!(tree.remove(&5));
/// assert_eq!(tree.dll_dump(), [&1, &2, &3, &4, &6, &7, &8, &9]);
/// assert_eq!(tree.range(&3, &7).copied().collect::<Vec<_>>(), [3, 4, 6, 7]);
///
/// // The biggest values come out first.
/// assert_eq!(tree.dequeue(), Some(9));
/// assert_eq!(tree.dequeue(), Some(8));
/// ```
#[derive(Clone)]
pub struct DllAvlTree<T, C = Natural> {
    raw: RawTree<T, C>,
}

impl<T: Ord> DllAvlTree<T> {
    /// Makes a new, empty `DllAvlTree` ordered by `Ord`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[must_use]
    pub const fn new(redundancy: Redundancy) -> Self {
        DllAvlTree {
            raw: RawTree::new(Natural, redundancy),
        }
    }
}

impl<T, C> DllAvlTree<T, C> {
    /// Makes a new, empty `DllAvlTree` ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(redundancy: Redundancy, comparator: C) -> Self {
        DllAvlTree {
            raw: RawTree::new(comparator, redundancy),
        }
    }

    /// Returns the number of values in the tree, duplicates included.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of distinct keys, that is, structural nodes.
    ///
    /// Equals [`len`](Self::len) under [`Redundancy::Unique`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// tree.extend([1, 2, 2, 3, 3, 3]);
    /// assert_eq!(tree.len(), 6);
    /// assert_eq!(tree.node_count(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.raw.node_count()
    }

    /// Returns `true` if the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the duplicate policy the tree was built with.
    #[must_use]
    pub fn redundancy(&self) -> Redundancy {
        self.raw.redundancy()
    }

    /// Returns the comparator ordering the tree.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Height of the tree: 0 for a single node, and also 0 when empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.height())
    }

    /// Returns the smallest value, read from the head of the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.head().map(|head| self.raw.node(head).value())
    }

    /// Returns the biggest value, read from the tail of the list. Under
    /// [`Redundancy::Redundant`] this is the oldest of the biggest values.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.tail().map(|tail| self.raw.node(tail).value())
    }

    /// Returns the smallest value, found by descending the tree.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn smallest(&self) -> Option<&T> {
        let root = self.raw.root()?;
        Some(self.raw.node(self.raw.find_smallest(root)).value())
    }

    /// Returns the biggest value, found by descending the tree.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn biggest(&self) -> Option<&T> {
        let root = self.raw.root()?;
        Some(self.raw.node(self.raw.find_biggest(root)).value())
    }

    /// Returns a view of the root node.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.raw.root().map(|root| NodeRef::new(self.raw.arena(), root))
    }

    /// Returns a view of the node behind `handle`, or `None` if the handle
    /// does not name a node currently in this tree.
    #[must_use]
    pub fn node(&self, handle: Handle) -> Option<NodeRef<'_, T>> {
        self.raw
            .is_structural(handle)
            .then(|| NodeRef::new(self.raw.arena(), handle))
    }

    /// Removes one value from the node behind `handle` and returns it.
    ///
    /// If the node holds duplicates, its oldest value is removed and the node
    /// stays in the tree. Returns `None` if `handle` does not name a node
    /// currently in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Unique);
    /// tree.extend([1, 2, 3]);
    ///
    /// let handle = tree.find(&2).unwrap().handle();
    /// assert_eq!(tree.remove_at(handle), Some(2));
    /// assert_eq!(tree.remove_at(handle), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_at(&mut self, handle: Handle) -> Option<T> {
        self.raw.remove_at(handle)
    }

    /// Removes and returns one of the biggest values, or `None` if the tree
    /// is empty. Repeated calls drain the tree in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// tree.extend([2, 3, 1, 3]);
    ///
    /// let drained: Vec<_> = std::iter::from_fn(|| tree.dequeue()).collect();
    /// assert_eq!(drained, [3, 3, 2, 1]);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn dequeue(&mut self) -> Option<T> {
        self.raw.dequeue()
    }

    /// Gets an iterator over the values in ascending order.
    ///
    /// Walks the linked list; the tree structure is not touched.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw.arena(), self.raw.head(), self.raw.len())
    }

    /// Collects the values in pre-order (node, left, right).
    #[must_use]
    pub fn pre_order(&self) -> Vec<&T> {
        self.raw.pre_order()
    }

    /// Collects the values in ascending order by walking the tree.
    #[must_use]
    pub fn in_order(&self) -> Vec<&T> {
        self.raw.in_order()
    }

    /// Collects the values in post-order (left, right, node).
    #[must_use]
    pub fn post_order(&self) -> Vec<&T> {
        self.raw.post_order()
    }

    /// Collects the values in ascending order by walking the linked list.
    ///
    /// Same result as [`in_order`](Self::in_order), without the stack.
    #[must_use]
    pub fn dll_dump(&self) -> Vec<&T> {
        self.raw.dll_dump()
    }
}

impl<T, C: Comparator<T>> DllAvlTree<T, C> {
    /// Adds a value to the tree.
    ///
    /// Returns `false` if the tree is [`Redundancy::Unique`] and already
    /// holds an equal key; the value is dropped. Under
    /// [`Redundancy::Redundant`] this always succeeds.
    ///
    /// # Complexity
    ///
    /// O(log n), with at most one rotation.
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Adds a value only if no equal key is present, whatever the tree's
    /// [`Redundancy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// assert!(tree.try_insert(1));
    /// assert!(!tree.try_insert(1));
    /// assert!(tree.insert(1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn try_insert(&mut self, value: T) -> bool {
        self.raw.try_insert(value)
    }

    /// Moves all values from `other` into `self`, leaving `other` empty.
    ///
    /// Each value goes through [`insert`](Self::insert), so `self`'s
    /// [`Redundancy`] decides what happens to equal keys. Duplicates keep
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut a = DllAvlTree::new(Redundancy::Unique);
    /// a.extend([1, 2]);
    /// let mut b = DllAvlTree::new(Redundancy::Redundant);
    /// b.extend([2, 3, 3]);
    ///
    /// a.append(&mut b);
    /// assert_eq!(a.dll_dump(), [&1, &2, &3]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append<D>(&mut self, other: &mut DllAvlTree<T, D>) {
        // Draining from the front keeps each key's chain in insertion order.
        let mut values = Vec::with_capacity(other.len());
        while let Some(head) = other.raw.head() {
            if let Some(value) = other.raw.remove_at(head) {
                values.push(value);
            }
        }
        self.extend(values);
    }

    /// Returns true if the tree holds a value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.find(value).is_some()
    }

    /// Returns a view of the node holding `value`'s key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.raw.find(value).map(|handle| NodeRef::new(self.raw.arena(), handle))
    }

    /// Removes one value equal to `value`. Returns whether one was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.raw.remove(value).is_some()
    }

    /// Removes one value equal to `value` and returns it.
    ///
    /// Under [`Redundancy::Redundant`] the oldest equal value is the one
    /// returned.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.raw.remove(value)
    }

    /// Gets an iterator over every value `v` with `lower <= v <= upper`, in
    /// ascending order.
    ///
    /// The iterator is empty if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let tree: DllAvlTree<_> = [10, 20, 30, 40, 50].into_iter().collect();
    /// let found: Vec<_> = tree.range(&15, &45).copied().collect();
    /// assert_eq!(found, [20, 30, 40]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create, then O(1) per value.
    #[must_use]
    pub fn range(&self, lower: &T, upper: &T) -> Range<'_, T> {
        match self.raw.range_bounds(lower, upper) {
            Some((first, last)) => Range::new(self.raw.arena(), first, last),
            None => Range::empty(self.raw.arena()),
        }
    }

    /// Checks every internal invariant of the tree, panicking on a violation.
    ///
    /// O(n). Meant for tests.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        self.raw.assert_invariants();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DllAvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Default for DllAvlTree<T> {
    /// Creates an empty, [`Redundancy::Redundant`] tree.
    fn default() -> Self {
        DllAvlTree::new(Redundancy::default())
    }
}

impl<T: Ord> FromIterator<T> for DllAvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = DllAvlTree::default();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for DllAvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for DllAvlTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for DllAvlTree<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a DllAvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_tree_queries() {
        let mut tree: DllAvlTree<i32> = DllAvlTree::new(Redundancy::Unique);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.smallest(), None);
        assert_eq!(tree.biggest(), None);
        assert!(tree.root().is_none());
        assert_eq!(tree.dequeue(), None);
        assert_eq!(tree.iter().len(), 0);
        assert_eq!(tree.range(&0, &10).count(), 0);
    }

    #[test]
    fn ends_agree_between_list_and_tree() {
        let tree = DllAvlTree::from([40, 10, 30, 50, 20]);
        assert_eq!(tree.first(), Some(&10));
        assert_eq!(tree.smallest(), Some(&10));
        assert_eq!(tree.last(), Some(&50));
        assert_eq!(tree.biggest(), Some(&50));
    }

    #[test]
    fn iter_is_exact_size() {
        let tree = DllAvlTree::from([3, 1, 3, 2, 3]);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3, 3, 3]);
    }

    #[test]
    fn range_includes_duplicates() {
        let tree = DllAvlTree::from([5, 1, 5, 9, 3, 5]);
        assert_eq!(tree.range(&2, &5).copied().collect::<Vec<_>>(), [3, 5, 5, 5]);
        assert_eq!(tree.range(&6, &8).count(), 0);
        assert_eq!(tree.range(&9, &1).count(), 0);
    }

    #[test]
    fn node_views_navigate() {
        let tree = DllAvlTree::from([2, 1, 3]);
        let root = tree.root().unwrap();
        assert_eq!(*root.value(), 2);
        assert_eq!(root.height(), 1);
        assert_eq!(root.balance(), 0);
        assert!(!root.is_leaf() && !root.is_branch());

        let left = root.left().unwrap();
        assert_eq!(*left.value(), 1);
        assert!(left.is_leaf());
        assert_eq!(left.parent(), Some(root));
        assert_eq!(left.next(), Some(root));
        assert_eq!(root.next().map(|n| *n.value()), Some(3));
        assert_eq!(tree.node(left.handle()), Some(left));
    }

    #[test]
    fn take_returns_oldest_duplicate() {
        let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let mut tree = DllAvlTree::with_comparator(Redundancy::Redundant, by_key);
        tree.extend([(1, 'a'), (1, 'b')]);
        assert_eq!(tree.take(&(1, '?')), Some((1, 'a')));
        assert_eq!(tree.take(&(1, '?')), Some((1, 'b')));
        assert_eq!(tree.take(&(1, '?')), None);
    }

    #[test]
    fn append_respects_receiver_policy() {
        let mut unique = DllAvlTree::new(Redundancy::Unique);
        unique.extend([1, 2]);
        let mut other = DllAvlTree::new(Redundancy::Redundant);
        other.extend([2, 2, 3]);

        unique.append(&mut other);
        assert_eq!(unique.dll_dump(), [&1, &2, &3]);
        assert!(other.is_empty());
        unique.assert_invariants();
        other.assert_invariants();
    }

    #[test]
    fn clear_empties_and_allows_reuse() {
        let mut tree = DllAvlTree::from([1, 2, 3]);
        tree.clear();
        assert!(tree.is_empty());
        tree.assert_invariants();
        tree.insert(4);
        assert_eq!(tree.dll_dump(), vec![&4]);
    }

    #[test]
    fn debug_prints_as_set() {
        let tree = DllAvlTree::from([2, 1, 2]);
        assert_eq!(alloc::format!("{tree:?}"), "{1, 2, 2}");
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = DllAvlTree::from([1, 2, 3]);
        let copy = tree.clone();
        tree.remove(&2);
        assert_eq!(copy.dll_dump(), [&1, &2, &3]);
        assert_eq!(tree.dll_dump(), [&1, &3]);
    }
}
