use core::fmt;

use super::iter::Values;
use crate::raw::{Arena, Handle, Node};

/// A read-only view of a structural node in a [`DllAvlTree`].
///
/// Obtained from [`DllAvlTree::root`], [`DllAvlTree::find`] or
/// [`DllAvlTree::node`]. Navigation methods return views of the neighbouring
/// nodes in the tree (`left`, `right`, `parent`) and in the ascending list
/// (`prev`, `next`).
///
/// [`DllAvlTree`]: crate::DllAvlTree
/// [`DllAvlTree::root`]: crate::DllAvlTree::root
/// [`DllAvlTree::find`]: crate::DllAvlTree::find
/// [`DllAvlTree::node`]: crate::DllAvlTree::node
pub struct NodeRef<'a, T> {
    arena: &'a Arena<Node<T>>,
    handle: Handle,
}

impl<'a, T> NodeRef<'a, T> {
    pub(super) fn new(arena: &'a Arena<Node<T>>, handle: Handle) -> Self {
        NodeRef { arena, handle }
    }

    fn node(&self) -> &'a Node<T> {
        self.arena.get(self.handle)
    }

    fn view(&self, handle: Option<Handle>) -> Option<NodeRef<'a, T>> {
        handle.map(|handle| NodeRef::new(self.arena, handle))
    }

    /// Returns the handle of this node, for use with
    /// [`DllAvlTree::remove_at`](crate::DllAvlTree::remove_at).
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Returns the node's primary value, the oldest of its equal values.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.node().value()
    }

    /// Height of the subtree rooted here. Leaves have height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        usize::from(self.node().height().unsigned_abs())
    }

    /// Left subtree height minus right subtree height, always in `-1..=1`.
    #[must_use]
    pub fn balance(&self) -> i8 {
        let height = |child: Option<Handle>| child.map_or(-1, |h| self.arena.get(h).height());
        height(self.node().left()) - height(self.node().right())
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns true if this node has exactly one child.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.node().is_branch()
    }

    /// Number of values with this node's key, duplicates included.
    #[must_use]
    pub fn multiplicity(&self) -> usize {
        self.node().count()
    }

    /// Iterates over this node's values in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllbest::{DllAvlTree, Redundancy};
    ///
    /// let mut tree = DllAvlTree::new(Redundancy::Redundant);
    /// tree.extend([7, 7, 7]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.multiplicity(), 3);
    /// assert_eq!(root.values().count(), 3);
    /// ```
    #[must_use]
    pub fn values(&self) -> Values<'a, T> {
        Values::new(self.arena, self.handle)
    }

    /// The left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().left())
    }

    /// The right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().right())
    }

    /// The parent node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().parent())
    }

    /// The next smaller node in the ascending list.
    #[must_use]
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().prev())
    }

    /// The next bigger node in the ascending list.
    #[must_use]
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.view(self.node().next())
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena) && self.handle == other.handle
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle)
            .field("value", self.value())
            .field("height", &self.height())
            .field("multiplicity", &self.multiplicity())
            .finish()
    }
}
