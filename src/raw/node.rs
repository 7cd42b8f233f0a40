use core::ops::Not;

use super::handle::Handle;

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Not for Dir {
    type Output = Dir;

    fn not(self) -> Self::Output {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// A tree node.
///
/// A node is either *structural* (reachable from the root through child links
/// and threaded into the `prev`/`next` list) or a *duplicate* hanging off a
/// structural node's `equal` chain. Duplicates only use `value` and `equal`;
/// every other field keeps its fresh state.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    value: T,
    parent: Option<Handle>,
    children: [Option<Handle>; 2],
    // Neighbours in the ascending list of structural nodes.
    prev: Option<Handle>,
    next: Option<Handle>,
    // Next node holding an equal key.
    equal: Option<Handle>,
    // Leaves are 0; an absent subtree counts as -1.
    height: i8,
    // Structural nodes below this one, equal chains excluded.
    descendants: usize,
    // Values held by this node: itself plus its equal chain.
    count: usize,
    // Sum of `count` over the whole subtree.
    weight: usize,
}

impl<T> Node<T> {
    /// Creates a detached leaf holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            children: [None; 2],
            prev: None,
            next: None,
            equal: None,
            height: 0,
            descendants: 0,
            count: 1,
            weight: 1,
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn child(&self, dir: Dir) -> Option<Handle> {
        self.children[dir as usize]
    }

    pub(crate) fn set_child(&mut self, dir: Dir, child: Option<Handle>) {
        self.children[dir as usize] = child;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.child(Dir::Left)
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.child(Dir::Right)
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<Handle> {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: Option<Handle>) {
        self.prev = prev;
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<Handle> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<Handle>) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn equal(&self) -> Option<Handle> {
        self.equal
    }

    pub(crate) fn set_equal(&mut self, equal: Option<Handle>) {
        self.equal = equal;
    }

    #[inline]
    pub(crate) fn height(&self) -> i8 {
        self.height
    }

    pub(crate) fn set_height(&mut self, height: i8) {
        self.height = height;
    }

    #[inline]
    pub(crate) fn descendants(&self) -> usize {
        self.descendants
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    #[inline]
    pub(crate) fn weight(&self) -> usize {
        self.weight
    }

    /// Stores counts derived from the children's subtrees.
    pub(crate) fn set_counts(&mut self, descendants: usize, weight: usize) {
        self.descendants = descendants;
        self.weight = weight;
    }

    /// Returns true if this node has no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }

    /// Returns true if this node has exactly one child.
    pub(crate) fn is_branch(&self) -> bool {
        self.left().is_some() != self.right().is_some()
    }

    /// Returns which side `child` hangs from.
    ///
    /// # Panics
    ///
    /// Panics if `child` is not a child of this node.
    pub(crate) fn which_child(&self, child: Handle) -> Dir {
        if self.left() == Some(child) {
            Dir::Left
        } else {
            assert_eq!(self.right(), Some(child), "`Node::which_child()` - not a child of this node!");
            Dir::Right
        }
    }
}
