use super::arena::Arena;
use super::handle::Handle;
use super::node::{Dir, Node};
use crate::Redundancy;

/// The core AVL engine backing `DllAvlTree`.
///
/// The arena owns every node. `root` and the child links make up the owning
/// structure; `parent`, `prev`/`next`, `equal`, `head` and `tail` are plain
/// handles that are only ever followed, never used to decide reclamation.
#[derive(Clone)]
pub(crate) struct RawTree<T, C> {
    /// Arena storing structural nodes and equal-chain nodes alike.
    pub(super) nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
    /// Smallest structural node, the head of the ascending list.
    pub(super) head: Option<Handle>,
    /// Largest structural node, the tail of the ascending list.
    pub(super) tail: Option<Handle>,
    /// Number of stored values, duplicates included.
    pub(super) len: usize,
    pub(super) compare: C,
    pub(super) redundancy: Redundancy,
}

impl<T, C> RawTree<T, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(compare: C, redundancy: Redundancy) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            head: None,
            tail: None,
            len: 0,
            compare,
            redundancy,
        }
    }

    /// Creates a new tree with room for `capacity` values.
    pub(crate) fn with_capacity(compare: C, redundancy: Redundancy, capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            head: None,
            tail: None,
            len: 0,
            compare,
            redundancy,
        }
    }

    /// Returns the number of stored values.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of structural nodes.
    pub(crate) fn node_count(&self) -> usize {
        self.root.map_or(0, |root| self.node(root).descendants() + 1)
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn redundancy(&self) -> Redundancy {
        self.redundancy
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.compare
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn head(&self) -> Option<Handle> {
        self.head
    }

    pub(crate) fn tail(&self) -> Option<Handle> {
        self.tail
    }

    /// Drops every value while keeping the arena's allocation.
    pub(crate) fn clear(&mut self) {
        log::trace!("clear: dropping {} values", self.len);
        self.nodes.clear();
        self.root = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns a reference to a node by handle.
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(super) fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        self.nodes.get_mut(handle)
    }

    /// Returns the arena for read-only views.
    pub(crate) fn arena(&self) -> &Arena<Node<T>> {
        &self.nodes
    }

    /// Returns true if `handle` is a live structural node of this tree.
    ///
    /// Equal-chain nodes and free slots are rejected. Runs in O(1).
    pub(crate) fn is_structural(&self, handle: Handle) -> bool {
        if !self.nodes.contains(handle) {
            return false;
        }

        match self.node(handle).parent() {
            None => self.root == Some(handle),
            Some(parent) => {
                self.nodes.contains(parent)
                    && (self.node(parent).left() == Some(handle) || self.node(parent).right() == Some(handle))
            }
        }
    }

    /// Height of an optional subtree, `-1` when absent.
    #[inline]
    pub(super) fn height_of(&self, node: Option<Handle>) -> i8 {
        node.map_or(-1, |h| self.node(h).height())
    }

    /// Structural size of an optional subtree, `0` when absent.
    #[inline]
    pub(super) fn size_of(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |h| self.node(h).descendants() + 1)
    }

    /// Value count of an optional subtree, `0` when absent.
    #[inline]
    pub(super) fn weight_of(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |h| self.node(h).weight())
    }

    /// Left height minus right height.
    #[inline]
    pub(crate) fn balance(&self, handle: Handle) -> i8 {
        let node = self.node(handle);
        self.height_of(node.left()) - self.height_of(node.right())
    }

    #[inline]
    pub(super) fn is_balanced(&self, handle: Handle) -> bool {
        self.balance(handle).abs() <= 1
    }

    /// Height `handle` should have given its children.
    pub(super) fn computed_height(&self, handle: Handle) -> i8 {
        let node = self.node(handle);
        1 + self.height_of(node.left()).max(self.height_of(node.right()))
    }

    /// Recomputes height, descendants and weight of `handle` from its children.
    pub(super) fn update(&mut self, handle: Handle) {
        let height = self.computed_height(handle);
        let (left, right, count) = {
            let node = self.node(handle);
            (node.left(), node.right(), node.count())
        };
        let descendants = self.size_of(left) + self.size_of(right);
        let weight = self.weight_of(left) + count + self.weight_of(right);

        let node = self.node_mut(handle);
        node.set_height(height);
        node.set_counts(descendants, weight);
    }

    /// Recomputes descendants and weight on every node from `start` to the root.
    ///
    /// Counts change all the way up on any insert or removal, so this walk
    /// never stops early.
    pub(super) fn refresh_counts(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            let (left, right, count, parent) = {
                let node = self.node(handle);
                (node.left(), node.right(), node.count(), node.parent())
            };
            let descendants = self.size_of(left) + self.size_of(right);
            let weight = self.weight_of(left) + count + self.weight_of(right);
            self.node_mut(handle).set_counts(descendants, weight);
            current = parent;
        }
    }

    /// Points `parent`'s link at `old_child` to `new_child`, or makes
    /// `new_child` the root when `parent` is `None`.
    ///
    /// `new_child`'s parent pointer is not updated.
    pub(super) fn replace_child_or_set_root(&mut self, parent: Option<Handle>, old_child: Handle, new_child: Option<Handle>) {
        if let Some(parent) = parent {
            let dir = self.node(parent).which_child(old_child);
            self.node_mut(parent).set_child(dir, new_child);
        } else {
            debug_assert_eq!(self.root, Some(old_child), "parentless node must be the root");
            self.root = new_child;
        }
    }

    /// Sets `parent`'s `dir` child and the child's back link.
    pub(super) fn set_child_and_parent(&mut self, parent: Handle, dir: Dir, child: Option<Handle>) {
        self.node_mut(parent).set_child(dir, child);
        if let Some(child) = child {
            self.node_mut(child).set_parent(Some(parent));
        }
    }
}
