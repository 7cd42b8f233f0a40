use super::handle::Handle;
use super::node::Dir;
use super::raw_tree::RawTree;
use crate::Comparator;

impl<T, C> RawTree<T, C> {
    /// Removes one value from the structural node `handle`.
    ///
    /// If the node carries duplicates, the oldest value leaves and the next
    /// one in the chain takes its place; the tree shape is untouched. Otherwise
    /// the node itself is unlinked, removed from the tree and every ancestor
    /// is rebalanced on the way to the root.
    ///
    /// Returns `None` if `handle` is not a live structural node of this tree.
    pub(crate) fn remove_at(&mut self, handle: Handle) -> Option<T> {
        if !self.is_structural(handle) {
            return None;
        }
        self.len -= 1;

        if let Some(duplicate) = self.node(handle).equal() {
            return Some(self.promote_duplicate(handle, duplicate));
        }

        self.unlink(handle);

        let (two_children, leaf) = {
            let node = self.node(handle);
            (node.left().is_some() && node.right().is_some(), node.is_leaf())
        };
        if two_children {
            log::trace!("remove {handle:?}: two children, swapping with successor");
            self.swap_with_successor(handle);
        } else if leaf {
            log::trace!("remove {handle:?}: leaf");
        } else {
            log::trace!("remove {handle:?}: branch");
        }

        // `handle` now has at most one child.
        let (parent, child) = {
            let node = self.node(handle);
            debug_assert!(!(node.left().is_some() && node.right().is_some()));
            (node.parent(), node.left().or(node.right()))
        };

        self.replace_child_or_set_root(parent, handle, child);
        if let Some(child) = child {
            self.node_mut(child).set_parent(parent);
        }

        self.refresh_counts(parent);
        self.retrace_after_remove(parent);

        Some(self.nodes.take(handle).into_value())
    }

    /// Removes one value of the biggest key.
    pub(crate) fn dequeue(&mut self) -> Option<T> {
        let root = self.root?;
        let biggest = self.find_biggest(root);
        debug_assert_eq!(Some(biggest), self.tail, "tail must be the biggest node");
        self.remove_at(biggest)
    }

    // Moves the first duplicate's value into `primary` and frees the
    // duplicate's slot, returning the value `primary` held.
    fn promote_duplicate(&mut self, primary: Handle, duplicate: Handle) -> T {
        log::trace!("remove {primary:?}: promoting duplicate {duplicate:?}");

        let duplicate = self.nodes.take(duplicate);
        let rest = duplicate.equal();
        let promoted = duplicate.into_value();

        let count = self.node(primary).count() - 1;
        let node = self.node_mut(primary);
        let old = node.replace_value(promoted);
        node.set_equal(rest);
        node.set_count(count);

        self.refresh_counts(Some(primary));
        old
    }

    // Exchanges the tree positions of `node` (which has two children) and its
    // in-order successor. Values stay put so outstanding handles keep naming
    // the same values. Afterwards `node` has no left child.
    fn swap_with_successor(&mut self, node: Handle) {
        let (parent, left, right, height) = {
            let n = self.node(node);
            (n.parent(), n.left(), n.right().expect("two-child node has a right child"), n.height())
        };

        let successor = self.find_smallest(right);
        let (successor_parent, successor_right, successor_height) = {
            let s = self.node(successor);
            (s.parent().expect("successor sits below `node`"), s.right(), s.height())
        };

        self.replace_child_or_set_root(parent, node, Some(successor));
        self.node_mut(successor).set_parent(parent);
        self.set_child_and_parent(successor, Dir::Left, left);

        if successor_parent == node {
            self.set_child_and_parent(successor, Dir::Right, Some(node));
        } else {
            self.set_child_and_parent(successor, Dir::Right, Some(right));
            self.set_child_and_parent(successor_parent, Dir::Left, Some(node));
        }

        self.node_mut(node).set_child(Dir::Left, None);
        self.set_child_and_parent(node, Dir::Right, successor_right);

        self.node_mut(successor).set_height(height);
        self.node_mut(node).set_height(successor_height);
    }

    // Removal can shorten a subtree anywhere on the path and a rotation can
    // shorten it again, so the walk always runs to the root.
    fn retrace_after_remove(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            let height = self.computed_height(handle);
            self.node_mut(handle).set_height(height);

            let top = if self.is_balanced(handle) { handle } else { self.rebalance(handle) };
            current = self.node(top).parent();
        }
    }
}

impl<T, C: Comparator<T>> RawTree<T, C> {
    /// Removes one value equal to `value`.
    pub(crate) fn remove(&mut self, value: &T) -> Option<T> {
        let handle = self.find(value)?;
        self.remove_at(handle)
    }
}
