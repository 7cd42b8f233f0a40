//! Maintenance of the ascending list threaded through the structural nodes
//! and of the equal chains hanging off them.

use super::handle::Handle;
use super::node::{Dir, Node};
use super::raw_tree::RawTree;

impl<T, C> RawTree<T, C> {
    /// Allocates `value` as a new leaf on `parent`'s `dir` side and threads it
    /// into the list next to `parent`.
    ///
    /// A left child is `parent`'s in-order predecessor and a right child its
    /// successor, so the list position follows directly from `dir`. Counts are
    /// refreshed up to the root; heights are left to the caller.
    pub(super) fn attach(&mut self, parent: Handle, dir: Dir, value: T) -> Handle {
        debug_assert!(self.node(parent).child(dir).is_none(), "`RawTree::attach()` - slot is occupied!");

        let new = self.nodes.alloc(Node::new(value));
        self.set_child_and_parent(parent, dir, Some(new));

        match dir {
            Dir::Left => self.link_before(parent, new),
            Dir::Right => self.link_after(parent, new),
        }

        self.refresh_counts(Some(parent));
        self.len += 1;
        new
    }

    /// Appends `value` at the end of `primary`'s equal chain.
    pub(super) fn attach_equal(&mut self, primary: Handle, value: T) -> Handle {
        let mut last = primary;
        while let Some(next) = self.node(last).equal() {
            last = next;
        }

        let new = self.nodes.alloc(Node::new(value));
        self.node_mut(last).set_equal(Some(new));

        let count = self.node(primary).count() + 1;
        self.node_mut(primary).set_count(count);
        self.refresh_counts(Some(primary));
        self.len += 1;
        new
    }

    // Threads `new` into the list just before `at`.
    fn link_before(&mut self, at: Handle, new: Handle) {
        let prev = self.node(at).prev();
        self.node_mut(new).set_prev(prev);
        self.node_mut(new).set_next(Some(at));
        self.node_mut(at).set_prev(Some(new));
        match prev {
            Some(prev) => self.node_mut(prev).set_next(Some(new)),
            None => self.head = Some(new),
        }
    }

    // Threads `new` into the list just after `at`.
    fn link_after(&mut self, at: Handle, new: Handle) {
        let next = self.node(at).next();
        self.node_mut(new).set_next(next);
        self.node_mut(new).set_prev(Some(at));
        self.node_mut(at).set_next(Some(new));
        match next {
            Some(next) => self.node_mut(next).set_prev(Some(new)),
            None => self.tail = Some(new),
        }
    }

    /// Removes `handle` from the ascending list, joining its neighbours.
    pub(super) fn unlink(&mut self, handle: Handle) {
        let (prev, next) = {
            let node = self.node(handle);
            (node.prev(), node.next())
        };

        match prev {
            Some(prev) => self.node_mut(prev).set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).set_prev(prev),
            None => self.tail = prev,
        }

        let node = self.node_mut(handle);
        node.set_prev(None);
        node.set_next(None);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use crate::{Natural, Redundancy};

    use super::*;

    fn list(tree: &RawTree<i32, Natural>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut current = tree.head();
        while let Some(handle) = current {
            out.push(*tree.node(handle).value());
            current = tree.node(handle).next();
        }
        out
    }

    fn list_backwards(tree: &RawTree<i32, Natural>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut current = tree.tail();
        while let Some(handle) = current {
            out.push(*tree.node(handle).value());
            current = tree.node(handle).prev();
        }
        out
    }

    #[test]
    fn attach_threads_children_beside_parent() {
        let mut tree = RawTree::new(Natural, Redundancy::Unique);
        assert!(tree.insert(10));
        let root = tree.root().unwrap();

        tree.attach(root, Dir::Left, 5);
        tree.attach(root, Dir::Right, 15);

        assert_eq!(list(&tree), [5, 10, 15]);
        assert_eq!(list_backwards(&tree), [15, 10, 5]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.node(root).descendants(), 2);
    }

    #[test]
    fn attach_equal_keeps_insertion_order() {
        let mut tree = RawTree::new(Natural, Redundancy::Redundant);
        assert!(tree.insert(7));
        let root = tree.root().unwrap();

        let second = tree.attach_equal(root, 7);
        let third = tree.attach_equal(root, 7);

        assert_eq!(tree.node(root).equal(), Some(second));
        assert_eq!(tree.node(second).equal(), Some(third));
        assert_eq!(tree.node(root).count(), 3);
        assert_eq!(tree.node(root).weight(), 3);
        assert_eq!(tree.node(root).descendants(), 0);
        assert_eq!(tree.len(), 3);
        assert_eq!(list(&tree), [7]);
    }

    #[test]
    fn unlink_joins_neighbours() {
        let mut tree = RawTree::new(Natural, Redundancy::Unique);
        for value in [2, 1, 3] {
            tree.insert(value);
        }

        let middle = tree.find(&2).unwrap();
        tree.unlink(middle);
        assert_eq!(list(&tree), [1, 3]);
        assert_eq!(list_backwards(&tree), [3, 1]);

        let first = tree.head().unwrap();
        tree.unlink(first);
        assert_eq!(list(&tree), [3]);
        assert_eq!(tree.head(), tree.tail());
    }
}
