use alloc::vec::Vec;

use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_tree::RawTree;

// An AVL tree of height 32 already needs billions of nodes.
type Stack = SmallVec<[Handle; 32]>;

impl<T, C> RawTree<T, C> {
    /// Values in node-left-right order. Each node's duplicates follow it.
    pub(crate) fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Stack = SmallVec::new();
        stack.extend(self.root);

        while let Some(handle) = stack.pop() {
            self.push_values(handle, &mut out);
            let node = self.node(handle);
            stack.extend(node.right());
            stack.extend(node.left());
        }

        out
    }

    /// Values in ascending order, found by walking the tree.
    pub(crate) fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Stack = SmallVec::new();
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.node(handle).left();
            }
            let Some(handle) = stack.pop() else { break };
            self.push_values(handle, &mut out);
            current = self.node(handle).right();
        }

        out
    }

    /// Values in left-right-node order.
    pub(crate) fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Stack = SmallVec::new();
        let mut last: Option<Handle> = None;
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.node(handle).left();
            }
            let Some(&top) = stack.last() else { break };
            let right = self.node(top).right();

            if right.is_some() && right != last {
                current = right;
            } else {
                stack.pop();
                self.push_values(top, &mut out);
                last = Some(top);
            }
        }

        out
    }

    /// Values in ascending order, found by walking the `next` links from the head.
    pub(crate) fn dll_dump(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(handle) = current {
            self.push_values(handle, &mut out);
            current = self.node(handle).next();
        }
        out
    }

    /// Structural nodes in pre-order.
    pub(crate) fn structural_handles(&self) -> Vec<Handle> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack: Stack = SmallVec::new();
        stack.extend(self.root);

        while let Some(handle) = stack.pop() {
            out.push(handle);
            let node = self.node(handle);
            stack.extend(node.right());
            stack.extend(node.left());
        }

        out
    }

    /// Handles of the values held by structural node `handle`, its own first.
    pub(crate) fn chain(&self, handle: Handle) -> Chain<'_, T, C> {
        Chain { tree: self, next: Some(handle) }
    }

    fn push_values<'a>(&'a self, handle: Handle, out: &mut Vec<&'a T>) {
        out.extend(self.chain(handle).map(|h| self.node(h).value()));
    }
}

/// Iterator over a node and its equal chain.
pub(crate) struct Chain<'a, T, C> {
    tree: &'a RawTree<T, C>,
    next: Option<Handle>,
}

impl<T, C> Iterator for Chain<'_, T, C> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let current = self.next?;
        self.next = self.tree.node(current).equal();
        Some(current)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Natural, Redundancy};

    use super::*;

    fn build(redundancy: Redundancy, values: &[i32]) -> RawTree<i32, Natural> {
        let mut tree = RawTree::new(Natural, redundancy);
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    #[test]
    fn empty_traversals() {
        let tree = build(Redundancy::Unique, &[]);
        assert!(tree.pre_order().is_empty());
        assert!(tree.in_order().is_empty());
        assert!(tree.post_order().is_empty());
        assert!(tree.dll_dump().is_empty());
        assert!(tree.structural_handles().is_empty());
    }

    #[test]
    fn three_orders_of_a_perfect_tree() {
        //       4
        //     2   6
        //    1 3 5 7
        let tree = build(Redundancy::Unique, &[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.pre_order(), [&4, &2, &1, &3, &6, &5, &7]);
        assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6, &7]);
        assert_eq!(tree.post_order(), [&1, &3, &2, &5, &7, &6, &4]);
        assert_eq!(tree.dll_dump(), tree.in_order());
    }

    #[test]
    fn duplicates_follow_their_node() {
        let tree = build(Redundancy::Redundant, &[2, 1, 3, 2, 1]);
        assert_eq!(tree.pre_order(), [&2, &2, &1, &1, &3]);
        assert_eq!(tree.post_order(), [&1, &1, &3, &2, &2]);
        assert_eq!(tree.dll_dump(), [&1, &1, &2, &2, &3]);
        assert_eq!(tree.chain(tree.root().unwrap()).count(), 2);
    }

    #[test]
    fn list_walk_matches_tree_walk_after_rotations() {
        let tree = build(Redundancy::Redundant, &[9, 8, 7, 6, 5, 4, 3, 2, 1, 5, 5]);
        assert_eq!(tree.dll_dump(), tree.in_order());
        assert_eq!(tree.structural_handles().len(), tree.node_count());
    }
}
