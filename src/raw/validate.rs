use core::cmp::Ordering;

use super::handle::Handle;
use super::raw_tree::RawTree;
use crate::Comparator;

impl<T, C: Comparator<T>> RawTree<T, C> {
    /// Checks every structural invariant, panicking on the first violation.
    ///
    /// Walks the whole tree, so this is O(n).
    pub(crate) fn assert_invariants(&self) {
        let Some(root) = self.root else {
            assert!(self.head.is_none(), "empty tree has a head");
            assert!(self.tail.is_none(), "empty tree has a tail");
            assert_eq!(self.len, 0, "empty tree has a non-zero len");
            assert_eq!(self.nodes.len(), 0, "empty tree still holds nodes");
            return;
        };
        assert!(self.node(root).parent().is_none(), "root has a parent");

        let mut values = 0;
        for handle in self.structural_handles() {
            self.check_node(handle);
            values += self.check_chain(handle);
        }

        // Every value occupies exactly one slot.
        assert_eq!(values, self.len, "len does not match stored values");
        assert_eq!(values, self.nodes.len(), "arena holds unreachable nodes");
        assert_eq!(self.node(root).weight(), self.len, "root weight does not match len");

        self.check_list();
    }

    fn check_node(&self, handle: Handle) {
        let node = self.node(handle);

        for child in [node.left(), node.right()].into_iter().flatten() {
            assert_eq!(self.node(child).parent(), Some(handle), "child {child:?} does not point back to {handle:?}");
        }
        if let Some(left) = node.left() {
            assert_eq!(
                self.compare.compare(self.node(left).value(), node.value()),
                Ordering::Less,
                "left child of {handle:?} is not smaller"
            );
        }
        if let Some(right) = node.right() {
            assert_eq!(
                self.compare.compare(self.node(right).value(), node.value()),
                Ordering::Greater,
                "right child of {handle:?} is not bigger"
            );
        }

        assert_eq!(node.height(), self.computed_height(handle), "stale height at {handle:?}");
        assert!(self.is_balanced(handle), "{handle:?} is unbalanced ({})", self.balance(handle));
        assert_eq!(
            node.descendants(),
            self.size_of(node.left()) + self.size_of(node.right()),
            "stale descendants at {handle:?}"
        );
        assert_eq!(
            node.weight(),
            self.weight_of(node.left()) + node.count() + self.weight_of(node.right()),
            "stale weight at {handle:?}"
        );
    }

    // Returns the number of values held by `handle`.
    fn check_chain(&self, handle: Handle) -> usize {
        let primary = self.node(handle);
        let mut count = 1;
        let mut current = primary.equal();

        while let Some(duplicate) = current {
            let node = self.node(duplicate);
            assert_eq!(
                self.compare.compare(node.value(), primary.value()),
                Ordering::Equal,
                "chain of {handle:?} holds a different key"
            );
            assert!(
                node.parent().is_none() && node.is_leaf() && node.prev().is_none() && node.next().is_none(),
                "duplicate {duplicate:?} is linked into the tree"
            );
            count += 1;
            current = node.equal();
        }

        assert_eq!(primary.count(), count, "stale count at {handle:?}");
        count
    }

    fn check_list(&self) {
        let mut expected_prev = None;
        let mut current = self.head;
        let mut nodes = 0;

        while let Some(handle) = current {
            let node = self.node(handle);
            assert_eq!(node.prev(), expected_prev, "broken prev link at {handle:?}");
            if let Some(prev) = expected_prev {
                assert_eq!(
                    self.compare.compare(self.node(prev).value(), node.value()),
                    Ordering::Less,
                    "list is not strictly ascending at {handle:?}"
                );
            }
            nodes += 1;
            expected_prev = Some(handle);
            current = node.next();
        }

        assert_eq!(expected_prev, self.tail, "tail is not the last list node");
        assert_eq!(nodes, self.node_count(), "list length does not match node count");
    }
}
