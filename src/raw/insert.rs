use core::cmp::Ordering;

use super::handle::Handle;
use super::node::{Dir, Node};
use super::raw_tree::RawTree;
use crate::Comparator;

impl<T, C: Comparator<T>> RawTree<T, C> {
    /// Inserts `value`, returning `false` if it was rejected as a duplicate.
    ///
    /// Under `Redundant` an equal key joins the existing node's chain and the
    /// tree shape is untouched. Otherwise the value becomes a new leaf and at
    /// most one rotation restores balance.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(value));
            self.root = Some(handle);
            self.head = Some(handle);
            self.tail = Some(handle);
            self.len = 1;
            return true;
        };

        loop {
            let dir = match self.compare.compare(&value, self.node(current).value()) {
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
                Ordering::Equal => {
                    if !self.redundancy.allows_duplicates() {
                        return false;
                    }
                    self.attach_equal(current, value);
                    return true;
                }
            };

            if let Some(child) = self.node(current).child(dir) {
                current = child;
            } else {
                self.attach(current, dir, value);
                self.retrace_after_insert(current);
                return true;
            }
        }
    }

    /// Inserts `value` only if no equal key is present, whatever the policy.
    pub(crate) fn try_insert(&mut self, value: T) -> bool {
        if self.find(&value).is_some() {
            return false;
        }
        self.insert(value)
    }

    // Walks up from the new leaf's parent. The first unbalanced ancestor gets
    // one rotation, which restores the subtree's pre-insert height, so nothing
    // above it changes. A node whose height did not grow stops the walk too.
    fn retrace_after_insert(&mut self, parent: Handle) {
        let mut current = Some(parent);
        while let Some(handle) = current {
            let before = self.node(handle).height();
            let after = self.computed_height(handle);
            self.node_mut(handle).set_height(after);

            if !self.is_balanced(handle) {
                self.rebalance(handle);
                break;
            }
            if before == after {
                break;
            }
            current = self.node(handle).parent();
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use crate::{Natural, Redundancy};

    use super::*;

    #[test]
    fn first_insert_sets_root_head_and_tail() {
        let mut tree = RawTree::new(Natural, Redundancy::Unique);
        assert!(tree.insert(1));
        let root = tree.root().unwrap();
        assert_eq!(tree.head(), Some(root));
        assert_eq!(tree.tail(), Some(root));
        assert_eq!(tree.len(), 1);
        tree.assert_invariants();
    }

    #[test]
    fn unique_rejects_equal_keys() {
        let mut tree = RawTree::new(Natural, Redundancy::Unique);
        assert!(tree.insert(4));
        assert!(!tree.insert(4));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node_count(), 1);
        tree.assert_invariants();
    }

    #[test]
    fn redundant_chains_equal_keys() {
        let mut tree = RawTree::new(Natural, Redundancy::Redundant);
        for value in [4, 2, 4, 4] {
            assert!(tree.insert(value));
        }
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.in_order(), [&2, &4, &4, &4]);
        tree.assert_invariants();
    }

    #[test]
    fn try_insert_ignores_policy() {
        let mut tree = RawTree::new(Natural, Redundancy::Redundant);
        assert!(tree.try_insert(3));
        assert!(!tree.try_insert(3));
        assert!(tree.insert(3));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn ascending_inserts_stay_logarithmic() {
        let mut tree = RawTree::new(Natural, Redundancy::Unique);
        for value in 0..1023 {
            tree.insert(value);
        }
        tree.assert_invariants();
        // 1023 nodes fit in a perfect tree of height 9.
        assert_eq!(tree.node(tree.root().unwrap()).height(), 9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn inserts_keep_invariants(values in prop::collection::vec(-50i32..50, 0..200), unique in any::<bool>()) {
            let redundancy = if unique { Redundancy::Unique } else { Redundancy::Redundant };
            let mut tree = RawTree::new(Natural, redundancy);
            let mut model = Vec::new();

            for value in values {
                let fresh = !model.contains(&value);
                prop_assert_eq!(tree.insert(value), fresh || !unique);
                if fresh || !unique {
                    model.push(value);
                }
                tree.assert_invariants();
            }

            model.sort_unstable();
            let got: Vec<i32> = tree.in_order().into_iter().copied().collect();
            prop_assert_eq!(got, model);
        }
    }
}
