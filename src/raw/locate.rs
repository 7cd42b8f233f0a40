use core::cmp::Ordering;

use super::handle::Handle;
use super::raw_tree::RawTree;
use crate::Comparator;

impl<T, C> RawTree<T, C> {
    /// Descends from `node` through left children to the smallest node of its subtree.
    pub(crate) fn find_smallest(&self, node: Handle) -> Handle {
        let mut current = node;
        while let Some(left) = self.node(current).left() {
            current = left;
        }
        current
    }

    /// Descends from `node` through right children to the biggest node of its subtree.
    pub(crate) fn find_biggest(&self, node: Handle) -> Handle {
        let mut current = node;
        while let Some(right) = self.node(current).right() {
            current = right;
        }
        current
    }

    /// Gets the value at `index` in ascending order, duplicates included.
    ///
    /// The descent works on subtree weights: everything in the left subtree
    /// ranks below a node, then the node's own equal chain, then the right
    /// subtree. Under `Unique` every weight is `descendants + 1`.
    pub(crate) fn get_by_rank(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = index;

        loop {
            let node = self.node(current);
            let below = self.weight_of(node.left());

            if remaining < below {
                current = node.left()?;
                continue;
            }
            remaining -= below;

            if remaining < node.count() {
                let mut holder = current;
                for _ in 0..remaining {
                    holder = self.node(holder).equal()?;
                }
                return Some(self.node(holder).value());
            }
            remaining -= node.count();

            if let Some(right) = node.right() {
                current = right;
            } else {
                debug_assert!(false, "get_by_rank: weight invariant violated at rank {index}");
                return None;
            }
        }
    }
}

impl<T, C: Comparator<T>> RawTree<T, C> {
    /// Finds the structural node whose key compares equal to `value`.
    pub(crate) fn find(&self, value: &T) -> Option<Handle> {
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.node(handle);
            current = match self.compare.compare(value, node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(handle),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Returns the rank of the first value equal to `value`, or `None` if the
    /// key is absent.
    pub(crate) fn rank_of(&self, value: &T) -> Option<usize> {
        let mut current = self.root;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.node(handle);
            match self.compare.compare(value, node.value()) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(rank + self.weight_of(node.left())),
                Ordering::Greater => {
                    rank += self.weight_of(node.left()) + node.count();
                    current = node.right();
                }
            }
        }

        None
    }

    /// Finds the first structural node whose key is `>= lower`.
    ///
    /// Every time the descent turns left it passes a node that is above
    /// `lower`; the last such node is the answer when no key equals `lower`.
    pub(crate) fn lower_bound(&self, lower: &T) -> Option<Handle> {
        let mut current = self.root;
        let mut candidate = None;

        while let Some(handle) = current {
            let node = self.node(handle);
            match self.compare.compare(node.value(), lower) {
                Ordering::Less => current = node.right(),
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    candidate = Some(handle);
                    current = node.left();
                }
            }
        }

        candidate
    }

    /// Finds the last structural node whose key is `<= upper`.
    pub(crate) fn upper_bound(&self, upper: &T) -> Option<Handle> {
        let mut current = self.root;
        let mut candidate = None;

        while let Some(handle) = current {
            let node = self.node(handle);
            match self.compare.compare(node.value(), upper) {
                Ordering::Greater => current = node.left(),
                Ordering::Equal => return Some(handle),
                Ordering::Less => {
                    candidate = Some(handle);
                    current = node.right();
                }
            }
        }

        candidate
    }

    /// Finds the first and last structural nodes with keys in `lower..=upper`,
    /// or `None` if no key falls inside.
    pub(crate) fn range_bounds(&self, lower: &T, upper: &T) -> Option<(Handle, Handle)> {
        if self.compare.compare(lower, upper) == Ordering::Greater {
            return None;
        }

        let first = self.lower_bound(lower)?;
        let last = self.upper_bound(upper)?;
        if self.compare.compare(self.node(first).value(), self.node(last).value()) == Ordering::Greater {
            return None;
        }

        Some((first, last))
    }
}
