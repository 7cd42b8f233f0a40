//! Rotations and height maintenance.
//!
//! Naming follows the classic AVL case table. For a node `A` that has become
//! unbalanced, `B` is its taller child and `C` is the grandchild on the side
//! named by the second letter:
//!
//! | case | `A` is   | `B` is   | new subtree root |
//! |------|----------|----------|------------------|
//! | RR   | right-heavy | right-heavy or even | `B` |
//! | RL   | right-heavy | left-heavy  | `C` |
//! | LL   | left-heavy  | left-heavy or even  | `B` |
//! | LR   | left-heavy  | right-heavy | `C` |

use super::handle::Handle;
use super::node::Dir;
use super::raw_tree::RawTree;

impl<T, C> RawTree<T, C> {
    /// Restores the AVL condition at `a`, returning the root of the rotated
    /// subtree (`a` itself if it was already balanced).
    ///
    /// A single insert or removal moves a balance factor by at most one, so
    /// `|balance(a)| <= 2` and the four cases below are exhaustive.
    pub(super) fn rebalance(&mut self, a: Handle) -> Handle {
        let balance = self.balance(a);
        debug_assert!(balance.abs() <= 2, "`RawTree::rebalance()` - balance {balance} out of range");

        let top = if balance <= -2 {
            let b = self.node(a).right().expect("right-heavy node has a right child");
            if self.balance(b) <= 0 { self.rotate_rr(a) } else { self.rotate_rl(a) }
        } else if balance >= 2 {
            let b = self.node(a).left().expect("left-heavy node has a left child");
            if self.balance(b) >= 0 { self.rotate_ll(a) } else { self.rotate_lr(a) }
        } else {
            a
        };

        debug_assert!(self.is_balanced(top), "rotation left {top:?} unbalanced");
        top
    }

    pub(super) fn rotate_rr(&mut self, a: Handle) -> Handle {
        log::trace!("rotate RR at {a:?}");
        self.rotate_single(a, Dir::Right)
    }

    pub(super) fn rotate_ll(&mut self, a: Handle) -> Handle {
        log::trace!("rotate LL at {a:?}");
        self.rotate_single(a, Dir::Left)
    }

    pub(super) fn rotate_rl(&mut self, a: Handle) -> Handle {
        log::trace!("rotate RL at {a:?}");
        self.rotate_double(a, Dir::Right)
    }

    pub(super) fn rotate_lr(&mut self, a: Handle) -> Handle {
        log::trace!("rotate LR at {a:?}");
        self.rotate_double(a, Dir::Left)
    }

    // Lifts `a`'s `heavy` child `b` above `a`.
    //
    // - `b`'s inner subtree (on the `!heavy` side) moves across to `a`.
    // - `a` becomes `b`'s `!heavy` child.
    fn rotate_single(&mut self, a: Handle, heavy: Dir) -> Handle {
        let f = self.node(a).parent();
        let b = self.node(a).child(heavy).expect("single rotation needs a heavy child");
        let across = self.node(b).child(!heavy);

        self.set_child_and_parent(a, heavy, across);
        self.set_child_and_parent(b, !heavy, Some(a));

        self.replace_child_or_set_root(f, a, Some(b));
        self.node_mut(b).set_parent(f);

        // `a` is now below `b`, so it goes first.
        self.update(a);
        self.update(b);
        self.recompute_heights(f);

        b
    }

    // Lifts `a`'s inner grandchild `c` above both `a` and `b`.
    //
    // - `c`'s `heavy` subtree moves to `b`'s `!heavy` side.
    // - `c`'s `!heavy` subtree moves to `a`'s `heavy` side.
    // - `a` and `b` become `c`'s `!heavy` and `heavy` children.
    fn rotate_double(&mut self, a: Handle, heavy: Dir) -> Handle {
        let f = self.node(a).parent();
        let b = self.node(a).child(heavy).expect("double rotation needs a heavy child");
        let c = self.node(b).child(!heavy).expect("double rotation needs an inner grandchild");

        let c_outer = self.node(c).child(heavy);
        let c_inner = self.node(c).child(!heavy);

        self.set_child_and_parent(b, !heavy, c_outer);
        self.set_child_and_parent(a, heavy, c_inner);
        self.set_child_and_parent(c, heavy, Some(b));
        self.set_child_and_parent(c, !heavy, Some(a));

        self.replace_child_or_set_root(f, a, Some(c));
        self.node_mut(c).set_parent(f);

        self.update(a);
        self.update(b);
        self.update(c);
        self.recompute_heights(f);

        c
    }

    /// Recomputes heights from `start` toward the root, stopping at the first
    /// node whose height did not change.
    pub(super) fn recompute_heights(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            let before = self.node(handle).height();
            let after = self.computed_height(handle);
            if before == after {
                break;
            }
            self.node_mut(handle).set_height(after);
            current = self.node(handle).parent();
        }
    }
}
