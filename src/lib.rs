//! An AVL tree threaded with a sorted doubly linked list.
//!
//! [`DllAvlTree`] keeps its values in a height-balanced binary search tree and
//! at the same time links every tree node to its in-order neighbours. The
//! tree answers lookups, rank queries and range starts in O(log n); the list
//! gives O(1) access to the smallest and biggest values and a full ascending
//! walk without a stack.
//!
//! - [`insert`](DllAvlTree::insert) / [`try_insert`](DllAvlTree::try_insert) -
//!   add a value, honouring or overriding the duplicate policy
//! - [`remove`](DllAvlTree::remove) / [`remove_at`](DllAvlTree::remove_at) -
//!   remove by key or by node [`Handle`]
//! - [`get`](DllAvlTree::get) / [`rank_of`](DllAvlTree::rank_of) - rank and select
//! - [`range`](DllAvlTree::range) - every value between two inclusive bounds
//! - [`dequeue`](DllAvlTree::dequeue) - remove the biggest value, priority-queue style
//!
//! # Duplicates
//!
//! A tree is built with a [`Redundancy`]. Under [`Redundancy::Unique`] a value
//! whose key is already present is rejected. Under [`Redundancy::Redundant`] it
//! is chained behind the node holding that key; the tree shape does not
//! change, and the chain is emitted in insertion order by every traversal.
//!
//! # Example
//!
//! ```
//! use dllbest::{DllAvlTree, Rank, Redundancy};
//!
//! let mut tree = DllAvlTree::new(Redundancy::Redundant);
//! tree.extend([10, 20, 30, 20, 40, 50]);
//!
//! assert_eq!(tree.len(), 6);
//! assert_eq!(tree.node_count(), 5);
//! assert_eq!(tree.range(&15, &45).copied().collect::<Vec<_>>(), [20, 20, 30, 40]);
//! assert_eq!(tree[Rank(2)], 20);
//! assert_eq!(tree.first(), Some(&10));
//! assert_eq!(tree.dequeue(), Some(50));
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by [`Handle`]. Each node
//! stores its height, the number of structural nodes below it, and the number
//! of values in its subtree, all recomputed from its children whenever the
//! shape changes. Insertion rebalances with at most one rotation; removal
//! rebalances every ancestor up to the root.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod dll_avl_tree;
mod order_statistic;
mod raw;
mod redundancy;

pub use compare::{Comparator, Natural};
pub use dll_avl_tree::{DllAvlTree, Iter, NodeRef, Range, Values};
pub use order_statistic::Rank;
pub use raw::Handle;
pub use redundancy::Redundancy;
