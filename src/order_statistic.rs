/// A zero-based rank into the sorted order of a tree.
///
/// Under [`Redundancy::Redundant`] every duplicate occupies its own rank.
///
/// # Examples
///
/// ```
/// use dllbest::{DllAvlTree, Rank, Redundancy};
///
/// let mut tree = DllAvlTree::new(Redundancy::Redundant);
/// tree.extend([20, 10, 20]);
///
/// assert_eq!(tree[Rank(0)], 10);
/// assert_eq!(tree[Rank(2)], 20);
/// ```
///
/// [`Redundancy::Redundant`]: crate::Redundancy::Redundant
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
