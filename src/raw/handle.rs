use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// An opaque reference to a structural node of a [`DllAvlTree`].
///
/// Handles are returned by [`NodeRef::handle`] and accepted by
/// [`DllAvlTree::remove_at`] and [`DllAvlTree::node`]. A handle stays valid
/// while its node is in the tree: rotations and successor swaps relocate nodes
/// without changing their handles. Once the node is removed its slot may be
/// reused, so holding on to a handle past removal is a logic error (but never
/// undefined behavior).
///
/// [`DllAvlTree`]: crate::DllAvlTree
/// [`DllAvlTree::remove_at`]: crate::DllAvlTree::remove_at
/// [`DllAvlTree::node`]: crate::DllAvlTree::node
/// [`NodeRef::handle`]: crate::NodeRef::handle
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // `index + 1` is never zero and fits after the bound check.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawHandle).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
