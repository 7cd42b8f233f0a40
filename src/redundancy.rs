/// How a [`DllAvlTree`] treats a value whose key compares equal to one
/// already stored.
///
/// [`DllAvlTree`]: crate::DllAvlTree
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Redundancy {
    /// Equal keys are chained behind the first node that holds the key. Every
    /// value is kept, and traversals emit them in insertion order.
    #[default]
    Redundant,
    /// Equal keys are rejected: the insert is a no-op and the new value is
    /// dropped.
    Unique,
}

impl Redundancy {
    /// Returns `true` if equal keys are kept.
    #[must_use]
    pub const fn allows_duplicates(self) -> bool {
        matches!(self, Redundancy::Redundant)
    }
}
