use core::fmt;
use core::iter::FusedIterator;

use crate::raw::{Arena, Handle, Node};

// Walks the ascending list, emitting each structural node's value followed by
// its duplicates. Stops after the chain of `end`, or at the tail if `end` is
// `None`.
struct Cursor<'a, T> {
    arena: &'a Arena<Node<T>>,
    primary: Option<Handle>,
    slot: Option<Handle>,
    end: Option<Handle>,
}

impl<'a, T> Cursor<'a, T> {
    fn new(arena: &'a Arena<Node<T>>, start: Option<Handle>, end: Option<Handle>) -> Self {
        Cursor {
            arena,
            primary: start,
            slot: start,
            end,
        }
    }

    fn empty(arena: &'a Arena<Node<T>>) -> Self {
        Cursor::new(arena, None, None)
    }

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        let slot = self.slot?;
        let node = arena.get(slot);

        self.slot = if let Some(duplicate) = node.equal() {
            Some(duplicate)
        } else {
            self.primary = match self.primary {
                Some(primary) if Some(primary) != self.end => arena.get(primary).next(),
                _ => None,
            };
            self.primary
        };

        Some(node.value())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            arena: self.arena,
            primary: self.primary,
            slot: self.slot,
            end: self.end,
        }
    }
}

/// An iterator over the values of a [`DllAvlTree`] in ascending order.
///
/// Walks the linked list from the smallest node, so each step is O(1).
///
/// This `struct` is created by the [`iter`] method on [`DllAvlTree`].
///
/// [`DllAvlTree`]: crate::DllAvlTree
/// [`iter`]: crate::DllAvlTree::iter
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(arena: &'a Arena<Node<T>>, head: Option<Handle>, len: usize) -> Self {
        Iter {
            cursor: Cursor::new(arena, head, None),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.cursor.next()?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the values of a [`DllAvlTree`] between two inclusive
/// bounds, in ascending order.
///
/// Both ends are located up front in O(log n); iteration then follows the
/// linked list.
///
/// This `struct` is created by the [`range`] method on [`DllAvlTree`].
///
/// [`DllAvlTree`]: crate::DllAvlTree
/// [`range`]: crate::DllAvlTree::range
pub struct Range<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Range<'a, T> {
    pub(super) fn new(arena: &'a Arena<Node<T>>, first: Handle, last: Handle) -> Self {
        Range {
            cursor: Cursor::new(arena, Some(first), Some(last)),
        }
    }

    pub(super) fn empty(arena: &'a Arena<Node<T>>) -> Self {
        Range {
            cursor: Cursor::empty(arena),
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.cursor.next()
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Range {
            cursor: self.cursor.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the values held by one node: its own value, then its
/// duplicates in insertion order.
///
/// This `struct` is created by [`NodeRef::values`](crate::NodeRef::values).
pub struct Values<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(super) fn new(arena: &'a Arena<Node<T>>, node: Handle) -> Self {
        Values {
            cursor: Cursor::new(arena, Some(node), Some(node)),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.cursor.next()
    }
}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Values {
            cursor: self.cursor.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
