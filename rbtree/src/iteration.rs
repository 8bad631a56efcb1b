//! Cursor facade and iterator implementations for RBTreeMap.
//!
//! A [`Cursor`] is a copyable, non-owning position: an arena ID plus the
//! identity of the map that minted it. Cursors hold no borrow, so they stay
//! usable across mutation; in exchange, every cursor operation revalidates
//! against the owning map and reports misuse as
//! [`RBTreeError::InvalidCursor`](crate::RBTreeError::InvalidCursor).
//!
//! The borrowing iterators ([`Iter`], [`Keys`], [`Values`]) are the
//! conventional Rust view over the same in-order walk.

use crate::error::{CursorResult, RBTreeError};
use crate::types::{Comparator, NodeId, RBTreeMap, NULL_NODE};

// ============================================================================
// CURSOR
// ============================================================================

/// A bidirectional position in an [`RBTreeMap`].
///
/// The end position (one past the greatest key) is represented by a cursor
/// with no referenced entry. Equality compares the owner identity and the
/// position; cursors of different maps are never equal.
///
/// `Cursor::default()` is a detached cursor owned by no map; every use of it
/// reports `InvalidCursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) node: NodeId,
    pub(crate) owner: u64,
}

impl Cursor {
    /// True when this cursor is a past-the-end (or detached) position
    /// rather than a reference to an entry.
    pub fn is_end(&self) -> bool {
        self.node == NULL_NODE
    }
}

impl Default for Cursor {
    /// A detached cursor: no owner, no entry.
    fn default() -> Self {
        Self {
            node: NULL_NODE,
            owner: 0,
        }
    }
}

// ============================================================================
// CURSOR OPERATIONS
// ============================================================================

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    /// Cursor to the entry with the smallest key; equals [`end`](Self::end)
    /// when the map is empty.
    pub fn begin(&self) -> Cursor {
        self.cursor_to(self.minimum(self.root))
    }

    /// The past-the-end cursor of this map.
    pub fn end(&self) -> Cursor {
        self.cursor_to(NULL_NODE)
    }

    /// Wrap an arena position (possibly `NULL_NODE`) as a cursor owned by
    /// this map.
    #[inline]
    pub(crate) fn cursor_to(&self, node: NodeId) -> Cursor {
        Cursor {
            node,
            owner: self.instance,
        }
    }

    /// Verify ownership only; the cursor may still be the end position.
    fn check_owner(&self, cursor: Cursor, operation: &str) -> CursorResult<()> {
        if cursor.owner != self.instance {
            return Err(RBTreeError::invalid_cursor(
                operation,
                "cursor does not belong to this map",
            ));
        }
        Ok(())
    }

    /// Resolve a cursor to a live entry, rejecting foreign owners, the end
    /// position, and entries that have been erased since the cursor was
    /// taken.
    pub(crate) fn cursor_node(&self, cursor: Cursor, operation: &str) -> CursorResult<NodeId> {
        self.check_owner(cursor, operation)?;
        if cursor.node == NULL_NODE {
            return Err(RBTreeError::invalid_cursor(
                operation,
                "cursor is at the end position",
            ));
        }
        if !self.nodes.contains(cursor.node) {
            return Err(RBTreeError::invalid_cursor(
                operation,
                "cursor refers to an erased entry",
            ));
        }
        Ok(cursor.node)
    }

    /// Advance to the in-order successor. Stepping off the greatest key
    /// yields the end cursor; advancing the end cursor is an error.
    pub fn next(&self, cursor: Cursor) -> CursorResult<Cursor> {
        let id = self.cursor_node(cursor, "advance")?;
        Ok(self.cursor_to(self.successor(id)))
    }

    /// Retreat to the in-order predecessor. Retreating the end cursor
    /// yields the entry with the greatest key; retreating the first entry
    /// (or the end cursor of an empty map) is an error.
    pub fn prev(&self, cursor: Cursor) -> CursorResult<Cursor> {
        self.check_owner(cursor, "retreat")?;

        if cursor.node == NULL_NODE {
            let max = self.maximum(self.root);
            if max == NULL_NODE {
                return Err(RBTreeError::invalid_cursor(
                    "retreat",
                    "the map is empty",
                ));
            }
            return Ok(self.cursor_to(max));
        }

        let id = self.cursor_node(cursor, "retreat")?;
        let pred = self.predecessor(id);
        if pred == NULL_NODE {
            return Err(RBTreeError::invalid_cursor(
                "retreat",
                "cursor is already at the first entry",
            ));
        }
        Ok(self.cursor_to(pred))
    }

    /// The key-value pair the cursor points at (key immutable).
    pub fn pair(&self, cursor: Cursor) -> CursorResult<(&K, &V)> {
        let id = self.cursor_node(cursor, "dereference")?;
        let node = self.node(id);
        Ok((&node.key, &node.value))
    }

    /// The key-value pair the cursor points at, with the value mutable.
    pub fn pair_mut(&mut self, cursor: Cursor) -> CursorResult<(&K, &mut V)> {
        let id = self.cursor_node(cursor, "dereference")?;
        let node = self.node_mut(id);
        Ok((&node.key, &mut node.value))
    }

    /// The key the cursor points at.
    pub fn key_at(&self, cursor: Cursor) -> CursorResult<&K> {
        self.pair(cursor).map(|(key, _)| key)
    }

    /// The value the cursor points at.
    pub fn value_at(&self, cursor: Cursor) -> CursorResult<&V> {
        self.pair(cursor).map(|(_, value)| value)
    }

    /// Mutable access to the value the cursor points at.
    pub fn value_at_mut(&mut self, cursor: Cursor) -> CursorResult<&mut V> {
        self.pair_mut(cursor).map(|(_, value)| value)
    }

    // ============================================================================
    // BORROWING ITERATORS
    // ============================================================================

    /// Iterator over all key-value pairs in sorted key order.
    pub fn items(&self) -> Iter<'_, K, V, C> {
        Iter {
            map: self,
            current: self.minimum(self.root),
        }
    }

    /// Iterator over all keys in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { items: self.items() }
    }

    /// Iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { items: self.items() }
    }
}

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Borrowing iterator over key-value pairs in sorted key order.
pub struct Iter<'a, K, V, C = crate::types::NaturalOrder> {
    map: &'a RBTreeMap<K, V, C>,
    current: NodeId,
}

/// Borrowing iterator over keys in sorted order.
pub struct Keys<'a, K, V, C = crate::types::NaturalOrder> {
    items: Iter<'a, K, V, C>,
}

/// Borrowing iterator over values in key order.
pub struct Values<'a, K, V, C = crate::types::NaturalOrder> {
    items: Iter<'a, K, V, C>,
}

impl<'a, K, V, C: Comparator<K>> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NULL_NODE {
            return None;
        }
        let map = self.map;
        let node = map.node(self.current);
        self.current = map.successor(self.current);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(key, _)| key)
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, value)| value)
    }
}
