//! Construction and copy plumbing for RBTreeMap.
//!
//! This module contains construction, deep copy, and container-identity
//! logic. Every constructed or cloned map receives a fresh instance ID so
//! cursors can be checked against the exact container that created them.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::arena::NodeArena;
use crate::types::{Comparator, NaturalOrder, RBTreeMap, NULL_NODE};

/// Instance IDs start at 1; 0 is reserved for detached cursors.
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Mint a process-unique container identity.
pub(crate) fn next_instance_id() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

impl<K: Ord, V> RBTreeMap<K, V> {
    /// Create an empty map ordered by the keys' natural `Ord` ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let map = RBTreeMap::<i32, String>::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    /// Create an empty map ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{OrderBy, RBTreeMap};
    ///
    /// // Reverse ordering: largest key first.
    /// let mut map = RBTreeMap::with_comparator(OrderBy(|a: &i32, b: &i32| a > b));
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            comparator,
            nodes: NodeArena::new(),
            instance: next_instance_id(),
        }
    }

    /// Create an empty map with node storage pre-allocated for `capacity`
    /// entries.
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            comparator,
            nodes: NodeArena::with_capacity(capacity),
            instance: next_instance_id(),
        }
    }
}

impl<K: Ord, V> Default for RBTreeMap<K, V> {
    /// Create an empty map with the natural key ordering.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, C: Comparator<K> + Clone> Clone for RBTreeMap<K, V, C> {
    /// Deep-copies the whole tree: every node is duplicated with its color
    /// and links preserved, values copied via `Clone`. The copy gets its own
    /// instance ID, so cursors of the original are rejected by the copy and
    /// vice versa.
    ///
    /// The arena representation makes this a flat slot-for-slot copy with no
    /// recursion over the tree structure.
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            len: self.len,
            comparator: self.comparator.clone(),
            nodes: self.nodes.clone(),
            instance: next_instance_id(),
        }
    }
}
