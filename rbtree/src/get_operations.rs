//! GET operations for RBTreeMap.
//!
//! This module contains all the read operations for the tree: the ordered
//! search walk, key lookup, checked access, counting, and the node accessors
//! used throughout the crate.

use std::ops::Index;

use crate::error::{KeyResult, RBTreeError};
use crate::iteration::Cursor;
use crate::types::{Comparator, Node, NodeId, RBTreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    // ============================================================================
    // NODE ACCESSORS
    // ============================================================================

    /// Borrow a node by ID. Internal callers only pass IDs reachable from
    /// the tree, so a vacant slot here means the structure is corrupt.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id).expect("tree link points at a vacant arena slot")
    }

    /// Mutable counterpart of [`node`](Self::node).
    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes
            .get_mut(id)
            .expect("tree link points at a vacant arena slot")
    }

    // ============================================================================
    // SEARCH WALK
    // ============================================================================

    /// Ordered search from the root: left when the key orders before the
    /// node, right when after, stop on equivalence. Returns `NULL_NODE` when
    /// no equivalent key exists.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NULL_NODE {
            let node = self.node(current);
            if self.comparator.less(key, &node.key) {
                current = node.left;
            } else if self.comparator.less(&node.key, key) {
                current = node.right;
            } else {
                return current;
            }
        }
        NULL_NODE
    }

    /// First node whose key does not order before `key`, or `NULL_NODE`.
    pub(crate) fn lower_bound_node(&self, key: &K) -> NodeId {
        let mut result = NULL_NODE;
        let mut current = self.root;
        while current != NULL_NODE {
            let node = self.node(current);
            if !self.comparator.less(&node.key, key) {
                result = current;
                current = node.left;
            } else {
                current = node.right;
            }
        }
        result
    }

    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let id = self.find_node(key);
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Get a mutable reference to the value associated with a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key);
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Check if an equivalent key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key) != NULL_NODE
    }

    /// Checked access to the value for `key`.
    ///
    /// Unlike indexed access, this never inserts.
    ///
    /// # Errors
    ///
    /// Returns [`RBTreeError::KeyNotFound`] when no equivalent key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{RBTreeError, RBTreeMap};
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.at(&1), Ok(&"one"));
    /// assert_eq!(map.at(&2), Err(RBTreeError::KeyNotFound));
    /// ```
    pub fn at(&self, key: &K) -> KeyResult<&V> {
        let id = self.find_node(key);
        match self.nodes.get(id) {
            Some(node) => Ok(&node.value),
            None => Err(RBTreeError::KeyNotFound),
        }
    }

    /// Checked mutable access to the value for `key`. Never inserts.
    ///
    /// # Errors
    ///
    /// Returns [`RBTreeError::KeyNotFound`] when no equivalent key exists.
    pub fn at_mut(&mut self, key: &K) -> KeyResult<&mut V> {
        let id = self.find_node(key);
        match self.nodes.get_mut(id) {
            Some(node) => Ok(&mut node.value),
            None => Err(RBTreeError::KeyNotFound),
        }
    }

    /// Number of entries with an equivalent key: 0 or 1, since the map
    /// never holds duplicates.
    pub fn count(&self, key: &K) -> usize {
        if self.find_node(key) != NULL_NODE {
            1
        } else {
            0
        }
    }

    /// Cursor to the entry with an equivalent key, or [`end`](Self::end)
    /// when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(7, "seven");
    /// let cursor = map.find(&7);
    /// assert_eq!(map.key_at(cursor), Ok(&7));
    /// assert_eq!(map.find(&8), map.end());
    /// ```
    pub fn find(&self, key: &K) -> Cursor {
        self.cursor_to(self.find_node(key))
    }

    /// Cursor to the first entry whose key does not order before `key`,
    /// or [`end`](Self::end) when every key orders before it.
    pub fn lower_bound(&self, key: &K) -> Cursor {
        self.cursor_to(self.lower_bound_node(key))
    }
}

/// Read-only indexed access; behaves like [`RBTreeMap::at`] and never
/// inserts.
///
/// # Panics
///
/// Panics if the key is not present in the map.
impl<K, V, C: Comparator<K>> Index<&K> for RBTreeMap<K, V, C> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}
