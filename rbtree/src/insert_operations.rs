//! INSERT operations for RBTreeMap.
//!
//! This module contains the insertion walk, the red-black insert fixup, and
//! the inserting indexed-access path. Insertion never moves surviving
//! entries between arena slots, so cursors to other entries stay valid
//! across an insert.

use crate::iteration::Cursor;
use crate::types::{Color, Comparator, Node, NodeId, RBTreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    /// Insert a key-value pair.
    ///
    /// When an equivalent key already exists the map is left untouched and
    /// the cursor to the existing entry is returned with `false`. Otherwise
    /// the pair is inserted and its cursor returned with `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// let (cursor, inserted) = map.insert(1, "one");
    /// assert!(inserted);
    /// assert_eq!(map.value_at(cursor), Ok(&"one"));
    ///
    /// // A duplicate key does not overwrite.
    /// let (existing, inserted) = map.insert(1, "uno");
    /// assert!(!inserted);
    /// assert_eq!(existing, cursor);
    /// assert_eq!(map.value_at(existing), Ok(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) {
        let existing = self.find_node(&key);
        if existing != NULL_NODE {
            return (self.cursor_to(existing), false);
        }
        let id = self.insert_new_node(key, value);
        (self.cursor_to(id), true)
    }

    /// Indexed access: mutable reference to the value for `key`, inserting
    /// `V::default()` first when the key is absent.
    ///
    /// This is the inserting counterpart of [`at_mut`](Self::at_mut); the
    /// read-only paths ([`at`](Self::at), `Index`) never insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut map: rbtree::RBTreeMap<&str, i32> = RBTreeMap::new();
    /// *map.get_or_insert_default("hits") += 1;
    /// *map.get_or_insert_default("hits") += 1;
    /// assert_eq!(map[&"hits"], 2);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let mut id = self.find_node(&key);
        if id == NULL_NODE {
            id = self.insert_new_node(key, V::default());
        }
        &mut self.node_mut(id).value
    }

    // ============================================================================
    // INSERTION WALK AND FIXUP
    // ============================================================================

    /// Link a fresh red node at its leaf position and restore the red-black
    /// invariants. The caller guarantees no equivalent key exists.
    pub(crate) fn insert_new_node(&mut self, key: K, value: V) -> NodeId {
        let z = self.nodes.allocate(Node::new_red(key, value));

        // Walk to the insertion point, remembering the last node passed.
        let mut y = NULL_NODE;
        let mut x = self.root;
        while x != NULL_NODE {
            y = x;
            x = if self.comparator.less(&self.node(z).key, &self.node(x).key) {
                self.node(x).left
            } else {
                self.node(x).right
            };
        }

        self.node_mut(z).parent = y;
        if y == NULL_NODE {
            self.root = z;
        } else if self.comparator.less(&self.node(z).key, &self.node(y).key) {
            self.node_mut(y).left = z;
        } else {
            self.node_mut(y).right = z;
        }

        self.insert_fixup(z);
        self.len += 1;
        z
    }

    /// Restore the red-black invariants after linking the red node `z`.
    ///
    /// Walks upward while the parent is red: a red uncle means recolor and
    /// continue from the grandparent; a black uncle means at most two
    /// rotations (one to straighten a zigzag, one at the grandparent) and
    /// the loop terminates.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.parent_of(z) != NULL_NODE && self.is_red(self.parent_of(z)) {
            let parent = self.parent_of(z);
            let grand = self.parent_of(parent);
            if grand == NULL_NODE {
                break;
            }

            if parent == self.node(grand).left {
                let uncle = self.node(grand).right;
                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grand, Color::Red);
                    z = grand;
                } else {
                    if z == self.node(parent).right {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.parent_of(z);
                    self.set_color(parent, Color::Black);
                    let grand = self.parent_of(parent);
                    if grand != NULL_NODE {
                        self.set_color(grand, Color::Red);
                        self.rotate_right(grand);
                    }
                }
            } else {
                let uncle = self.node(grand).left;
                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grand, Color::Red);
                    z = grand;
                } else {
                    if z == self.node(parent).left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.parent_of(z);
                    self.set_color(parent, Color::Black);
                    let grand = self.parent_of(parent);
                    if grand != NULL_NODE {
                        self.set_color(grand, Color::Red);
                        self.rotate_left(grand);
                    }
                }
            }
        }

        // The loop may have recolored the root red.
        if self.root != NULL_NODE {
            self.set_color(self.root, Color::Black);
        }
    }
}
