//! DELETE operations for RBTreeMap.
//!
//! This module contains cursor-driven erasure, the transplant splicing step,
//! the black-deficiency repair pass, and bulk clearing. Erasing a node
//! invalidates cursors to that node only; all other entries keep their arena
//! slots, so their cursors survive.

use crate::error::CursorResult;
use crate::iteration::Cursor;
use crate::types::{Color, Comparator, NodeId, RBTreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    /// Remove the entry the cursor points at and return the owned pair.
    ///
    /// # Errors
    ///
    /// Returns [`RBTreeError::InvalidCursor`](crate::RBTreeError::InvalidCursor)
    /// when the cursor belongs to another map, is detached, is the end
    /// cursor, or points at an entry that was already erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut map = RBTreeMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// let cursor = map.find(&1);
    /// assert_eq!(map.erase(cursor), Ok((1, "one")));
    /// assert_eq!(map.len(), 1);
    /// assert!(map.erase(cursor).is_err()); // stale now
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> CursorResult<(K, V)> {
        let z = self.cursor_node(cursor, "erase")?;
        Ok(self.remove_node(z))
    }

    /// Remove all entries and reset the map to empty. Every outstanding
    /// cursor except fresh end cursors becomes stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NULL_NODE;
        self.len = 0;
    }

    // ============================================================================
    // REMOVAL AND FIXUP
    // ============================================================================

    /// Unlink node `z` from the tree, deallocate it, and return its pair.
    ///
    /// A node with at most one child is spliced out directly. A node with
    /// two children is replaced by its in-order successor, which adopts the
    /// node's links and color; the successor's old position inherits its
    /// right child. `x`/`x_parent` track the position that replaced the
    /// physically removed node, since `x` may be an empty link.
    pub(crate) fn remove_node(&mut self, z: NodeId) -> (K, V) {
        let z_left = self.node(z).left;
        let z_right = self.node(z).right;

        let mut removed_color = self.node(z).color;
        let x;
        let x_parent;

        if z_left == NULL_NODE {
            x = z_right;
            x_parent = self.node(z).parent;
            self.transplant(z, z_right);
        } else if z_right == NULL_NODE {
            x = z_left;
            x_parent = self.node(z).parent;
            self.transplant(z, z_left);
        } else {
            // Two children: the successor y (minimum of the right subtree,
            // it has no left child) takes z's place and color.
            let y = self.minimum(z_right);
            removed_color = self.node(y).color;
            x = self.node(y).right;

            if self.node(y).parent == z {
                x_parent = y;
                if x != NULL_NODE {
                    self.node_mut(x).parent = y;
                }
            } else {
                let y_right = self.node(y).right;
                self.transplant(y, y_right);
                x_parent = self.node(y).parent;
                self.node_mut(y).right = z_right;
                self.node_mut(z_right).parent = y;
            }

            self.transplant(z, y);
            self.node_mut(y).left = z_left;
            self.node_mut(z_left).parent = y;
            let z_color = self.node(z).color;
            self.node_mut(y).color = z_color;
        }

        let node = self
            .nodes
            .deallocate(z)
            .expect("erased node must be live in the arena");
        self.len -= 1;

        if removed_color == Color::Black && self.root != NULL_NODE {
            self.erase_fixup(x, x_parent);
        }

        (node.key, node.value)
    }

    /// Repair the black deficiency left at position `x` (child of
    /// `x_parent`; possibly an empty link) after a black node was removed.
    ///
    /// Walks upward while the deficient position is a non-root black node,
    /// dispatching on the sibling: a red sibling is rotated into a black
    /// one; a black sibling with two black children moves the deficiency to
    /// the parent; a near-red child is rotated into the far position; a
    /// far-red child resolves the deficiency with one final rotation.
    fn erase_fixup(&mut self, mut x: NodeId, mut x_parent: NodeId) {
        while x != self.root && self.is_black(x) {
            if x_parent == NULL_NODE {
                break;
            }

            if x == self.node(x_parent).left {
                let mut w = self.node(x_parent).right;
                if self.is_red(w) {
                    self.set_color(w, Color::Black);
                    self.set_color(x_parent, Color::Red);
                    self.rotate_left(x_parent);
                    w = self.node(x_parent).right;
                }

                if w == NULL_NODE {
                    break;
                }
                if self.is_black(self.node(w).left) && self.is_black(self.node(w).right) {
                    self.set_color(w, Color::Red);
                    x = x_parent;
                    x_parent = self.node(x).parent;
                } else {
                    if self.is_black(self.node(w).right) {
                        let w_left = self.node(w).left;
                        self.set_color(w_left, Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate_right(w);
                        w = self.node(x_parent).right;
                    }
                    let parent_color = self.node(x_parent).color;
                    self.set_color(w, parent_color);
                    self.set_color(x_parent, Color::Black);
                    let w_right = self.node(w).right;
                    self.set_color(w_right, Color::Black);
                    self.rotate_left(x_parent);
                    x = self.root;
                    x_parent = NULL_NODE;
                }
            } else {
                let mut w = self.node(x_parent).left;
                if self.is_red(w) {
                    self.set_color(w, Color::Black);
                    self.set_color(x_parent, Color::Red);
                    self.rotate_right(x_parent);
                    w = self.node(x_parent).left;
                }

                if w == NULL_NODE {
                    break;
                }
                if self.is_black(self.node(w).right) && self.is_black(self.node(w).left) {
                    self.set_color(w, Color::Red);
                    x = x_parent;
                    x_parent = self.node(x).parent;
                } else {
                    if self.is_black(self.node(w).left) {
                        let w_right = self.node(w).right;
                        self.set_color(w_right, Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate_left(w);
                        w = self.node(x_parent).left;
                    }
                    let parent_color = self.node(x_parent).color;
                    self.set_color(w, parent_color);
                    self.set_color(x_parent, Color::Black);
                    let w_left = self.node(w).left;
                    self.set_color(w_left, Color::Black);
                    self.rotate_right(x_parent);
                    x = self.root;
                    x_parent = NULL_NODE;
                }
            }
        }

        self.set_color(x, Color::Black);
    }
}
