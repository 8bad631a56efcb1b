//! Node-level structural operations for RBTreeMap.
//!
//! This module contains the local restructuring primitives shared by the
//! insert and erase fixups: rotations, subtree transplanting, and the color
//! helpers that treat absent children as black leaves.

use crate::types::{Color, Comparator, NodeId, RBTreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    // ============================================================================
    // COLOR AND LINK HELPERS
    // ============================================================================

    /// True if `id` refers to a red node. An absent node is a black leaf.
    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        id != NULL_NODE && self.node(id).color == Color::Red
    }

    /// True if `id` refers to a black node or no node at all.
    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        !self.is_red(id)
    }

    /// Recolor a node; no-op on the null ID.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id != NULL_NODE {
            self.node_mut(id).color = color;
        }
    }

    /// Parent link of a live node.
    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    // ============================================================================
    // ROTATIONS
    // ============================================================================

    /// Rotate `x` with its right child, preserving the in-order key
    /// sequence. Requires `x` to have a right child.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let y = self.node(x).right;
        let y_left = self.node(y).left;

        self.node_mut(x).right = y_left;
        if y_left != NULL_NODE {
            self.node_mut(y_left).parent = x;
        }

        let x_parent = self.node(x).parent;
        self.node_mut(y).parent = x_parent;
        if x_parent == NULL_NODE {
            self.root = y;
        } else if x == self.node(x_parent).left {
            self.node_mut(x_parent).left = y;
        } else {
            self.node_mut(x_parent).right = y;
        }

        self.node_mut(y).left = x;
        self.node_mut(x).parent = y;
    }

    /// Mirror of [`rotate_left`](Self::rotate_left). Requires `x` to have a
    /// left child.
    pub(crate) fn rotate_right(&mut self, x: NodeId) {
        let y = self.node(x).left;
        let y_right = self.node(y).right;

        self.node_mut(x).left = y_right;
        if y_right != NULL_NODE {
            self.node_mut(y_right).parent = x;
        }

        let x_parent = self.node(x).parent;
        self.node_mut(y).parent = x_parent;
        if x_parent == NULL_NODE {
            self.root = y;
        } else if x == self.node(x_parent).right {
            self.node_mut(x_parent).right = y;
        } else {
            self.node_mut(x_parent).left = y;
        }

        self.node_mut(y).right = x;
        self.node_mut(x).parent = y;
    }

    // ============================================================================
    // TRANSPLANT
    // ============================================================================

    /// Replace the subtree rooted at `u` with the subtree rooted at `v` in
    /// `u`'s parent. `v` may be `NULL_NODE`. `u`'s own links are left for
    /// the caller to rewire or discard.
    pub(crate) fn transplant(&mut self, u: NodeId, v: NodeId) {
        let u_parent = self.node(u).parent;
        if u_parent == NULL_NODE {
            self.root = v;
        } else if u == self.node(u_parent).left {
            self.node_mut(u_parent).left = v;
        } else {
            self.node_mut(u_parent).right = v;
        }
        if v != NULL_NODE {
            self.node_mut(v).parent = u_parent;
        }
    }
}
