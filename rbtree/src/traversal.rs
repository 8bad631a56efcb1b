//! In-order traversal primitives for RBTreeMap.
//!
//! Successor/predecessor computation and subtree minimum/maximum. These
//! only walk existing links; they never mutate the tree.

use crate::types::{Comparator, NodeId, RBTreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    /// Leftmost node of the subtree rooted at `id`, or `NULL_NODE` for an
    /// empty subtree.
    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.node(id).left != NULL_NODE {
            id = self.node(id).left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`, or `NULL_NODE` for an
    /// empty subtree.
    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.node(id).right != NULL_NODE {
            id = self.node(id).right;
        }
        id
    }

    /// In-order successor of a live node: the minimum of the right subtree
    /// when one exists, otherwise the first ancestor reached from a left
    /// child. `NULL_NODE` means `id` holds the greatest key.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        let right = self.node(id).right;
        if right != NULL_NODE {
            return self.minimum(right);
        }
        let mut current = id;
        let mut parent = self.node(current).parent;
        while parent != NULL_NODE && current == self.node(parent).right {
            current = parent;
            parent = self.node(parent).parent;
        }
        parent
    }

    /// In-order predecessor of a live node; mirror of
    /// [`successor`](Self::successor). `NULL_NODE` means `id` holds the
    /// smallest key.
    pub(crate) fn predecessor(&self, id: NodeId) -> NodeId {
        let left = self.node(id).left;
        if left != NULL_NODE {
            return self.maximum(left);
        }
        let mut current = id;
        let mut parent = self.node(current).parent;
        while parent != NULL_NODE && current == self.node(parent).left {
            current = parent;
            parent = self.node(parent).parent;
        }
        parent
    }

    /// Entry with the smallest key, or `None` when empty.
    pub fn first(&self) -> Option<(&K, &V)> {
        let id = self.minimum(self.root);
        self.nodes.get(id).map(|node| (&node.key, &node.value))
    }

    /// Entry with the greatest key, or `None` when empty.
    pub fn last(&self) -> Option<(&K, &V)> {
        let id = self.maximum(self.root);
        self.nodes.get(id).map(|node| (&node.key, &node.value))
    }
}
