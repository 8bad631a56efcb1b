//! Validation and debugging utilities for RBTreeMap.
//!
//! This module contains the invariant checking used by tests after every
//! structural mutation: binary-search-tree ordering under the comparator,
//! the red-black coloring rules, parent-link consistency, and arena-tree
//! count agreement.

use crate::error::{RBTreeError, TreeResult};
use crate::types::{Color, Comparator, NodeId, RBTreeMap, NULL_NODE};

impl<K, V, C: Comparator<K>> RBTreeMap<K, V, C> {
    /// Check if the tree maintains all red-black map invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.root != NULL_NODE {
            let root = self
                .nodes
                .get(self.root)
                .ok_or_else(|| "root id points at a vacant arena slot".to_string())?;
            if root.parent != NULL_NODE {
                return Err("root has a parent link".to_string());
            }
            if root.color != Color::Black {
                return Err("root is red".to_string());
            }
        }

        let mut seen = 0usize;
        self.check_subtree(self.root, None, None, &mut seen)
            .map_err(|e| e.to_string())?;

        if seen != self.len {
            return Err(format!(
                "{} nodes reachable from root but len is {}",
                seen, self.len
            ));
        }
        self.check_arena_tree_consistency().map_err(|e| e.to_string())?;
        self.check_iteration_order()?;
        Ok(())
    }

    /// Check that arena allocation matches the tree structure.
    fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        if self.nodes.allocated_count() != self.len {
            return Err(RBTreeError::corrupted_tree(
                "Arena",
                &format!(
                    "{} allocated slots vs {} entries",
                    self.nodes.allocated_count(),
                    self.len
                ),
            ));
        }
        Ok(())
    }

    /// Check that iteration yields strictly increasing keys and exactly
    /// `len` entries.
    fn check_iteration_order(&self) -> Result<(), String> {
        let mut count = 0usize;
        let mut previous: Option<&K> = None;
        for (key, _) in self.items() {
            if let Some(prev) = previous {
                if !self.comparator.less(prev, key) {
                    return Err(format!("iteration out of order at step {}", count));
                }
            }
            previous = Some(key);
            count += 1;
        }
        if count != self.len {
            return Err(format!(
                "iteration yielded {} entries but len is {}",
                count, self.len
            ));
        }
        Ok(())
    }

    /// Recursively validate the subtree at `id` against its key bounds and
    /// return its black-height. `seen` counts visited nodes and bounds the
    /// walk, so a corrupt link cycle errors out instead of recursing
    /// forever.
    fn check_subtree(
        &self,
        id: NodeId,
        min: Option<&K>,
        max: Option<&K>,
        seen: &mut usize,
    ) -> TreeResult<usize> {
        if id == NULL_NODE {
            // Absent nodes are black leaves.
            return Ok(1);
        }

        *seen += 1;
        if *seen > self.len {
            return Err(RBTreeError::corrupted_tree(
                "Structure",
                "more nodes reachable than entries recorded",
            ));
        }

        let node = self.nodes.get(id).ok_or_else(|| {
            RBTreeError::corrupted_tree("Structure", "child link points at a vacant arena slot")
        })?;

        if let Some(min) = min {
            if !self.comparator.less(min, &node.key) {
                return Err(RBTreeError::corrupted_tree(
                    "Ordering",
                    "key does not order after its left bound",
                ));
            }
        }
        if let Some(max) = max {
            if !self.comparator.less(&node.key, max) {
                return Err(RBTreeError::corrupted_tree(
                    "Ordering",
                    "key does not order before its right bound",
                ));
            }
        }

        for child in [node.left, node.right] {
            if let Some(child_node) = self.nodes.get(child) {
                if child_node.parent != id {
                    return Err(RBTreeError::corrupted_tree(
                        "Links",
                        "child's parent link does not point back",
                    ));
                }
                if node.color == Color::Red && child_node.color == Color::Red {
                    return Err(RBTreeError::corrupted_tree(
                        "Coloring",
                        "red node has a red child",
                    ));
                }
            }
        }

        let left_height = self.check_subtree(node.left, min, Some(&node.key), seen)?;
        let right_height = self.check_subtree(node.right, Some(&node.key), max, seen)?;
        if left_height != right_height {
            return Err(RBTreeError::corrupted_tree(
                "Coloring",
                &format!(
                    "black-height mismatch: {} left vs {} right",
                    left_height, right_height
                ),
            ));
        }

        let own = if node.color == Color::Black { 1 } else { 0 };
        Ok(left_height + own)
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Returns all key-value pairs as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        self.items().collect()
    }
}
