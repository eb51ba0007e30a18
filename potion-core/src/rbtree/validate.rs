//! Structural invariant checks.
//!
//! Used by tests and diagnostics. A correctly maintained tree always passes;
//! any error means the balancing code is broken.

use crate::rbtree::node::NodeId;
use crate::rbtree::tree::RedBlackTree;
use anyhow::{Result, bail};

impl<T> RedBlackTree<T> {
    /// Check every red-black and search-tree invariant.
    ///
    /// Verifies that:
    /// - the root is black and has no parent
    /// - no red node has a red child
    /// - every root-to-leaf path has the same number of black nodes
    /// - every key in a left subtree is less than or equal to its ancestor's key,
    ///   and every key in a right subtree is greater than or equal to it
    /// - cached keys match the key projection
    /// - every child's parent link points back at its parent
    /// - every arena node is reachable from the root exactly once
    ///
    /// # Returns
    ///
    /// The black height of the tree (0 when empty).
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violation found.
    pub fn validate(&self) -> Result<usize> {
        let Some(root) = self.root else {
            if !self.nodes.is_empty() {
                bail!("Tree has no root but its arena holds {} nodes", self.nodes.len());
            }
            return Ok(0);
        };

        let Some(root_node) = self.nodes.get(root) else {
            bail!("Root id {root} is outside the arena ({} nodes)", self.nodes.len());
        };
        if root_node.is_red() {
            bail!("Root node {root} is red");
        }
        if let Some(parent) = root_node.parent {
            bail!("Root node {root} has parent {parent}");
        }

        let mut visited = 0;
        let black_height = self.check_subtree(root, None, None, &mut visited)?;

        if visited != self.nodes.len() {
            bail!("Reached {visited} nodes from the root but the arena holds {}", self.nodes.len());
        }

        Ok(black_height)
    }

    /// Validate the subtree at `id` whose keys must lie in `[lower, upper]`.
    /// Returns its black height.
    ///
    /// Both bounds are inclusive: equal keys descend to the right on insert,
    /// but a rotation can lift a later tie above an earlier one and leave the
    /// earlier one in its left subtree.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<i64>,
        upper: Option<i64>,
        visited: &mut usize,
    ) -> Result<usize> {
        *visited += 1;
        if *visited > self.nodes.len() {
            bail!("Cycle detected: visited more nodes than the arena holds");
        }

        let Some(node) = self.nodes.get(id) else {
            bail!("Link to node {id} is outside the arena ({} nodes)", self.nodes.len());
        };

        if node.key != self.key_of(&node.value) {
            bail!("Node {id} caches key {} but its value projects to {}", node.key, self.key_of(&node.value));
        }
        if lower.is_some_and(|lo| node.key < lo) || upper.is_some_and(|hi| node.key > hi) {
            bail!("Node {id} with key {} violates search order bounds [{lower:?}, {upper:?}]", node.key);
        }

        let mut heights = [0; 2];
        for (slot, (child, bounds)) in [
            (node.left, (lower, Some(node.key))),
            (node.right, (Some(node.key), upper)),
        ]
        .into_iter()
        .enumerate()
        {
            let Some(child) = child else { continue };
            let Some(child_node) = self.nodes.get(child) else {
                bail!("Node {id} links to child {child} outside the arena");
            };
            if child_node.parent != Some(id) {
                bail!("Node {child} has parent {:?}, expected {id}", child_node.parent);
            }
            if node.is_red() && child_node.is_red() {
                bail!("Red node {id} has red child {child}");
            }
            if let Some(height) = heights.get_mut(slot) {
                *height = self.check_subtree(child, bounds.0, bounds.1, visited)?;
            }
        }

        let [left, right] = heights;
        if left != right {
            bail!("Node {id} has black height {left} on the left but {right} on the right");
        }

        Ok(left + usize::from(!node.is_red()))
    }
}
