//! Red-black tree storage, insertion with fix-up, and rebuild-based removal.
//!
//! Ties on the key keep arrival order: insert sends equal keys right, and
//! rotations preserve in-order sequence.

use crate::rbtree::node::{Color, Node, NodeId, Side};
use std::fmt;

/// Boxed key projection. Must be pure: the same value always maps to the
/// same key for the lifetime of the tree.
pub type KeyFn<T> = Box<dyn Fn(&T) -> i64>;

/// Red-black tree ordered by a caller-supplied integer key.
///
/// Equal keys are routed to the right subtree, so values are never merged or
/// rejected on key collision. Nodes live in an arena and link to each other by
/// index; the parent link is only used to walk upwards during rebalancing.
pub struct RedBlackTree<T> {
    /// Node arena, indexed by `NodeId`
    pub(crate) nodes: Vec<Node<T>>,

    /// Root node, `None` when empty
    pub(crate) root: Option<NodeId>,

    /// Key projection, fixed at construction
    key_fn: KeyFn<T>,
}

impl<T> RedBlackTree<T> {
    /// Create an empty tree ordered by `key_fn`
    pub fn new(key_fn: impl Fn(&T) -> i64 + 'static) -> Self {
        Self::with_capacity(key_fn, 0)
    }

    /// Create an empty tree with room for `capacity` nodes
    pub fn with_capacity(key_fn: impl Fn(&T) -> i64 + 'static, capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity), root: None, key_fn: Box::new(key_fn) }
    }

    /// Number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node id
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Borrow a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this tree.
    #[inline]
    #[allow(clippy::indexing_slicing)]
    pub fn node(&self, id: NodeId) -> &Node<T> {
        // Ids come from links or `root`, which always point into the arena
        &self.nodes[id]
    }

    #[inline]
    #[allow(clippy::indexing_slicing)]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id]
    }

    /// Apply this tree's key projection to a value
    #[inline]
    pub fn key_of(&self, value: &T) -> i64 {
        (self.key_fn)(value)
    }

    /// Insert a value.
    ///
    /// Descends by key (strictly smaller goes left, everything else right),
    /// links a new red node as a leaf, then restores the red-black rules.
    /// Always succeeds.
    pub fn insert(&mut self, value: T) {
        let key = self.key_of(&value);

        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            parent = Some(id);
            side = if key < self.node(id).key { Side::Left } else { Side::Right };
            cursor = self.node(id).child(side);
        }

        let id = self.nodes.len();
        let mut node = Node::new(value, key);
        node.parent = parent;
        self.nodes.push(node);

        let Some(parent) = parent else {
            self.root = Some(id);
            self.node_mut(id).color = Color::Black;
            return;
        };
        *self.node_mut(parent).child_mut(side) = Some(id);

        // Parent is the (black) root: nothing can be violated yet
        if self.node(parent).parent.is_none() {
            return;
        }

        self.fix_insert(id);
    }

    /// Restore the red-black rules after linking the red node `k`.
    fn fix_insert(&mut self, mut k: NodeId) {
        while let Some(parent) = self.node(k).parent.filter(|&p| self.node(p).is_red()) {
            // A red node is never the root, so the grandparent exists
            let Some(grand) = self.node(parent).parent else { break };
            let side = self.side_of(parent, grand);

            let uncle = self.node(grand).child(side.opposite());
            if let Some(uncle) = uncle.filter(|&u| self.node(u).is_red()) {
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(grand).color = Color::Red;
                k = grand;
                continue;
            }

            // Inner child: rotate it to the outer position first
            if self.node(parent).child(side.opposite()) == Some(k) {
                k = parent;
                self.rotate(k, side);
            }

            let Some(parent) = self.node(k).parent else { break };
            let Some(grand) = self.node(parent).parent else { break };
            self.node_mut(parent).color = Color::Black;
            self.node_mut(grand).color = Color::Red;
            self.rotate(grand, side.opposite());
        }

        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
    }

    /// Which side of `parent` the node `child` hangs on
    #[inline]
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.node(parent).left == Some(child) { Side::Left } else { Side::Right }
    }

    /// Rotate `x` towards `dir`: its child on the opposite side takes its place.
    ///
    /// No-op if that child is absent.
    fn rotate(&mut self, x: NodeId, dir: Side) {
        let opp = dir.opposite();
        let Some(y) = self.node(x).child(opp) else { return };

        let inner = self.node(y).child(dir);
        *self.node_mut(x).child_mut(opp) = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        let x_parent = self.node(x).parent;
        self.node_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                let side = self.side_of(x, p);
                *self.node_mut(p).child_mut(side) = Some(y);
            }
        }

        *self.node_mut(y).child_mut(dir) = Some(x);
        self.node_mut(x).parent = Some(y);

        log::trace!("rotated node {x} {dir:?}, node {y} took its place");
    }

    /// First value matching `pred`, visiting each node before its left subtree
    /// and its left subtree before its right subtree (pre-order).
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if pred(&node.value) {
                return Some(&node.value);
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
        None
    }

    /// Remove the first value in ascending key order that matches `pred`.
    ///
    /// The tree is not restructured in place: every value is collected in
    /// order, the first match is dropped, and the rest are inserted again into
    /// an empty tree. O(n) time and O(n) temporary memory. Returns `None` and
    /// leaves the tree untouched when nothing matches.
    pub fn remove_first(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let order = self.inorder_ids();
        let position = order.iter().position(|&id| pred(&self.node(id).value))?;
        let target = *order.get(position)?;

        let mut slots = self.take_values();
        let removed = slots.get_mut(target).and_then(Option::take);

        self.nodes.reserve(order.len().saturating_sub(1));
        for id in order {
            if let Some(value) = slots.get_mut(id).and_then(Option::take) {
                self.insert(value);
            }
        }

        log::debug!("removed node {target} and rebuilt tree with {} values", self.len());
        removed
    }

    /// Drop every node and return to the empty state. Idempotent.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Consume the tree, returning its values in ascending key order
    pub fn into_vec(mut self) -> Vec<T> {
        let order = self.inorder_ids();
        let mut slots = self.take_values();
        order.into_iter().filter_map(|id| slots.get_mut(id).and_then(Option::take)).collect()
    }

    /// Empty the tree, handing back its values indexed by their old `NodeId`
    fn take_values(&mut self) -> Vec<Option<T>> {
        self.root = None;
        std::mem::take(&mut self.nodes).into_iter().map(|node| Some(node.value)).collect()
    }
}

impl<T> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("len", &self.nodes.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_tree(keys: &[i64]) -> RedBlackTree<i64> {
        let mut tree = RedBlackTree::new(|v: &i64| *v);
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    #[test]
    fn test_first_insert_becomes_black_root() {
        let tree = identity_tree(&[5]);
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).value, 5);
        assert_eq!(tree.node(root).color, Color::Black);
    }

    #[test]
    fn test_second_insert_needs_no_fixup() {
        let tree = identity_tree(&[5, 3]);
        let root = tree.root().unwrap();
        let left = tree.node(root).left.unwrap();
        assert_eq!(tree.node(left).value, 3);
        assert_eq!(tree.node(left).color, Color::Red);
        assert_eq!(tree.node(left).parent, Some(root));
    }

    #[test]
    fn test_outer_chain_rotates_grandparent() {
        // 1 -> 2 -> 3 is a right-right chain; 2 must become the root
        let tree = identity_tree(&[1, 2, 3]);
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).value, 2);
        assert_eq!(tree.node(root).color, Color::Black);
        let left = tree.node(root).left.unwrap();
        let right = tree.node(root).right.unwrap();
        assert_eq!(tree.node(left).value, 1);
        assert_eq!(tree.node(right).value, 3);
        assert!(tree.node(left).is_red());
        assert!(tree.node(right).is_red());
    }

    #[test]
    fn test_inner_chain_double_rotation() {
        // 3 -> 1 -> 2 is a left-right zig-zag; 2 must become the root
        let tree = identity_tree(&[3, 1, 2]);
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).value, 2);
        assert_eq!(tree.node(tree.node(root).left.unwrap()).value, 1);
        assert_eq!(tree.node(tree.node(root).right.unwrap()).value, 3);
        assert!(tree.node(root).parent.is_none());
    }

    #[test]
    fn test_red_uncle_recolors() {
        let tree = identity_tree(&[10, 5, 15, 1]);
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).value, 10);
        let left = tree.node(root).left.unwrap();
        let right = tree.node(root).right.unwrap();
        assert_eq!(tree.node(left).color, Color::Black);
        assert_eq!(tree.node(right).color, Color::Black);
        let leaf = tree.node(left).left.unwrap();
        assert_eq!(tree.node(leaf).color, Color::Red);
    }

    #[test]
    fn test_equal_keys_go_right() {
        let mut tree = RedBlackTree::new(|v: &(i64, char)| v.0);
        tree.insert((1, 'a'));
        tree.insert((1, 'b'));
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).value, (1, 'a'));
        assert!(tree.node(root).left.is_none());
        assert_eq!(tree.node(tree.node(root).right.unwrap()).value, (1, 'b'));
    }

    #[test]
    fn test_find_is_preorder() {
        // Root 2 holds a tag shared with its left child 1
        let mut tree = RedBlackTree::new(|v: &(i64, &str)| v.0);
        for v in [(1, "dup"), (2, "dup"), (3, "other")] {
            tree.insert(v);
        }
        assert_eq!(tree.find(|v| v.1 == "dup"), Some(&(2, "dup")));
        assert_eq!(tree.find(|v| v.1 == "missing"), None);
    }

    #[test]
    fn test_remove_first_is_inorder() {
        let mut tree = RedBlackTree::new(|v: &(i64, &str)| v.0);
        for v in [(1, "dup"), (2, "dup"), (3, "other")] {
            tree.insert(v);
        }
        assert_eq!(tree.remove_first(|v| v.1 == "dup"), Some((1, "dup")));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.into_vec(), vec![(2, "dup"), (3, "other")]);
    }

    #[test]
    fn test_remove_first_no_match_keeps_tree() {
        let mut tree = identity_tree(&[4, 2, 6]);
        let root_before = tree.root();
        assert_eq!(tree.remove_first(|v| *v == 99), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root(), root_before);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut tree = identity_tree(&[]);
        assert_eq!(tree.remove_first(|_| true), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_last_value_empties_tree() {
        let mut tree = identity_tree(&[1]);
        assert_eq!(tree.remove_first(|v| *v == 1), Some(1));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut tree = identity_tree(&[3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        tree.insert(9);
        assert_eq!(tree.into_vec(), vec![9]);
    }

    #[test]
    fn test_into_vec_sorted() {
        let tree = identity_tree(&[5, 1, 4, 2, 3]);
        assert_eq!(tree.into_vec(), vec![1, 2, 3, 4, 5]);
    }
}
