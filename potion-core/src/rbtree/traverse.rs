//! In-order traversal.
//!
//! Walks the tree with an explicit stack of node ids rather than recursion.
//! The stack holds at most one entry per level, which the balancing rules keep
//! logarithmic in the number of nodes.

use crate::rbtree::node::NodeId;
use crate::rbtree::tree::RedBlackTree;
use std::iter::FusedIterator;

/// Ascending-key iterator over a [`RedBlackTree`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    tree: &'a RedBlackTree<T>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a RedBlackTree<T>) -> Self {
        let mut iter = Self { tree, stack: Vec::new(), remaining: tree.len() };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.tree.node(id).left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> RedBlackTree<T> {
    /// Iterate values in ascending key order (left, node, right)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Node ids in ascending key order
    pub(crate) fn inorder_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cursor = self.root();
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.node(id).left;
            }
            let Some(id) = stack.pop() else { break };
            ids.push(id);
            cursor = self.node(id).right;
        }
        ids
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
