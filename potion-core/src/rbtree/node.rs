//! Arena node layout for the red-black tree.
//!
//! # Design Principles
//!
//! Nodes live in a single `Vec` owned by the tree and refer to each other by
//! index. Child links and the parent back-link are all plain indices, so the
//! ownership graph stays acyclic: the arena owns every node and no node owns
//! another.
//!
//! # Layout Invariants
//!
//! - A node's `key` is computed once at insertion and never changes
//! - Only `color`, `parent`, `left` and `right` are rewritten by rebalancing
//! - Every index stored in a link is a valid position in the arena

/// Index of a node in the tree's arena
pub type NodeId = usize;

/// Node color used by the balancing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Newly inserted nodes start red
    Red,
    /// Contributes to black height; the root is always black
    Black,
}

/// Which child of a node a link refers to.
///
/// Rotations and fix-up cases are written once in terms of a side and its
/// mirror instead of as separate left/right copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left child (smaller or equal keys)
    Left,
    /// Right child (greater or equal keys)
    Right,
}

impl Side {
    /// The mirror side
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single tree node holding one value by value.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Stored value
    pub value: T,

    /// Cached sort key of `value`
    pub key: i64,

    /// Balancing color
    pub color: Color,

    /// Non-owning back-link, `None` for the root
    pub parent: Option<NodeId>,

    /// Left child
    pub left: Option<NodeId>,

    /// Right child
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Create a detached red node
    #[must_use]
    pub const fn new(value: T, key: i64) -> Self {
        Self { value, key, color: Color::Red, parent: None, left: None, right: None }
    }

    /// Child link on the given side
    #[inline]
    #[must_use]
    pub const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Mutable child link on the given side
    #[inline]
    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Check whether the node is red
    #[inline]
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}
