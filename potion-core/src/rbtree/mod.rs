//! Arena-backed red-black tree keyed by an integer projection.
//!
//! Public only with the `internals` feature; [`crate::OrderedStore`] is the
//! supported interface.

mod node;
mod traverse;
mod tree;
mod validate;

pub use node::{Color, Node, NodeId, Side};
pub use traverse::Iter;
pub use tree::{KeyFn, RedBlackTree};
