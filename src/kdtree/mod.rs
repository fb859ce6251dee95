//! An implementation of an immutable, median-split K-D Tree.
//!
//! A tree is built once from a batch of points via [`KdTree::build`] or [`KdTreeBuilder`] and
//! is never mutated afterwards. Because construction finishes before the tree is handed back by
//! value, a built tree can be shared across threads without any locking.

#![warn(missing_docs)]

mod builder;
mod index;
mod search;
mod traversal;

pub use builder::KdTreeBuilder;
pub use index::{KdTree, Node};
pub use traversal::Iter;
