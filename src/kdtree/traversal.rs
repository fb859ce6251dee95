//! Utilities to traverse the KdTree structure.

use tinyvec::TinyVec;

use crate::kdtree::{KdTree, Node};
use crate::r#type::Coordinate;

impl<N: Coordinate> Node<N> {
    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> &[N] {
        &self.point
    }

    /// The axis that the children of this node are split over.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The child holding points whose coordinate on [`axis`][Node::axis] is at most this node's.
    pub fn left(&self) -> Option<&Node<N>> {
        self.left.as_deref()
    }

    /// The child holding points whose coordinate on [`axis`][Node::axis] is at least this
    /// node's.
    pub fn right(&self) -> Option<&Node<N>> {
        self.right.as_deref()
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of levels of the subtree rooted at this node, a leaf counting as one.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        1 + left.max(right)
    }
}

impl<N: Coordinate> KdTree<N> {
    /// Iterate over all nodes in pre-order: a node, then its left subtree, then its right.
    pub fn iter(&self) -> Iter<'_, N> {
        let mut stack = TinyVec::new();
        stack.push(Some(&self.root));
        Iter { stack }
    }

    /// Iterate over all stored points in pre-order.
    pub fn points(&self) -> impl Iterator<Item = &[N]> {
        self.iter().map(Node::point)
    }

    /// The number of levels of the tree.
    ///
    /// Every split takes the true median, so this is always `ceil(log2(num_items + 1))`.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl<'a, N: Coordinate> IntoIterator for &'a KdTree<N> {
    type Item = &'a Node<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A pre-order iterator over the nodes of a [`KdTree`].
#[derive(Debug, Clone)]
pub struct Iter<'a, N: Coordinate> {
    // Use TinyVec to avoid heap allocations for trees of moderate height
    stack: TinyVec<[Option<&'a Node<N>>; 32]>,
}

impl<'a, N: Coordinate> Iterator for Iter<'a, N> {
    type Item = &'a Node<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop().flatten()?;
        // pushed in backwards order to what gets popped
        if let Some(right) = node.right() {
            self.stack.push(Some(right));
        }
        if let Some(left) = node.left() {
            self.stack.push(Some(left));
        }
        Some(node)
    }
}
