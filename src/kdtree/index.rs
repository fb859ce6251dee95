use serde::Serialize;

use crate::error::Result;
use crate::r#type::{CoordType, Coordinate};

/// A single node of a [`KdTree`], holding exactly one point.
///
/// Every point in `left` has a coordinate on `axis` less than or equal to this node's, and every
/// point in `right` greater than or equal to it. A node never has a right child without a left
/// child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<N: Coordinate> {
    pub(crate) point: Vec<N>,
    pub(crate) axis: usize,
    pub(crate) left: Option<Box<Node<N>>>,
    pub(crate) right: Option<Box<Node<N>>>,
}

impl<N: Coordinate> Node<N> {
    pub(crate) fn leaf(point: Vec<N>, axis: usize) -> Self {
        Self {
            point,
            axis,
            left: None,
            right: None,
        }
    }
}

/// An owned, immutable K-D Tree.
///
/// Usually this will be created via [`KdTree::build`] or a
/// [`KdTreeBuilder`][crate::kdtree::KdTreeBuilder].
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<N: Coordinate> {
    pub(crate) root: Node<N>,
    pub(crate) dims: usize,
    pub(crate) num_items: usize,
}

impl<N: Coordinate> KdTree<N> {
    /// The number of coordinates of every point in this tree.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// The number of points in this tree.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The scalar type of this tree's coordinates.
    pub fn coord_type(&self) -> CoordType {
        N::COORD_TYPE
    }

    /// The root node.
    pub fn root(&self) -> &Node<N> {
        &self.root
    }

    /// Dump the whole tree structure as compact JSON.
    ///
    /// Each node is an object with lowercase `point`, `axis`, `left` and `right` keys (not
    /// `Point`, `Dim`, `Left` and `Right`), absent children being `null`:
    ///
    /// ```text
    /// {"point":[3,4],"axis":0,"left":{"point":[1,2],"axis":1,"left":null,"right":null},"right":null}
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Dump the whole tree structure as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}
