use num_traits::Zero;

use crate::distance::{axis_gap, sq_dist};
use crate::error::{KdTreeError, Result};
use crate::kdtree::{KdTree, Node};
use crate::r#type::Coordinate;

impl<N: Coordinate> KdTree<N> {
    /// Find the stored point closest to `query` by Euclidean distance.
    ///
    /// When several points are equally close the winner is decided by the tree shape alone, so
    /// repeated queries against the same tree always return the same point.
    ///
    /// A subtree across a split is skipped only when the *squared* gap to the split plane is at
    /// least the best squared distance found so far, so the result is always an exact nearest
    /// neighbour, also for real-valued gaps below one.
    pub fn nearest_neighbour(&self, query: &[N]) -> Result<&[N]> {
        Ok(self.nearest_neighbour_node(query)?.point())
    }

    /// Like [`nearest_neighbour`][KdTree::nearest_neighbour], also returning the squared
    /// distance between the found point and `query`.
    pub fn nearest_neighbour_with_norm(&self, query: &[N]) -> Result<(&[N], N::Norm)> {
        self.check_dims(query)?;
        let (node, norm) = self.root.nearest(query);
        Ok((node.point(), norm))
    }

    /// Find the node holding the stored point closest to `query`.
    pub fn nearest_neighbour_node(&self, query: &[N]) -> Result<&Node<N>> {
        self.check_dims(query)?;
        Ok(self.root.nearest(query).0)
    }

    fn check_dims(&self, query: &[N]) -> Result<()> {
        if query.len() != self.dims {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dims,
                actual: query.len(),
            });
        }
        log::trace!("nearest neighbour query {:?}", query);
        Ok(())
    }
}

impl<N: Coordinate> Node<N> {
    /// Recursive descent returning the closest node in this subtree and its squared distance.
    ///
    /// An exact match (zero distance) ends the search on the way back up, whatever the
    /// coordinate type. A candidate only displaces the current best when strictly closer.
    fn nearest(&self, query: &[N]) -> (&Self, N::Norm) {
        let (near, other) = match (&self.left, &self.right) {
            (None, None) => return (self, sq_dist(&self.point, query)),
            (Some(near), None) | (None, Some(near)) => (near, None),
            (Some(left), Some(right)) => {
                if self.point[self.axis] > query[self.axis] {
                    (left, Some(right))
                } else {
                    (right, Some(left))
                }
            }
        };

        let (candidate, candidate_norm) = near.nearest(query);
        if candidate_norm.is_zero() {
            return (candidate, candidate_norm);
        }

        let norm = sq_dist(&self.point, query);
        if norm.is_zero() {
            return (self, norm);
        }

        let mut best = if candidate_norm < norm {
            (candidate, candidate_norm)
        } else {
            (self, norm)
        };

        if let Some(other) = other {
            // the far side can only hold a closer point if the split plane is closer than best
            if best.1 > axis_gap(&self.point, query, self.axis) {
                let found = other.nearest(query);
                if found.1 < best.1 {
                    best = found;
                }
            }
        }

        best
    }
}
