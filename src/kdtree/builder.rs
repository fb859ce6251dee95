use crate::error::{KdTreeError, Result};
use crate::kdtree::{KdTree, Node};
use crate::r#type::Coordinate;

/// A builder to create a [`KdTree`].
///
/// Points are validated as they are added, so [`finish`][KdTreeBuilder::finish] only has to
/// reject an empty batch.
#[derive(Debug, Clone)]
pub struct KdTreeBuilder<N: Coordinate> {
    points: Vec<Vec<N>>,
    dims: Option<usize>,
}

impl<N: Coordinate> Default for KdTreeBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Coordinate> KdTreeBuilder<N> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new builder with room for the provided number of points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
            dims: None,
        }
    }

    /// The number of points added so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the index, returning its insertion index.
    ///
    /// The first point fixes the dimensionality of the batch; any later point with a different
    /// number of coordinates is rejected with [`KdTreeError::DimensionMismatch`].
    pub fn add(&mut self, point: impl Into<Vec<N>>) -> Result<usize> {
        let point = point.into();
        match self.dims {
            Some(expected) if expected != point.len() => {
                return Err(KdTreeError::DimensionMismatch {
                    expected,
                    actual: point.len(),
                });
            }
            None if point.is_empty() => {
                return Err(KdTreeError::DimensionMismatch {
                    expected: 1,
                    actual: 0,
                });
            }
            None => self.dims = Some(point.len()),
            Some(_) => {}
        }

        let index = self.points.len();
        self.points.push(point);
        Ok(index)
    }

    /// Add every point of an iterator, stopping at the first invalid one.
    pub fn add_all<P, I>(&mut self, points: I) -> Result<()>
    where
        P: Into<Vec<N>>,
        I: IntoIterator<Item = P>,
    {
        for point in points {
            self.add(point)?;
        }
        Ok(())
    }

    /// Consume this builder, performing the median splits and generating a KdTree ready for
    /// queries.
    pub fn finish(self) -> Result<KdTree<N>> {
        self.finish_with_depth(0)
    }

    /// Like [`finish`][KdTreeBuilder::finish], but the root splits on axis `depth % dims`.
    pub fn finish_with_depth(self, depth: usize) -> Result<KdTree<N>> {
        let dims = self.dims.ok_or(KdTreeError::EmptyInput)?;
        let num_items = self.points.len();

        log::debug!(
            "building k-d tree of {} {:?} points in {} dimensions",
            num_items,
            N::COORD_TYPE,
            dims
        );

        let root = build_node(self.points, depth, dims);
        Ok(KdTree {
            root,
            dims,
            num_items,
        })
    }
}

impl<N: Coordinate> KdTree<N> {
    /// Build a tree from a batch of points, the root splitting on axis `depth % K`.
    ///
    /// The batch is consumed and sorted privately. Its dimensionality K is taken from the first
    /// point and every other point must match it.
    pub fn build(points: Vec<Vec<N>>, depth: usize) -> Result<Self> {
        let mut builder = KdTreeBuilder::with_capacity(points.len());
        builder.add_all(points)?;
        builder.finish_with_depth(depth)
    }
}

/// Recursively split `points` around the median on axis `depth % dims`.
///
/// `points` must be non-empty and of uniform dimensionality `dims`.
fn build_node<N: Coordinate>(mut points: Vec<Vec<N>>, depth: usize, dims: usize) -> Node<N> {
    let axis = depth % dims;

    // `sort_by` is stable, so tied coordinates keep their relative input order
    points.sort_by(|a, b| a[axis].cmp_coord(&b[axis]));

    match points.len() {
        1 => Node::leaf(points.swap_remove(0), axis),
        2 => {
            // the larger point is kept here and the smaller one becomes a left-only child
            let point = points.swap_remove(1);
            let left = build_node(points, axis + 1, dims);
            Node {
                point,
                axis,
                left: Some(Box::new(left)),
                right: None,
            }
        }
        count => {
            let median = count / 2;
            let right = points.split_off(median + 1);
            let point = points.swap_remove(median);
            Node {
                point,
                axis,
                left: Some(Box::new(build_node(points, axis + 1, dims))),
                right: Some(Box::new(build_node(right, axis + 1, dims))),
            }
        }
    }
}
