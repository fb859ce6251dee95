//! An immutable, median-split k-d tree over points of any dimensionality, with exact
//! nearest-neighbour search.
//!
//! ```
//! use median_kdtree::kdtree::KdTree;
//!
//! let points = vec![vec![2, 3], vec![5, 4], vec![9, 6], vec![4, 7], vec![8, 1], vec![7, 2]];
//! let tree = KdTree::<u32>::build(points, 0).unwrap();
//! assert_eq!(tree.nearest_neighbour(&[10, 10]).unwrap(), &[9, 6]);
//! ```

mod distance;
mod error;
pub mod kdtree;
mod r#type;

pub use error::{KdTreeError, Result};
pub use r#type::{CoordType, Coordinate};
