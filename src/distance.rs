//! Squared-distance primitives shared by the builder and the searcher.
//!
//! No square root is ever taken: only relative ordering of distances matters.

use num_traits::Zero;

use crate::r#type::Coordinate;

/// Squared Euclidean distance between two points.
///
/// Both points must have the same number of coordinates; callers validate this up front.
#[inline]
pub(crate) fn sq_dist<N: Coordinate>(a: &[N], b: &[N]) -> N::Norm {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(N::Norm::zero(), |sum, (&x, &y)| {
        let d = x.axis_dist(y);
        sum + d * d
    })
}

/// Squared gap between two points along a single axis.
///
/// This is the pruning bound of the nearest-neighbour search: no point on the far side of a split
/// can be closer to the query than this.
#[inline]
pub(crate) fn axis_gap<N: Coordinate>(a: &[N], b: &[N], axis: usize) -> N::Norm {
    let d = a[axis].axis_dist(b[axis]);
    d * d
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sq_dist_sums_all_axes() {
        assert_eq!(sq_dist(&[2.0f64, 3.0], &[5.0, 7.0]), 25.0);
        assert_eq!(sq_dist(&[1u8, 2, 3], &[1, 2, 3]), 0);
    }

    #[test]
    fn sq_dist_of_bytes_does_not_overflow() {
        assert_eq!(sq_dist(&[0u8, 255], &[255, 0]), 2 * 255 * 255);
    }

    #[test]
    fn axis_gap_uses_one_axis() {
        let a = [1u32, 10];
        let b = [4u32, 0];
        assert_eq!(axis_gap(&a, &b, 0), 9);
        assert_eq!(axis_gap(&a, &b, 1), 100);
    }
}
