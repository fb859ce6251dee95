use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Num, Zero};
use serde::Serialize;

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every implementation pairs
/// the coordinate with a [`Norm`][Coordinate::Norm] type wide enough to hold a sum of squared
/// per-axis differences without overflowing.
pub trait Coordinate:
    private::Sealed + Num + Copy + PartialOrd + Debug + Send + Sync + Serialize
{
    /// The accumulator type of squared distances between points of this coordinate type.
    type Norm: Num + Zero + Copy + PartialOrd + Debug + Send + Sync;

    /// The kind of scalar this is, for diagnostics.
    const COORD_TYPE: CoordType;

    /// The absolute difference between two coordinates, widened to the norm type.
    ///
    /// Unsigned coordinates never wrap: `3u8.axis_dist(5)` is `2`.
    fn axis_dist(self, other: Self) -> Self::Norm;

    /// A total order over coordinates, used to sort points along an axis.
    ///
    /// Floats are ordered with `total_cmp`, so NaN sorts after every number instead of breaking
    /// the sort.
    fn cmp_coord(&self, other: &Self) -> Ordering;
}

macro_rules! impl_float_coordinate {
    ($t:ty, $variant:ident) => {
        impl Coordinate for $t {
            type Norm = $t;
            const COORD_TYPE: CoordType = CoordType::$variant;

            #[inline]
            fn axis_dist(self, other: Self) -> Self::Norm {
                (self - other).abs()
            }

            #[inline]
            fn cmp_coord(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    };
}

macro_rules! impl_int_coordinate {
    ($t:ty, $norm:ty, $variant:ident) => {
        impl Coordinate for $t {
            type Norm = $norm;
            const COORD_TYPE: CoordType = CoordType::$variant;

            #[inline]
            fn axis_dist(self, other: Self) -> Self::Norm {
                <$norm>::from(self.abs_diff(other))
            }

            #[inline]
            fn cmp_coord(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    };
}

impl_int_coordinate!(i8, u64, Int8);
impl_int_coordinate!(u8, u64, UInt8);
impl_int_coordinate!(i16, u64, Int16);
impl_int_coordinate!(u16, u64, UInt16);
impl_int_coordinate!(i32, u128, Int32);
impl_int_coordinate!(u32, u128, UInt32);
impl_float_coordinate!(f32, Float32);
impl_float_coordinate!(f64, Float64);

/// An enum over the allowed coordinate types in the k-d tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
    Float64,
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
