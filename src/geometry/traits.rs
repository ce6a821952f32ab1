use crate::geometry::primitives::box3::Box3;
use crate::helpers::aliases::Vec3;
use nalgebra::{RealField, Scalar};
use num_traits::{Bounded, Float, NumCast, One, ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Scalar type usable as mesh/grid coordinate. Satisfied by both floating-point
/// types (vertex positions, lengths) and `isize` (spatial-grid cell indices) so
/// that [`Box3`] can serve both as a geometric bounding box and as a cell range.
pub trait Number:
    Scalar
    + Copy
    + PartialOrd
    + Zero
    + One
    + Bounded
    + NumCast
    + ToPrimitive
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + Debug
{
}

impl<T> Number for T where
    T: Scalar
        + Copy
        + PartialOrd
        + Zero
        + One
        + Bounded
        + NumCast
        + ToPrimitive
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + AddAssign
        + SubAssign
        + Debug
{
}

/// Scalar type usable in geometric predicates: everything [`Number`] provides,
/// plus the floating-point operations (`sqrt`, `acos`, trigonometric identities,
/// vector normalization through `nalgebra`'s `RealField`) the predicates need.
pub trait RealNumber: Number + Float + RealField {}

impl<T> RealNumber for T where T: Number + Float + RealField {}

/// Implemented by types that expose a scalar coordinate type, the common root
/// of [`HasBBox3`] and [`ClosestPoint3`].
pub trait HasScalarType {
    type ScalarType: Number;
}

/// Implemented by objects that can report an axis-aligned bounding box, so that
/// they can be stored in a [`crate::spatial_partitioning::grid::Grid`].
pub trait HasBBox3: HasScalarType {
    fn bbox(&self) -> Box3<Self::ScalarType>;
}

/// Implemented by objects that can answer nearest-point queries, used by the
/// project pass (C7) to snap a vertex to the reference surface.
pub trait ClosestPoint3: HasScalarType {
    fn closest_point(&self, point: &Vec3<Self::ScalarType>) -> Vec3<Self::ScalarType>;
}
