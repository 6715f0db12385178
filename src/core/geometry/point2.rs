//! 2-D Points

use super::{Float, Point3, Vector2};
use num_traits::{Num, Zero};
use std::ops::{Add, Mul, Sub};

/// A 2-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;
impl Point2f {
    /// Zero point.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Num> Add for Point2<T> {
    type Output = Self;

    /// Adds the coordinates of another point; used by weighted sums such as
    /// linear interpolation.
    ///
    /// * `other` - The point to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num> Sub for Point2<T> {
    type Output = Vector2<T>;

    /// Subtracts the given point and returns the vector between them.
    ///
    /// * `other` - The point to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y)
    }
}

macro_rules! premul {
    ($t: ty) => {
        impl Mul<Point2<$t>> for $t {
            type Output = Point2<$t>;
            /// Scale the point.
            ///
            /// * `p` - The point.
            fn mul(self, p: Point2<$t>) -> Point2<$t> {
                Point2::<$t>::new(self * p.x, self * p.y)
            }
        }
    };
}

premul!(f32);
premul!(f64);

impl<T> From<Point3<T>> for Point2<T> {
    /// Convert a 3-D point to a 2-D point by dropping the z-coordinate.
    ///
    /// * `p` - 3-D point.
    fn from(p: Point3<T>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::lerp;
    use proptest::prelude::*;

    #[test]
    fn from_point3_drops_z() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Point2::from(p) == Point2::new(1.0, 2.0));
    }

    #[test]
    fn zero_point() {
        assert!(Point2f::ZERO == Point2::zero());
    }

    prop_point2!(point2_f32, f32, -100.0..100.0f32, -100.0..100.0f32);

    proptest! {
        #[test]
        fn sub_gives_vector_f32(p1 in point2_f32(), p2 in point2_f32()) {
            prop_assert_eq!(p1 - p2, Vector2::new(p1.x - p2.x, p1.y - p2.y));
        }

        #[test]
        fn lerp_endpoints_f32(p1 in point2_f32(), p2 in point2_f32()) {
            prop_assert_eq!(lerp(0.0, p1, p2), p1);
            prop_assert_eq!(lerp(1.0, p1, p2), p2);
        }
    }
}
