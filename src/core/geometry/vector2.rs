//! 2-D Vectors

use super::common::*;
use super::{Float, Point2, Point3};
use num_traits::{Num, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2-D vector containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D vector containing `Float` values.
pub type Vector2f = Vector2<Float>;

impl<T: Num> Vector2<T> {
    /// Creates a new 2-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Mul<Output = T> + Add<Output = T> + Copy,
    {
        self.x * self.x + self.y * self.y
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }
}

impl<T: Num + Neg<Output = T> + PartialOrd + Copy> Dot<Vector2<T>> for Vector2<T> {
    type Output = T;

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    fn dot(&self, other: &Vector2<T>) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T: Num> Add for Vector2<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` - The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num> Sub for Vector2<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` - The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Num + Copy> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;

    /// Scale the vector.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(f * self.x, f * self.y)
    }
}

impl<T: Num + Neg<Output = T>> Neg for Vector2<T> {
    type Output = Vector2<T>;

    /// Flip the vector's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.x, -self.y)
    }
}

impl<T> From<Point2<T>> for Vector2<T> {
    /// Convert a 2-D point to a 2-D vector.
    ///
    /// * `p` - 2-D point.
    fn from(p: Point2<T>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<T> From<Point3<T>> for Vector2<T> {
    /// Convert a 3-D point to a 2-D vector by dropping the z-coordinate.
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
    use proptest::prelude::*;

    #[test]
    fn zero_vector() {
        assert!(Vector2::new(0.0, 0.0) == Vector2::zero());
    }

    #[test]
    fn from_point3_drops_z() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Vector2::from(p) == Vector2::new(1.0, 2.0));
    }

    #[test]
    fn length_of_axis_pair() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    }

    // Define some properties for tests.
    prop_range!(range_f32, f32, -100.0..100.0f32);

    prop_vector2!(vector2_f32, f32, -100.0..100.0f32, -100.0..100.0f32);

    proptest! {
        #[test]
        fn length_squared_f32(v in vector2_f32()) {
            prop_assert_eq!(v.length_squared(), v.x * v.x + v.y * v.y);
        }

        #[test]
        fn dot_f32(v1 in vector2_f32(), v2 in vector2_f32()) {
            prop_assert_eq!(v1.dot(&v2), v1.x * v2.x + v1.y * v2.y);
        }

        #[test]
        fn add_sub_f32(v1 in vector2_f32(), v2 in vector2_f32()) {
            prop_assert_eq!(v1 + v2, Vector2::new(v1.x + v2.x, v1.y + v2.y));
            prop_assert_eq!(v1 - v2, Vector2::new(v1.x - v2.x, v1.y - v2.y));
        }

        #[test]
        fn mul_neg_f32(v in vector2_f32(), f in range_f32()) {
            prop_assert_eq!(v * f, Vector2::new(v.x * f, v.y * f));
            prop_assert_eq!(-v, Vector2::new(-v.x, -v.y));
        }
    }
}
