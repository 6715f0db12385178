//! 3-D Coordinate System

use super::abs;
use super::vector3::Vector3;
use num_traits::Float;

/// Create a coordinate system from a single vector and return the other two
/// axes.
///
/// The second vector is constructed from the first by zeroing one of the
/// coordinates, swapping the remaining two, negating one of them and
/// normalizing. The third is the cross product of the first two.
///
/// * `v1` - The first vector of the coordinate system.
pub fn coordinate_system<T: Float>(v1: &Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3::new(-v1.z, T::zero(), v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3::new(T::zero(), v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };

    let v3 = v1.cross(&v2);

    (v2, v3)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
