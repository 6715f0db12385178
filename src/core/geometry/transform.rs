//! Transformations

use super::{
    abs, gamma, matrix4x4, Bounds3f, Dot, FaceForward, Float, Matrix4x4, Normal3f, Point3f, Ray,
    Shading, SurfaceInteraction, Union, Vector3, Vector3f, IDENTITY_MATRIX,
};
use std::ops::Mul;
use std::sync::Arc;

/// A transformation for mapping from points to points and vectors to vectors.
#[derive(Copy, Clone, Debug, Default)]
pub struct Transform {
    /// The transformation matrix.
    pub m: Matrix4x4,

    /// The inverse transformation matrix.
    pub m_inv: Matrix4x4,
}

/// Atomic reference counted `Transform`.
pub type ArcTransform = Arc<Transform>;

impl Transform {
    /// Create a transformation representing a translation.
    ///
    /// * `delta` - Translation.
    #[rustfmt::skip]
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: matrix4x4(
                1.0, 0.0, 0.0, delta.x,
                0.0, 1.0, 0.0, delta.y,
                0.0, 0.0, 1.0, delta.z,
                0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: matrix4x4(
                1.0, 0.0, 0.0, -delta.x,
                0.0, 1.0, 0.0, -delta.y,
                0.0, 0.0, 1.0, -delta.z,
                0.0, 0.0, 0.0,  1.0,
            ),
        }
    }

    /// Create a transformation representing a scale.
    ///
    /// * `x` - Scaling factor in x-axis.
    /// * `y` - Scaling factor in y-axis.
    /// * `z` - Scaling factor in z-axis.
    #[rustfmt::skip]
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        Transform {
            m: matrix4x4(
                x,   0.0, 0.0, 0.0,
                0.0, y,   0.0, 0.0,
                0.0, 0.0, z,   0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: matrix4x4(
                1.0 / x, 0.0,     0.0,     0.0,
                0.0,     1.0 / y, 0.0,     0.0,
                0.0,     0.0,     1.0 / z, 0.0,
                0.0,     0.0,     0.0,     1.0,
            ),
        }
    }

    /// Create a transformation representing rotation about a vector. The axis
    /// is normalized before use.
    ///
    /// * `theta` - Angle in degrees.
    /// * `axis`  - Vector.
    pub fn rotate_axis(theta: Float, axis: &Vector3f) -> Transform {
        let a = axis.normalize();
        let r = theta.to_radians();
        let sin_theta = r.sin();
        let cos_theta = r.cos();
        let mut m = Matrix4x4::default();

        // Compute rotation of first basis vector
        m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;
        m.m[0][3] = 0.0;

        // Compute rotations of second and third basis vectors
        m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;
        m.m[1][3] = 0.0;

        m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        m.m[2][3] = 0.0;

        Transform {
            m,
            m_inv: m.transpose(),
        }
    }

    /// Generate a transformation mapping world space to a frame positioned at
    /// `pos` and looking towards `look`.
    ///
    /// * `pos`  - Position of the frame origin.
    /// * `look` - Position to point towards.
    /// * `up`   - Orients the frame about the viewing direction implied by
    ///            `pos` and `look`.
    #[rustfmt::skip]
    pub fn look_at(pos: &Point3f, look: &Point3f, up: &Vector3f) -> Transform {
        let dir = (*look - *pos).normalize();
        let right = up.normalize().cross(&dir).normalize();
        let new_up = dir.cross(&right);

        let camera_to_world = matrix4x4(
            right.x, new_up.x, dir.x, pos.x,
            right.y, new_up.y, dir.y, pos.y,
            right.z, new_up.z, dir.z, pos.z,
            0.0,     0.0,      0.0,   1.0,
        );

        Transform {
            m: camera_to_world.inverse(),
            m_inv: camera_to_world,
        }
    }

    /// Returns the inverse transformation.
    pub fn inverse(&self) -> Transform {
        Transform {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    /// Returns true if matrix is identity matrix.
    pub fn is_identity(&self) -> bool {
        self.m == IDENTITY_MATRIX
    }

    /// Returns `true` if the transformation changes the handedness of the
    /// coordinate system.
    pub fn swaps_handedness(&self) -> bool {
        let m = &self.m;
        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        det < 0.0
    }

    /// Applies transformation to a given point.
    ///
    /// * `p` - The point.
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let m = &self.m;
        let xp = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let yp = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let zp = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let wp = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];

        debug_assert!(wp != 0.0, "transform_point: wp is zero");

        if wp == 1.0 {
            Point3f::new(xp, yp, zp)
        } else {
            Point3f::new(xp, yp, zp) / wp
        }
    }

    /// Returns the transformed point and absolute error due to applying the
    /// transformation to a point.
    ///
    /// * `p` - The point.
    pub fn transform_point_with_error(&self, p: &Point3f) -> (Point3f, Vector3f) {
        let m = &self.m;

        let x_abs_sum = abs(m[0][0] * p.x) + abs(m[0][1] * p.y) + abs(m[0][2] * p.z) + abs(m[0][3]);
        let y_abs_sum = abs(m[1][0] * p.x) + abs(m[1][1] * p.y) + abs(m[1][2] * p.z) + abs(m[1][3]);
        let z_abs_sum = abs(m[2][0] * p.x) + abs(m[2][1] * p.y) + abs(m[2][2] * p.z) + abs(m[2][3]);

        (
            self.transform_point(p),
            gamma(3) * Vector3f::new(x_abs_sum, y_abs_sum, z_abs_sum),
        )
    }

    /// Applies transformation to a given vector.
    ///
    /// * `v` - The vector.
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let m = &self.m;
        Vector3f::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Returns the transformed vector and absolute error due to applying the
    /// transformation to a vector.
    ///
    /// * `v` - The vector.
    pub fn transform_vector_with_error(&self, v: &Vector3f) -> (Vector3f, Vector3f) {
        let m = &self.m;

        let x_abs_err = abs(m[0][0] * v.x) + abs(m[0][1] * v.y) + abs(m[0][2] * v.z);
        let y_abs_err = abs(m[1][0] * v.x) + abs(m[1][1] * v.y) + abs(m[1][2] * v.z);
        let z_abs_err = abs(m[2][0] * v.x) + abs(m[2][1] * v.y) + abs(m[2][2] * v.z);

        (
            self.transform_vector(v),
            gamma(3) * Vector3f::new(x_abs_err, y_abs_err, z_abs_err),
        )
    }

    /// Applies transformation to a given normal.
    ///
    /// * `n` - The normal.
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let m_inv = &self.m_inv.m;
        Normal3f::new(
            m_inv[0][0] * n.x + m_inv[1][0] * n.y + m_inv[2][0] * n.z,
            m_inv[0][1] * n.x + m_inv[1][1] * n.y + m_inv[2][1] * n.z,
            m_inv[0][2] * n.x + m_inv[1][2] * n.y + m_inv[2][2] * n.z,
        )
    }

    /// Applies transformation to a given ray, offsetting the origin to the
    /// edge of its error bounds and shortening `t_max` accordingly.
    ///
    /// * `r` - The ray.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        let (mut o, o_error) = self.transform_point_with_error(&r.o);
        let d = self.transform_vector(&r.d);

        let length_squared = d.length_squared();
        let mut t_max = r.t_max;
        if length_squared > 0.0 {
            let dt = d.abs().dot(&o_error) / length_squared;
            o += d * dt;
            t_max -= dt;
        }

        Ray::new(o, d, t_max, r.time)
    }

    /// Returns the transformed ray and absolute errors due to applying the
    /// transformation to its origin and direction. `t_max` is left unchanged.
    ///
    /// * `r` - The ray.
    pub fn transform_ray_with_error(&self, r: &Ray) -> (Ray, Vector3f, Vector3f) {
        let (mut o, o_error) = self.transform_point_with_error(&r.o);
        let (d, d_error) = self.transform_vector_with_error(&r.d);

        let length_squared = d.length_squared();
        if length_squared > 0.0 {
            let dt = d.abs().dot(&o_error) / length_squared;
            o += d * dt;
        }

        (Ray::new(o, d, r.t_max, r.time), o_error, d_error)
    }

    /// Applies transformation to a given bounding box.
    ///
    /// * `b` - The bounding box.
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        Bounds3f::from(self.transform_point(&Point3f::new(b.p_min.x, b.p_min.y, b.p_min.z)))
            .union(&self.transform_point(&Point3f::new(b.p_max.x, b.p_min.y, b.p_min.z)))
            .union(&self.transform_point(&Point3f::new(b.p_min.x, b.p_max.y, b.p_min.z)))
            .union(&self.transform_point(&Point3f::new(b.p_min.x, b.p_min.y, b.p_max.z)))
            .union(&self.transform_point(&Point3f::new(b.p_min.x, b.p_max.y, b.p_max.z)))
            .union(&self.transform_point(&Point3f::new(b.p_max.x, b.p_max.y, b.p_min.z)))
            .union(&self.transform_point(&Point3f::new(b.p_max.x, b.p_min.y, b.p_max.z)))
            .union(&self.transform_point(&Point3f::new(b.p_max.x, b.p_max.y, b.p_max.z)))
    }

    /// Applies transformation to a given surface interaction.
    ///
    /// * `si` - The surface interaction.
    pub fn transform_surface_interaction(&self, si: &SurfaceInteraction) -> SurfaceInteraction {
        // Transform p and p_error.
        let (p, p_error) = self.transform_point_with_error(&si.hit.p);

        // Transform the remaining members.
        let mut t_si = SurfaceInteraction::new(
            p,
            p_error,
            si.uv,
            self.transform_vector(&si.hit.wo).normalize(),
            self.transform_vector(&si.dpdu),
            self.transform_vector(&si.dpdv),
            self.transform_normal(&si.dndu),
            self.transform_normal(&si.dndv),
            si.hit.time,
            si.shape.clone(),
        );

        let n = self.transform_normal(&si.hit.n).normalize();
        t_si.hit.n = n;

        // Transform the shading parameters and keep the shading normal in the
        // hemisphere of the geometric normal.
        t_si.shading = Shading::new(
            self.transform_normal(&si.shading.n).normalize(),
            self.transform_vector(&si.shading.dpdu),
            self.transform_vector(&si.shading.dpdv),
            self.transform_normal(&si.shading.dndu),
            self.transform_normal(&si.shading.dndv),
        );
        t_si.shading.n = t_si.shading.n.face_forward(&Vector3::from(n));

        t_si
    }
}

impl From<Matrix4x4> for Transform {
    /// Create a transformation from a 4x4 matrix.
    ///
    /// * `m` - A matrix representing a transformation.
    fn from(m: Matrix4x4) -> Self {
        Transform {
            m,
            m_inv: m.inverse(),
        }
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

impl Mul<Transform> for Transform {
    type Output = Self;

    /// Composes this transformation with another one. The resulting transform
    /// applies `rhs` first and then `self`.
    ///
    /// * `rhs` - The transformation to compose.
    fn mul(self, rhs: Self) -> Self {
        Transform {
            m: self.m * rhs.m,
            m_inv: rhs.m_inv * self.m_inv,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn assert_vector_eq(a: Vector3f, b: Vector3f) {
        assert!(
            approx_eq!(Float, a.x, b.x, epsilon = 1e-5)
                && approx_eq!(Float, a.y, b.y, epsilon = 1e-5)
                && approx_eq!(Float, a.z, b.z, epsilon = 1e-5),
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn translate_moves_points_not_vectors() {
        let t = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0));
        let p = t.transform_point(&Point3f::new(0.0, 0.0, 0.0));
        assert!(p == Point3f::new(1.0, 2.0, 3.0));

        let v = t.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert!(v == Vector3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0));
        let p = Point3f::new(4.0, 5.0, 6.0);
        assert!(t.inverse().transform_point(&t.transform_point(&p)) == p);
    }

    #[test]
    fn identity_is_identity() {
        assert!(Transform::default().is_identity());
        assert!(!Transform::translate(&Vector3f::new(1.0, 0.0, 0.0)).is_identity());
    }

    #[test]
    fn composition_applies_right_hand_side_first() {
        let t = Transform::translate(&Vector3f::new(1.0, 0.0, 0.0));
        let s = Transform::scale(2.0, 2.0, 2.0);
        let p = Point3f::new(1.0, 1.0, 1.0);

        // (t * s)(p) scales first and then translates.
        let composed = (t * s).transform_point(&p);
        assert!(composed == t.transform_point(&s.transform_point(&p)));
        assert!(composed == Point3f::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn transform_ray_shortens_extent_by_origin_offset() {
        let t = Transform::translate(&Vector3f::new(10.0, 0.0, 0.0));
        let r = Ray::new(
            Point3f::new(1.0, 2.0, 3.0),
            Vector3f::new(0.0, 0.0, 1.0),
            100.0,
            0.0,
        );

        // The origin moves to the edge of its rounding error bounds and the
        // extent gives back the same distance.
        let tr = t.transform_ray(&r);
        assert!(tr.t_max < r.t_max);

        // The error tracking variant leaves the extent alone.
        let (tr, o_err, _d_err) = t.transform_ray_with_error(&r);
        assert!(tr.t_max == r.t_max);
        assert!(o_err.x > 0.0);
    }

    #[test]
    fn look_at_maps_origin_and_direction() {
        // A frame at (0, 0, -1) looking along +z; the frame's origin maps to
        // zero and the viewing direction to +z.
        let o = Point3f::new(0.0, 0.0, -1.0);
        let d = Vector3f::new(0.0, 0.0, 1.0);
        let t = Transform::look_at(&o, &(o + d), &Vector3f::new(1.0, 0.0, 0.0));

        let p = t.transform_point(&o);
        assert!(p.distance(Point3f::ZERO) < 1e-6);

        let dt = t.transform_vector(&d);
        assert_vector_eq(dt, Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rotate_axis_quarter_turn() {
        let t = Transform::rotate_axis(90.0, &Vector3f::new(0.0, 0.0, 2.0));
        let v = t.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert_vector_eq(v, Vector3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn rotate_axis_normalizes_axis() {
        let unit = Transform::rotate_axis(30.0, &Vector3f::new(0.0, 1.0, 0.0));
        let scaled = Transform::rotate_axis(30.0, &Vector3f::new(0.0, 10.0, 0.0));
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_vector_eq(unit.transform_vector(&v), scaled.transform_vector(&v));
    }

    #[test]
    fn swaps_handedness_on_mirror() {
        assert!(Transform::scale(-1.0, 1.0, 1.0).swaps_handedness());
        assert!(!Transform::scale(1.0, 1.0, 1.0).swaps_handedness());
    }

    #[test]
    fn transform_normal_uses_inverse_transpose() {
        // Scaling squashes the surface; its normal must scale by the inverse
        // to stay perpendicular.
        let t = Transform::scale(2.0, 1.0, 1.0);
        let n = t.transform_normal(&Normal3f::new(1.0, 0.0, 0.0));
        assert!(n == Normal3f::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn transform_bounds_contains_transformed_corners() {
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        let t = Transform::rotate_axis(45.0, &Vector3f::new(0.0, 0.0, 1.0));
        let tb = t.transform_bounds(&b);
        for corner in [
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
            Point3f::new(1.0, 1.0, 1.0),
        ] {
            let tc = t.transform_point(&corner);
            assert!(tb.expand(1e-5).contains(&tc));
        }
    }
}
