//! Curves

use crate::core::geometry::*;
use crate::core::paramset::*;
use crate::core::pbrt::*;
use crate::core::stats::*;
use crate::{register_stats, stat_add, stat_counter, stat_inc, stat_memory_counter, stat_percent};
use std::sync::Arc;

stat_counter!("Scene/Curves created", N_CURVES, report_curve_count_stats);
stat_memory_counter!("Memory/Curves", CURVE_BYTES, report_curve_memory_stats);
stat_percent!(
    "Intersections/Ray-curve intersection tests",
    N_HITS,
    N_TESTS,
    report_curve_intersection_stats,
);
register_stats!(
    report_curve_count_stats,
    report_curve_memory_stats,
    report_curve_intersection_stats,
);

/// Curve types.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CurveType {
    /// Flat curve is always oriented perpendicular to an approaching ray.
    Flat,

    /// Cylinder curve has normal shading and appears cylinderical.
    Cylinder,

    /// Ribbon curve has fixed orientation at start and end points;
    /// intermediate orientations are smoothly interpolated.
    Ribbon,
}

/// Common curve parameters, shared by every segment of one logical curve and
/// immutable after construction.
#[derive(Clone, Debug)]
pub struct CurveCommon {
    /// The curve type.
    pub curve_type: CurveType,

    /// Object space control points.
    pub cp_obj: [Point3f; 4],

    /// The width of the curve at the start and end points.
    pub width: [Float; 2],

    /// Surface normal at the start and end points. Only used for ribbons.
    pub n: [Normal3f; 2],

    /// Angle between the two normal vectors.
    pub normal_angle: Float,

    /// 1 / sin(normal_angle). Undefined and unused when the angle is zero.
    pub inv_sin_normal_angle: Float,
}

impl CurveCommon {
    /// Create common parameters for a curve.
    ///
    /// * `curve_type` - Curve type.
    /// * `c`          - Object space control points.
    /// * `width`      - The width of the curve at the start and end points.
    /// * `norm`       - Surface normal at the start and end points.
    pub fn new(
        curve_type: CurveType,
        c: [Point3f; 4],
        width: [Float; 2],
        norm: Option<&[Normal3f]>,
    ) -> Self {
        match norm {
            Some([n0, n1]) => {
                let n = [n0.normalize(), n1.normalize()];
                let normal_angle = clamp(n[0].dot(&n[1]), 0.0, 1.0).acos();
                let inv_sin_normal_angle = 1.0 / normal_angle.sin();
                Self {
                    curve_type,
                    cp_obj: c,
                    width,
                    n,
                    normal_angle,
                    inv_sin_normal_angle,
                }
            }
            _ => Self {
                curve_type,
                cp_obj: c,
                width,
                n: [Normal3f::ZERO; 2],
                normal_angle: 0.0,
                inv_sin_normal_angle: 0.0,
            },
        }
    }
}

/// A curve modeled as a cubic Bézier spline given by the polynomial:
/// p(u) = (1 - u)^3 * p0 + 3 * (1 - u)^2 * u * p1 + 3 * (1 - u) * u^2 * p2 + u^3 * p3
///
/// Each `Curve` is a view over the parametric sub-range [u_min, u_max] of the
/// shared `CurveCommon` descriptor.
#[derive(Clone)]
pub struct Curve {
    /// Common shape data.
    pub data: Arc<ShapeData>,

    /// Common curve parameters.
    pub common: Arc<CurveCommon>,

    /// Minimum u-parameter for the curve.
    pub u_min: Float,

    /// Maximum u-parameter for the curve.
    pub u_max: Float,
}

impl Curve {
    /// Create a new curve segment.
    ///
    /// * `object_to_world`     - The object to world transfomation.
    /// * `world_to_object`     - The world to object transfomation.
    /// * `reverse_orientation` - Indicates whether their surface normal directions
    ///                           should be reversed from the default.
    /// * `common`              - Shared curve parameters.
    /// * `u_min`               - Minimum u-parameter for the curve.
    /// * `u_max`               - Maximum u-parameter for the curve.
    pub fn new(
        object_to_world: ArcTransform,
        world_to_object: ArcTransform,
        reverse_orientation: bool,
        common: Arc<CurveCommon>,
        u_min: Float,
        u_max: Float,
    ) -> Self {
        debug_assert!(0.0 <= u_min && u_min < u_max && u_max <= 1.0);

        Self {
            data: Arc::new(ShapeData::new(
                Arc::clone(&object_to_world),
                Some(Arc::clone(&world_to_object)),
                reverse_orientation,
            )),
            common,
            u_min,
            u_max,
        }
    }

    /// Create curve segments over an even partition of [0, 1], all sharing
    /// one descriptor.
    ///
    /// * `object_to_world`     - The object to world transfomation.
    /// * `world_to_object`     - The world to object transfomation.
    /// * `reverse_orientation` - Indicates whether their surface normal directions
    ///                           should be reversed from the default.
    /// * `curve_type`          - Curve type.
    /// * `c`                   - Object space control points.
    /// * `width`               - The width of the curve at the start and end points.
    /// * `norm`                - Surface normal at the start and end points.
    /// * `split_depth`         - Split depth giving 2^split_depth segments.
    #[allow(clippy::too_many_arguments)]
    pub fn create_segments(
        object_to_world: ArcTransform,
        world_to_object: ArcTransform,
        reverse_orientation: bool,
        curve_type: CurveType,
        c: [Point3f; 4],
        width: [Float; 2],
        norm: Option<&[Normal3f]>,
        split_depth: Int,
    ) -> Vec<ArcShape> {
        register_stats();

        let common = Arc::new(CurveCommon::new(curve_type, c, width, norm));

        let num_segments = 1_usize << split_depth;
        let mut segments = Vec::<ArcShape>::with_capacity(num_segments);

        let f = 1.0 / num_segments as Float;
        for i in 0..num_segments {
            let u_min = i as Float * f;
            let u_max = (i + 1) as Float * f;
            let curve = Curve::new(
                Arc::clone(&object_to_world),
                Arc::clone(&world_to_object),
                reverse_orientation,
                Arc::clone(&common),
                u_min,
                u_max,
            );
            segments.push(Arc::new(curve) as ArcShape);
        }

        stat_add!(N_CURVES, num_segments);
        stat_add!(
            CURVE_BYTES,
            std::mem::size_of::<CurveCommon>() + num_segments * std::mem::size_of::<Curve>()
        );

        segments
    }

    /// Create `Curve`s from given parameter set, object to world transform,
    /// world to object transform and whether or not surface normal orientation
    /// is reversed.
    ///
    /// * `p` - A tuple containing the parameter set, object to world transform,
    ///         world to object transform and whether or not surface normal
    ///         orientation is reversed.
    pub fn from_props(p: (&ParamSet, ArcTransform, ArcTransform, bool)) -> Vec<ArcShape> {
        let (params, o2w, w2o, reverse_orientation) = p;

        let width = params.find_one_float("width", 1.0);
        let width0 = params.find_one_float("width0", width);
        let width1 = params.find_one_float("width1", width);

        let cp = params.find_point3f("P");
        if cp.len() != 4 {
            error!(
                "Must provide 4 control points for 'curve' primitive. (Provided {}).",
                cp.len()
            );
            return vec![];
        }

        let ctype = params.find_one_string("type", String::from("flat"));
        let curve_type = match &ctype[..] {
            "flat" => CurveType::Flat,
            "ribbon" => CurveType::Ribbon,
            "cylinder" => CurveType::Cylinder,
            t => {
                warn!("Unknown curve type '{}'. Using 'cylinder'.", t);
                CurveType::Cylinder
            }
        };

        let mut n = params.find_normal3f("N");
        if !n.is_empty() {
            if curve_type != CurveType::Ribbon {
                warn!("Curve normals are only used with 'ribbon' type curves.");
                n = vec![];
            } else if n.len() != 2 {
                error!(
                    "Must provide two normals with 'N' parameter for ribbon curves. (Provided {}).",
                    n.len()
                );
                return vec![];
            }
        }
        if curve_type == CurveType::Ribbon && n.is_empty() {
            error!("Must provide normals 'N' at curve endpoints with ribbon curves.");
            return vec![];
        }

        // The split depth historically arrives through the float accessor;
        // an integer-typed parameter overrides it.
        let split_depth = params.find_one_float("splitdepth", 2.0) as Int;
        let sd = params.find_one_int("splitdepth", split_depth);

        Curve::create_segments(
            o2w,
            w2o,
            reverse_orientation,
            curve_type,
            [cp[0], cp[1], cp[2], cp[3]],
            [width0, width1],
            if n.is_empty() { None } else { Some(&n[0..2]) },
            sd,
        )
    }

    /// Computes the control points of the sub-range [u_min, u_max] via four
    /// blossom evaluations.
    fn blossom_bezier(&self) -> [Point3f; 4] {
        [
            blossom_bezier(&self.common.cp_obj, self.u_min, self.u_min, self.u_min),
            blossom_bezier(&self.common.cp_obj, self.u_min, self.u_min, self.u_max),
            blossom_bezier(&self.common.cp_obj, self.u_min, self.u_max, self.u_max),
            blossom_bezier(&self.common.cp_obj, self.u_max, self.u_max, self.u_max),
        ]
    }

    /// Recursively split the curve into two halves until a leaf segment is
    /// close enough to a line for the closed-form distance test.
    ///
    /// * `ray`           - The ray in the coordinate system centered at its
    ///                     origin with its direction as the +z axis.
    /// * `cp`            - The ray-space control points of the current sub-range.
    /// * `ray_to_object` - Transform bringing things out of the ray coordinate
    ///                     system.
    /// * `u0`            - The starting u-parameter of the sub-range.
    /// * `u1`            - The ending u-parameter of the sub-range.
    /// * `depth`         - The remaining recursion depth.
    fn recursive_intersect(
        &self,
        ray: &Ray,
        cp: &[Point3f; 4],
        ray_to_object: &Transform,
        u0: Float,
        u1: Float,
        depth: u32,
    ) -> Option<Intersection> {
        let ray_length = ray.d.length();
        let z_max = ray_length * ray.t_max;

        // Try to cull the curve segment versus the ray. The curve lies within
        // maxWidth/2 of the convex hull of its control points, and the ray
        // within the segment [0, zMax] of the +z axis.
        let max_width = max(
            lerp(u0, self.common.width[0], self.common.width[1]),
            lerp(u1, self.common.width[0], self.common.width[1]),
        );
        let curve_bounds = Bounds3f::new(cp[0], cp[1]).union(&Bounds3f::new(cp[2], cp[3]));
        let ray_bounds = Bounds3f::new(
            Point3f::new(-0.5 * max_width, -0.5 * max_width, 0.0),
            Point3f::new(0.5 * max_width, 0.5 * max_width, z_max),
        );
        if !curve_bounds.overlaps(&ray_bounds) {
            return None;
        }

        if depth > 0 {
            // Split curve segment into sub-segments and test them in order.
            // Taking the left half first and short-circuiting returns the
            // nearest accepted hit.
            let cp_split = subdivide_bezier(cp);
            let u_mid = 0.5 * (u0 + u1);

            let cps = [cp_split[0], cp_split[1], cp_split[2], cp_split[3]];
            if let Some(hit) = self.recursive_intersect(ray, &cps, ray_to_object, u0, u_mid, depth - 1)
            {
                return Some(hit);
            }

            let cps = [cp_split[3], cp_split[4], cp_split[5], cp_split[6]];
            return self.recursive_intersect(ray, &cps, ray_to_object, u_mid, u1, depth - 1);
        }

        // Intersect ray with the linearized curve segment.

        // Test sample point against tangent perpendicular at curve start.
        let segment_direction = Point2f::from(cp[3]) - Point2f::from(cp[0]);
        let mut start_tangent = Point2f::from(cp[1]) - Point2f::from(cp[0]);
        if segment_direction.dot(&start_tangent) < 0.0 {
            start_tangent = -start_tangent;
        }
        if start_tangent.dot(&-Vector2f::from(cp[0])) < 0.0 {
            return None;
        }

        // Test sample point against tangent perpendicular at curve end.
        let mut end_tangent = Point2f::from(cp[2]) - Point2f::from(cp[3]);
        if segment_direction.dot(&end_tangent) < 0.0 {
            end_tangent = -end_tangent;
        }
        if end_tangent.dot(&Vector2f::from(cp[3])) < 0.0 {
            return None;
        }

        // Compute line w that gives minimum distance to sample point.
        let denom = segment_direction.length_squared();
        if denom == 0.0 {
            return None;
        }
        let w = -Vector2f::from(cp[0]).dot(&segment_direction) / denom;

        // Compute u coordinate of curve intersection point and hit_width.
        let u = clamp(lerp(w, u0, u1), u0, u1);
        let closest_pt = lerp(w, Point2f::from(cp[0]), Point2f::from(cp[3]));
        let pt_line_dist = (closest_pt.x * closest_pt.x + closest_pt.y * closest_pt.y).sqrt();
        let edge_func = segment_direction.x * -cp[0].y + cp[0].x * segment_direction.y;

        // Compute effective curve width for the candidate intersection.
        let mut hit_width = lerp(u, self.common.width[0], self.common.width[1]);
        let mut n_hit = Normal3f::ZERO;
        if self.common.curve_type == CurveType::Ribbon {
            // Scale hit_width based on ribbon orientation. With coincident
            // endpoint normals the spherical blend degenerates; use the
            // endpoint normal directly rather than divide by sin(0).
            n_hit = if self.common.normal_angle == 0.0 {
                self.common.n[0]
            } else {
                let sin0 =
                    ((1.0 - u) * self.common.normal_angle).sin() * self.common.inv_sin_normal_angle;
                let sin1 = (u * self.common.normal_angle).sin() * self.common.inv_sin_normal_angle;
                sin0 * self.common.n[0] + sin1 * self.common.n[1]
            };
            hit_width *= n_hit.abs_dot(&(-ray.d / ray_length));
        }
        let v = if edge_func > 0.0 {
            0.5 + pt_line_dist / hit_width
        } else {
            0.5 - pt_line_dist / hit_width
        };

        // Test intersection point against curve width.
        let (pc, _dpcdw) = eval_bezier(cp, clamp(w, 0.0, 1.0));
        if pc.x * pc.x + pc.y * pc.y > hit_width * hit_width * 0.25 {
            return None;
        }
        if pc.z < 0.0 || pc.z > z_max {
            return None;
        }

        // Compute hit t for the curve intersection.
        let t_hit = pc.z / ray_length;

        // Compute error bounds for the curve intersection.
        let p_error = Vector3f::new(2.0 * hit_width, 2.0 * hit_width, 2.0 * hit_width);

        // Compute dpdu and dpdv. The u-derivative comes from the full curve,
        // not the reshaped sub-range.
        let (_, dpdu) = eval_bezier(&self.common.cp_obj, u);

        let dpdv = if self.common.curve_type == CurveType::Ribbon {
            Vector3::from(n_hit).cross(&dpdu).normalize() * hit_width
        } else {
            // Compute curve dpdv for flat and cylinder curves in the plane
            // perpendicular to the ray.
            let dpdu_plane = ray_to_object.inverse().transform_vector(&dpdu);
            let mut dpdv_plane =
                Vector3f::new(-dpdu_plane.y, dpdu_plane.x, 0.0).normalize() * hit_width;
            if self.common.curve_type == CurveType::Cylinder {
                // Rotate dpdv_plane to give the cylindrical appearance.
                let theta = lerp(v, -90.0, 90.0);
                let rot = Transform::rotate_axis(-theta, &dpdu_plane);
                dpdv_plane = rot.transform_vector(&dpdv_plane);
            }
            ray_to_object.transform_vector(&dpdv_plane)
        };

        let si = SurfaceInteraction::new(
            ray.at(t_hit),
            p_error,
            Point2f::new(u, v),
            -ray.d,
            dpdu,
            dpdv,
            Normal3f::ZERO,
            Normal3f::ZERO,
            ray.time,
            Some(Arc::new(self.clone())),
        );
        let isect = self.data.object_to_world.transform_surface_interaction(&si);

        stat_inc!(N_HITS);
        Some(Intersection::new(t_hit, isect))
    }
}

impl Shape for Curve {
    /// Returns the shape type. Usually these are behind ArcShape and harder to
    /// debug. So this will be helpful.
    fn get_type(&self) -> &'static str {
        "curve"
    }

    /// Returns the underlying shape data.
    fn get_data(&self) -> Arc<ShapeData> {
        Arc::clone(&self.data)
    }

    /// Returns a bounding box in the shapes object space.
    fn object_bound(&self) -> Bounds3f {
        // Compute object-space control points for curve segment.
        let cp_obj = self.blossom_bezier();

        // Using the convex hull property; i.e. the curve lies within the
        // convex hull of its control points. Then expand the bounds by half
        // the maximum width over the parametric sub-range.
        let width = [
            lerp(self.u_min, self.common.width[0], self.common.width[1]),
            lerp(self.u_max, self.common.width[0], self.common.width[1]),
        ];

        Bounds3f::new(cp_obj[0], cp_obj[1])
            .union(&Bounds3f::new(cp_obj[2], cp_obj[3]))
            .expand(max(width[0], width[1]) * 0.5)
    }

    /// Returns geometric details if a ray intersects the shape intersection.
    /// If there is no intersection, `None` is returned.
    ///
    /// * `r`                  - The ray.
    /// * `_test_alpha_texture` - Perform alpha texture tests (not supported).
    fn intersect(&self, r: &Ray, _test_alpha_texture: bool) -> Option<Intersection> {
        stat_inc!(N_TESTS);

        // Transform ray to object space. transform_ray() would offset the
        // origin to its error bounds and shorten t_max, which must not happen
        // here, so use the error tracking variant.
        let (ray, _o_err, _d_err) = self
            .data
            .world_to_object
            .as_ref()
            .map(|w2o| w2o.transform_ray_with_error(r))?;

        // Compute object-space control points for curve segment.
        let cp_obj = self.blossom_bezier();

        // Project curve control points to plane perpendicular to ray. In this
        // coordinate system the ray is the +z axis and the intersection
        // reduces to a 2-D problem plus depth.
        let (dx, _dy) = coordinate_system(&ray.d);
        let object_to_ray = Transform::look_at(&ray.o, &(ray.o + ray.d), &dx);
        let cp = [
            object_to_ray.transform_point(&cp_obj[0]),
            object_to_ray.transform_point(&cp_obj[1]),
            object_to_ray.transform_point(&cp_obj[2]),
            object_to_ray.transform_point(&cp_obj[3]),
        ];

        // Compute refinement depth for the curve from the largest xy second
        // difference of consecutive control points.
        let l0 = (0..2).fold(0.0, |l, i| {
            max(
                l,
                max(
                    abs(cp[i].x - 2.0 * cp[i + 1].x + cp[i + 2].x),
                    abs(cp[i].y - 2.0 * cp[i + 1].y + cp[i + 2].y),
                ),
            )
        });

        let eps = max(self.common.width[0], self.common.width[1]) * 0.05; // width / 20

        // Compute log base 4 from the natural log.
        let fr0 = (1.41421356237 * 12.0 * l0 / (8.0 * eps)).ln() * 0.7213475108;
        let r0 = fr0.round() as Int;
        let max_depth = clamp(r0, 0, 10) as u32;

        self.recursive_intersect(
            &ray,
            &cp,
            &object_to_ray.inverse(),
            self.u_min,
            self.u_max,
            max_depth,
        )
    }

    /// Returns the surface area of the shape in object space.
    fn area(&self) -> Float {
        // Compute object-space control points for curve segment.
        let cp_obj = self.blossom_bezier();
        let width0 = lerp(self.u_min, self.common.width[0], self.common.width[1]);
        let width1 = lerp(self.u_max, self.common.width[0], self.common.width[1]);
        let avg_width = (width0 + width1) * 0.5;
        let approx_length = (0..3).fold(0.0, |a, i| a + cp_obj[i].distance(cp_obj[i + 1]));
        approx_length * avg_width
    }

    /// Sample a point on the surface and return the PDF with respect to area
    /// on the surface.
    ///
    /// * `_u` - Sample value to use.
    fn sample_area(&self, _u: &Point2f) -> (Hit, Float) {
        error!("Curve::sample_area() is not implemented.");
        unimplemented!("Curve::sample_area()");
    }
}

/// Computes the blossom p(u0, u1, u2) of a cubic Bézier spline.
///
/// * `p`  - Control points.
/// * `u0` - The first u-extent.
/// * `u1` - The second u-extent.
/// * `u2` - The third u-extent.
fn blossom_bezier(p: &[Point3f; 4], u0: Float, u1: Float, u2: Float) -> Point3f {
    let a = [
        lerp(u0, p[0], p[1]),
        lerp(u0, p[1], p[2]),
        lerp(u0, p[2], p[3]),
    ];
    let b = [lerp(u1, a[0], a[1]), lerp(u1, a[1], a[2])];
    lerp(u2, b[0], b[1])
}

/// Subdivides a Bézier curve at the parametric midpoint and returns 7 control
/// points; points 0 - 3 are control points for the first half of the split
/// curve and points 3 - 6 for the second half.
///
/// * `cp` - The control points.
fn subdivide_bezier(cp: &[Point3f; 4]) -> [Point3f; 7] {
    [
        cp[0],
        (cp[0] + cp[1]) / 2.0,
        (cp[0] + 2.0 * cp[1] + cp[2]) / 4.0,
        (cp[0] + 3.0 * cp[1] + 3.0 * cp[2] + cp[3]) / 8.0,
        (cp[1] + 2.0 * cp[2] + cp[3]) / 4.0,
        (cp[2] + cp[3]) / 2.0,
        cp[3],
    ]
}

/// Evaluate a Bézier curve at given parameter and return the point and
/// derivative at the point.
///
/// * `cp` - The control points.
/// * `u`  - The parameter to evaluate.
fn eval_bezier(cp: &[Point3f; 4], u: Float) -> (Point3f, Vector3f) {
    let cp1 = [
        lerp(u, cp[0], cp[1]),
        lerp(u, cp[1], cp[2]),
        lerp(u, cp[2], cp[3]),
    ];
    let cp2 = [lerp(u, cp1[0], cp1[1]), lerp(u, cp1[1], cp1[2])];

    let deriv = if (cp2[1] - cp2[0]).length_squared() > 0.0 {
        3.0 * (cp2[1] - cp2[0])
    } else {
        // With coincident control points the derivative is legitimately zero
        // at the endpoints, which breaks the surface normal there. Fall back
        // to the chord between the first and last control points.
        cp[3] - cp[0]
    };

    (lerp(u, cp2[0], cp2[1]), deriv)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
