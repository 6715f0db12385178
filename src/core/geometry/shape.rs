//! Shapes

use super::{ArcTransform, Bounds3f, Float, Hit, Point2f, Ray, SurfaceInteraction};
use std::sync::Arc;

/// Shape common functions
pub trait Shape {
    /// Returns the shape type. Usually these are behind ArcShape and harder to
    /// debug. So this will be helpful.
    fn get_type(&self) -> &'static str;

    /// Returns the underlying shape data.
    fn get_data(&self) -> Arc<ShapeData>;

    /// Returns a bounding box in the shapes object space.
    fn object_bound(&self) -> Bounds3f;

    /// Returns a bounding box in the world space.
    ///
    /// Default is to transform the object bounds with the object-to-world
    /// transformation. Override for tighter bounds implementation.
    fn world_bound(&self) -> Bounds3f {
        self.get_data()
            .object_to_world
            .transform_bounds(&self.object_bound())
    }

    /// Returns geometric details if a ray intersects the shape intersection.
    /// If there is no intersection, `None` is returned.
    ///
    /// * `r`                  - The ray.
    /// * `test_alpha_texture` - Perform alpha texture tests.
    fn intersect(&self, r: &Ray, test_alpha_texture: bool) -> Option<Intersection>;

    /// Returns `true` if a ray-shape intersection succeeds; otherwise `false`.
    ///
    /// * `r`                  - The ray.
    /// * `test_alpha_texture` - Perform alpha texture tests; default to true.
    fn intersect_p(&self, r: &Ray, test_alpha_texture: bool) -> bool {
        self.intersect(r, test_alpha_texture).is_some()
    }

    /// Returns the surface area of the shape in object space.
    fn area(&self) -> Float;

    /// Sample a point on the surface and return the PDF with respect to area
    /// on the surface.
    ///
    /// NOTE: The returned `Hit` value will have `wo` = Vector3f::ZERO.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> (Hit, Float);

    /// Return the PDF for the shape. By default it is 1/area.
    ///
    /// * `hit` - The interaction hit point.
    fn pdf(&self, _hit: &Hit) -> Float {
        1.0 / self.area()
    }
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape + Send + Sync>;

/// Stores geometric information about a single ray-shape intersection.
#[derive(Clone)]
pub struct Intersection {
    /// The parameter along the ray where intersection occurred.
    pub t: Float,

    /// The surface interaction details.
    pub isect: SurfaceInteraction,
}

impl Intersection {
    /// Create a new intersection.
    ///
    /// * `t`     - The parameter along the ray where intersection occurred.
    /// * `isect` - The surface interaction details.
    pub fn new(t: Float, isect: SurfaceInteraction) -> Self {
        Self { t, isect }
    }
}

/// Store common shape data.
#[derive(Clone)]
pub struct ShapeData {
    /// The object to world transfomation.
    pub object_to_world: ArcTransform,

    /// The world to object transfomation.
    pub world_to_object: Option<ArcTransform>,

    /// Indicates whether their surface normal directions should be reversed
    /// from the default
    pub reverse_orientation: bool,

    /// Indicates if `object_to_world` transformation changes the handedness
    /// of the coordinate system.
    pub transform_swaps_handedness: bool,
}

impl ShapeData {
    /// Create a new instance of shape data.
    ///
    /// * `object_to_world`     - The object to world transfomation.
    /// * `world_to_object`     - The world to object transfomation.
    /// * `reverse_orientation` - Indicates whether their surface normal
    ///                           directions should be reversed from the default.
    pub fn new(
        object_to_world: ArcTransform,
        world_to_object: Option<ArcTransform>,
        reverse_orientation: bool,
    ) -> Self {
        Self {
            object_to_world: Arc::clone(&object_to_world),
            world_to_object,
            reverse_orientation,
            transform_swaps_handedness: object_to_world.swaps_handedness(),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::{Transform, Vector3f};
    use super::*;

    #[test]
    fn shape_data_tracks_handedness() {
        let o2w = Arc::new(Transform::scale(-1.0, 1.0, 1.0));
        let w2o = Arc::new(o2w.inverse());
        let data = ShapeData::new(o2w, Some(w2o), false);
        assert!(data.transform_swaps_handedness);

        let o2w = Arc::new(Transform::translate(&Vector3f::new(1.0, 0.0, 0.0)));
        let w2o = Arc::new(o2w.inverse());
        let data = ShapeData::new(o2w, Some(w2o), true);
        assert!(!data.transform_swaps_handedness);
        assert!(data.reverse_orientation);
    }
}
