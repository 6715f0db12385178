//! Surface Interactions

use super::{ArcShape, Float, Hit, Normal3f, Point2f, Point3f, Vector3f};

/// SurfaceInteraction represents geometry of a particular point on a surface.
#[derive(Clone)]
pub struct SurfaceInteraction {
    /// The common interaction data.
    pub hit: Hit,

    /// The uv coordinates from surface parametrization.
    pub uv: Point2f,

    /// Parametric partial derivative of the point ∂p/∂u.
    pub dpdu: Vector3f,

    /// Parametric partial derivative of the point ∂p/∂v.
    pub dpdv: Vector3f,

    /// Differential change ∂n/∂u in surface normal as we move along u.
    pub dndu: Normal3f,

    /// Differential change ∂n/∂v in surface normal as we move along v.
    pub dndv: Normal3f,

    /// Shading geometry used for perturbed values.
    pub shading: Shading,

    /// The shape that was hit.
    pub shape: Option<ArcShape>,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `p`       - Point of interaction.
    /// * `p_error` - Floating point error for ray intersection points.
    /// * `uv`      - The uv coordinates from surface parametrization.
    /// * `wo`      - The negative ray direction.
    /// * `dpdu`    - Parametric partial derivative of the point ∂p/∂u.
    /// * `dpdv`    - Parametric partial derivative of the point ∂p/∂v.
    /// * `dndu`    - Differential change ∂n/∂u in surface normal along u.
    /// * `dndv`    - Differential change ∂n/∂v in surface normal along v.
    /// * `time`    - Time when interaction occurred.
    /// * `shape`   - The shape that was hit.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: Point3f,
        p_error: Vector3f,
        uv: Point2f,
        wo: Vector3f,
        dpdu: Vector3f,
        dpdv: Vector3f,
        dndu: Normal3f,
        dndv: Normal3f,
        time: Float,
        shape: Option<ArcShape>,
    ) -> Self {
        // Calculate normal n from the partial derivatives.
        let mut n = Normal3f::from(dpdu.cross(&dpdv).normalize());

        // Adjust normal based on orientation and handedness.
        if let Some(s) = shape.as_ref() {
            let data = s.get_data();
            if data.reverse_orientation ^ data.transform_swaps_handedness {
                n *= -1.0;
            }
        }

        Self {
            hit: Hit::new(p, time, p_error, wo, n),
            uv,
            dpdu,
            dpdv,
            dndu,
            dndv,
            shading: Shading::new(n, dpdu, dpdv, dndu, dndv),
            shape,
        }
    }
}

/// Shading geometry used for perturbed values for bump mapping.
#[derive(Clone)]
pub struct Shading {
    /// Surface normal.
    pub n: Normal3f,

    /// Parametric partial derivative of the point ∂p/∂u.
    pub dpdu: Vector3f,

    /// Parametric partial derivative of the point ∂p/∂v.
    pub dpdv: Vector3f,

    /// Differential change ∂n/∂u in surface normal as we move along u.
    pub dndu: Normal3f,

    /// Differential change ∂n/∂v in surface normal as we move along v.
    pub dndv: Normal3f,
}

impl Shading {
    /// Create a new shading struct.
    ///
    /// * `n`    - Surface normal.
    /// * `dpdu` - Parametric partial derivative of the point ∂p/∂u.
    /// * `dpdv` - Parametric partial derivative of the point ∂p/∂v.
    /// * `dndu` - Differential change ∂n/∂u in surface normal along u.
    /// * `dndv` - Differential change ∂n/∂v in surface normal along v.
    pub fn new(n: Normal3f, dpdu: Vector3f, dpdv: Vector3f, dndu: Normal3f, dndv: Normal3f) -> Self {
        Self {
            n,
            dpdu,
            dpdv,
            dndu,
            dndv,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
