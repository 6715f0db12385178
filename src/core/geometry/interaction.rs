//! Interactions

use super::{Float, Normal3f, Point3f, Vector3f};

/// Hit provides common data shared by all interaction kinds.
#[derive(Clone)]
pub struct Hit {
    /// Point of interaction.
    pub p: Point3f,

    /// Time when interaction occurred.
    pub time: Float,

    /// Floating point error for ray intersection points.
    pub p_error: Vector3f,

    /// The negative ray direction (outgoing direction used when computing
    /// lighting at points).
    pub wo: Vector3f,

    /// Surface normal at the point `p`.
    pub n: Normal3f,
}

impl Hit {
    /// Create a new hit.
    ///
    /// * `p`       - Point of interaction.
    /// * `time`    - Time when interaction occurred.
    /// * `p_error` - Floating point error for ray intersection points.
    /// * `wo`      - The negative ray direction.
    /// * `n`       - Surface normal at the point `p`.
    pub fn new(p: Point3f, time: Float, p_error: Vector3f, wo: Vector3f, n: Normal3f) -> Self {
        Self {
            p,
            time,
            p_error,
            wo,
            n,
        }
    }

    /// Returns `true` if this hit carries surface geometry.
    pub fn is_surface_interaction(&self) -> bool {
        self.n != Normal3f::ZERO
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
