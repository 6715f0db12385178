//! Shapes

mod curve;

// Re-export
pub use curve::*;
