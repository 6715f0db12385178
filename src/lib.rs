//! Ray-traceable cubic Bézier curve primitive for a physically based
//! renderer. A logical curve is fanned out into segments that share one
//! immutable descriptor; each segment supports object-space bounding, area
//! estimation and recursive ray intersection.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod core;
pub mod shapes;
