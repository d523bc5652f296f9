//! Implicit-surface primitives.
//!
//! Every shape reports the closest root strictly inside the requested
//! interval, with a unit normal facing the incoming ray.

mod cylinder;
mod disk;
mod plane;
mod sphere;

pub use cylinder::{ClosedCylinderY, CylinderY};
pub use disk::Disk;
pub use plane::Plane;
pub use sphere::Sphere;

use thiserror::Error;

/// Errors raised while constructing shapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Surface normal {0:?} cannot be normalized")]
    DegenerateNormal([f64; 3]),
}

/// Minimum |denominator| for a ray to be considered non-parallel to a plane.
const PARALLEL_TOLERANCE: f64 = 1.0e-12;
