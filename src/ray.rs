//! Ray representation for intersection testing.
//!
//! A ray is defined as r(t) = origin + t * direction.

use crate::vector::{add, scale, Vec3};

/// Half-line in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera origin for primary rays, the light position for
    /// visualization rays.
    pub origin: Vec3,

    /// Direction vector of the ray.
    ///
    /// Primary and visualization rays are normalized, so `t` measures world
    /// distance. The intersection test does not require it.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f64) -> Vec3 {
        add(self.origin, scale(self.direction, t))
    }
}
