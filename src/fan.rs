//! Light-ray fan for the overlay.
//!
//! A flat ring of rays leaves the light in the view's xy plane. Rays that
//! strike the sphere stop at the surface; the rest run out to a fixed range.
//! The fan is a visual effect, not light transport.

use std::f64::consts::TAU;

use crate::camera::Camera;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{normalize, Vec2, Vec3};

/// Number of rays in the fan, one per degree.
pub const RAY_COUNT: usize = 360;

/// World distance an unblocked ray is drawn to.
pub const MAX_RAY_DISTANCE: f64 = 15.0;

/// Hits closer than this are ignored so rays do not stop at their own origin.
pub const MIN_HIT_DISTANCE: f64 = 0.01;

/// Hit distances that count as the sphere blocking a ray.
const BLOCKING_RANGE: Interval = Interval::new(MIN_HIT_DISTANCE, MAX_RAY_DISTANCE);

/// One ray of the fan in screen space.
///
/// `start` is the light's projected position. The host strokes the segment
/// with a gradient that is brightest at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    /// Projected light position.
    pub start: Vec2,
    /// Projected end of the ray, on the sphere or at full range.
    pub end: Vec2,
    /// Whether the ray was stopped by the sphere.
    pub blocked: bool,
}

/// Unit direction of fan ray `index`.
pub fn fan_direction(index: usize) -> Vec3 {
    let angle = (index as f64 / RAY_COUNT as f64) * TAU;
    normalize(Vec3::new(angle.cos(), angle.sin(), 0.0))
}

/// World-space end point of a ray from the light, and whether the sphere blocked it.
pub fn ray_end(scene: &Scene, direction: Vec3) -> (Vec3, bool) {
    let ray = Ray::new(scene.light.position, direction);
    let t = scene.sphere.intersect(&ray);

    if BLOCKING_RANGE.surrounds(t) {
        (ray.at(t), true)
    } else {
        (ray.at(MAX_RAY_DISTANCE), false)
    }
}

/// Build the full fan, ordered by angle starting along +x.
///
/// Returns an empty fan when the light is inside the sphere.
pub fn trace_fan(camera: &Camera, scene: &Scene) -> Vec<RaySegment> {
    if scene.light_inside_sphere() {
        return Vec::new();
    }

    let start = camera.project(scene.light.position);
    (0..RAY_COUNT)
        .map(|i| {
            let (end, blocked) = ray_end(scene, fan_direction(i));
            RaySegment { start, end: camera.project(end), blocked }
        })
        .collect()
}
