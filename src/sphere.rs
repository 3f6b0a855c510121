//! Sphere primitive and the ray/sphere intersection test.

use crate::error::{Result, SceneError};
use crate::ray::Ray;
use crate::vector::{dot, length, subtract, Color, Vec3};

/// Hit distance returned when a ray misses the sphere.
pub const NO_HIT: f64 = -1.0;

/// Sphere of the default scene, checked when the constant is evaluated.
const DEFAULT_SPHERE: Sphere = Sphere::checked(Vec3::new(-2.0, 0.0, -5.0), 1.5, Color::ONE);

/// NaN fails both comparisons.
const fn radius_is_valid(radius: f64) -> bool {
    radius > 0.0 && radius < f64::INFINITY
}

/// Sphere defined by center, radius and surface color.
///
/// Only constructible through [`Sphere::new`], so the radius is always
/// positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Rejects radii that are not strictly positive and finite.
    pub fn new(center: Vec3, radius: f64, color: Color) -> Result<Self> {
        if !radius_is_valid(radius) {
            return Err(SceneError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius, color })
    }

    const fn checked(center: Vec3, radius: f64, color: Color) -> Self {
        assert!(radius_is_valid(radius), "sphere radius must be positive");
        Self { center, radius, color }
    }

    /// Center point of the sphere in world coordinates.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere, always positive.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface color. The flat silhouette pass renders every hit white.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Signed distance along `ray` to the near intersection with the sphere.
    ///
    /// Solves |O + tD - C|² = r² and returns the smaller root, which is
    /// negative when the sphere lies behind the origin or when the origin is
    /// inside it. Returns [`NO_HIT`] when the ray misses entirely. Callers
    /// treat any value ≤ 0 as no usable hit.
    pub fn intersect(&self, ray: &Ray) -> f64 {
        let oc = subtract(ray.origin, self.center);

        let a = dot(ray.direction, ray.direction);
        let b = 2.0 * dot(oc, ray.direction);
        let c = dot(oc, oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return NO_HIT;
        }

        (-b - discriminant.sqrt()) / (2.0 * a)
    }

    /// True if `point` lies strictly inside the sphere.
    pub fn contains(&self, point: Vec3) -> bool {
        length(subtract(point, self.center)) < self.radius
    }
}

impl Default for Sphere {
    /// White sphere of radius 1.5 centered at (-2, 0, -5).
    fn default() -> Self {
        DEFAULT_SPHERE
    }
}
