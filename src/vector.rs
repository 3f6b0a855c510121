//! Vector algebra for scene points, directions and colors.
//!
//! Scene math runs in double precision. The free functions mirror the
//! operator forms on [`Vec3`] and exist so call sites read like the
//! equations they implement.

pub use glam::{DVec2 as Vec2, DVec3 as Vec3};

/// RGB color with components in [0, 1].
pub type Color = Vec3;

/// Component-wise `a - b`.
#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Component-wise `a + b`.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Scale every component of `v` by `s`.
#[inline]
pub fn scale(v: Vec3, s: f64) -> Vec3 {
    v * s
}

/// Scalar product of `a` and `b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Euclidean length, `sqrt(dot(v, v))`.
#[inline]
pub fn length(v: Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// The zero vector normalizes to itself instead of producing NaNs.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len > 0.0 {
        v / len
    } else {
        Vec3::ZERO
    }
}
