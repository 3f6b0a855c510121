//! World-to-screen projection for the overlay, and its inverse for dragging.
//!
//! The overlay uses a simplified perspective divide by `|z|`, so points are
//! always treated as being in front of the camera. Horizontal screen
//! coordinates are scaled by `height / width`, the reciprocal of the factor
//! [`Camera::primary_ray`] applies. The two mappings therefore disagree when
//! the surface is not square; the overlay keeps its own convention so pick,
//! drag and drawing stay mutually consistent.

use crate::camera::Camera;
use crate::vector::{Vec2, Vec3};

impl Camera {
    /// `height / width`, the horizontal factor used by the overlay mapping.
    pub fn overlay_aspect(&self) -> f64 {
        self.height() as f64 / self.width() as f64
    }

    /// Project a world point to screen pixels (origin top-left, y down).
    ///
    /// `point.z` must be non-zero.
    pub fn project(&self, point: Vec3) -> Vec2 {
        let width = self.width() as f64;
        let height = self.height() as f64;
        let depth = point.z.abs();

        let x = ((point.x / depth) * self.overlay_aspect() + 1.0) * width / 2.0;
        let y = ((-point.y / depth) + 1.0) * height / 2.0;
        Vec2::new(x, y)
    }

    /// Recover the world point at depth `z` that projects to `screen`.
    ///
    /// Exact inverse of [`Camera::project`] on the plane of constant `z`.
    pub fn unproject(&self, screen: Vec2, z: f64) -> Vec3 {
        let (u, v) = self.ndc(screen.x, screen.y);
        let depth = z.abs();

        let x = u * depth / self.overlay_aspect();
        let y = -v * depth;
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_axis_point_to_center() {
        let camera = Camera::default();
        let screen = camera.project(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(screen, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_project_default_light() {
        let camera = Camera::default();
        let screen = camera.project(Vec3::new(3.0, 0.0, -5.0));
        // (0.6 * 2/3 + 1) * 600
        assert!((screen.x - 840.0).abs() < 1e-9);
        assert!((screen.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_depth_sign_is_ignored() {
        let camera = Camera::default();
        let front = camera.project(Vec3::new(1.0, 2.0, -4.0));
        let behind = camera.project(Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(front, behind);
    }

    #[test]
    fn test_up_is_screen_up() {
        let camera = Camera::default();
        let screen = camera.project(Vec3::new(0.0, 1.0, -5.0));
        assert!(screen.y < 400.0);
    }

    #[test]
    fn test_unproject_keeps_depth() {
        let camera = Camera::default();
        let point = camera.unproject(Vec2::new(123.0, 456.0), -7.5);
        assert_eq!(point.z, -7.5);
    }

    #[test]
    fn test_round_trip_through_unproject() {
        let camera = Camera::new(1200, 800).unwrap();
        for &(x, y) in &[(0.0, 0.0), (600.0, 400.0), (1199.0, 799.0), (37.5, 612.25)] {
            for &z in &[-5.0, -0.5, -20.0, 3.0] {
                let screen = Vec2::new(x, y);
                let back = camera.project(camera.unproject(screen, z));
                assert!((back - screen).length() < 1e-6, "{screen:?} at z={z}");
            }
        }
    }
}
