//! Pointer handling: picking the light glyph and dragging it on its depth plane.

use log::trace;

use crate::camera::Camera;
use crate::vector::{Vec2, Vec3};

/// Screen radius around the light's projection that picks it up.
/// Matches the glyph's glow radius.
pub const PICK_RADIUS: f64 = 60.0;

/// Pointer input in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a position.
    Down(Vec2),
    /// Pointer moved to a position.
    Move(Vec2),
    /// Button released.
    Up,
    /// Pointer left the render surface.
    Leave,
}

/// Whether the light is currently being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// Light is not held; moves are ignored.
    #[default]
    Idle,
    /// Light follows pointer moves until release.
    Dragging,
}

/// True if `pointer` is within [`PICK_RADIUS`] of the light's projection.
pub fn hits_glyph(camera: &Camera, light_position: Vec3, pointer: Vec2) -> bool {
    let glyph = camera.project(light_position);
    let distance = glyph.distance(pointer);
    trace!("pick at {pointer:?}: {distance:.1}px from glyph at {glyph:?}");
    distance < PICK_RADIUS
}

/// New light position under `pointer`, keeping the light's current depth.
pub fn drag_target(camera: &Camera, light_position: Vec3, pointer: Vec2) -> Vec3 {
    camera.unproject(pointer, light_position.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_on_glyph_center() {
        let camera = Camera::default();
        let light = Vec3::new(3.0, 0.0, -5.0);
        let glyph = camera.project(light);
        assert!(hits_glyph(&camera, light, glyph));
    }

    #[test]
    fn test_pick_radius_boundary() {
        let camera = Camera::default();
        let light = Vec3::new(3.0, 0.0, -5.0);
        let glyph = camera.project(light);

        assert!(hits_glyph(&camera, light, glyph + Vec2::new(59.0, 0.0)));
        assert!(!hits_glyph(&camera, light, glyph + Vec2::new(60.0, 0.0)));
        assert!(!hits_glyph(&camera, light, glyph - Vec2::new(0.0, 60.0)));
        assert!(!hits_glyph(&camera, light, glyph + Vec2::new(0.0, 60.5)));
        assert!(!hits_glyph(&camera, light, glyph + Vec2::new(-45.0, 45.0)));
        assert!(!hits_glyph(&camera, light, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_drag_target_follows_pointer() {
        let camera = Camera::default();
        let light = Vec3::new(3.0, 0.0, -5.0);
        let pointer = Vec2::new(300.0, 200.0);

        let moved = drag_target(&camera, light, pointer);
        assert_eq!(moved.z, light.z);
        assert!(camera.project(moved).distance(pointer) < 1e-9);
        // Left and up of center.
        assert!(moved.x < 0.0 && moved.y > 0.0);
    }
}
