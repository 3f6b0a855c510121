//! Point light controlled by the user.

use crate::error::{Result, SceneError};
use crate::vector::{Color, Vec3};

/// Point light. Only the position changes during a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World position. Dragging moves x and y; z stays fixed.
    pub position: Vec3,
    /// Warm white emission color.
    pub color: Color,
    /// Emission strength. Carried for completeness; the silhouette pass ignores it.
    pub intensity: f64,
}

impl Light {
    /// Light at `position` with the default color and intensity.
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    /// Check that `position` can be projected to the screen.
    pub fn validate_position(position: Vec3) -> Result<()> {
        if position.z == 0.0 || !position.is_finite() {
            return Err(SceneError::LightOnCameraPlane);
        }
        Ok(())
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(3.0, 0.0, -5.0),
            color: Color::new(1.0, 0.95, 0.7),
            intensity: 2.5,
        }
    }
}
