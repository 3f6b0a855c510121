//! Error types for scene construction.
//!
//! The numeric core is total; these only guard the invariants that keep it so.

use thiserror::Error;

/// Result type alias for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// Invalid scene or surface configuration
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// Sphere radius must be strictly positive and finite
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Light sits on the camera plane, where screen projection is undefined
    #[error("light position must have a non-zero z component")]
    LightOnCameraPlane,

    /// Render surface with no pixels
    #[error("render surface must be non-empty, got {width}x{height}")]
    EmptySurface {
        /// Requested surface width
        width: u32,
        /// Requested surface height
        height: u32,
    },
}
