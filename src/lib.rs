//! Lightfan sphere renderer
//!
//! Ray traces a single sphere seen from a fixed camera and overlays a fan of
//! rays cast from a draggable point light. Every light move rebuilds the
//! whole frame synchronously through [`controller::RenderController`].

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod vector;
pub mod ray;
pub mod interval;
pub mod sphere;
pub mod light;
pub mod scene;
pub mod camera;
pub mod projection;
pub mod fan;
pub mod interaction;
pub mod controller;
pub mod overlay;
pub mod output;
pub mod error;

pub use camera::{Camera, PixelBuffer};
pub use controller::{Frame, RenderController};
pub use error::{Result, SceneError};
pub use scene::Scene;
