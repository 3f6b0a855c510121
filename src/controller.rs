//! Recompute pipeline driven by light movement.

use std::time::Instant;

use log::{debug, warn};

use crate::camera::{Camera, PixelBuffer};
use crate::error::Result;
use crate::fan::{trace_fan, RaySegment};
use crate::interaction::{drag_target, hits_glyph, DragState, PointerEvent};
use crate::light::Light;
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::vector::{Vec2, Vec3};

/// Everything the host needs to draw one still image.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Raytraced silhouette.
    pub pixels: PixelBuffer,
    /// Ray fan, empty when the light is inside the sphere.
    pub rays: Vec<RaySegment>,
    /// Screen position of the light glyph.
    pub glyph: Vec2,
}

/// Owns the scene and the drag state, and rebuilds the frame on every light move.
#[derive(Debug, Clone)]
pub struct RenderController {
    camera: Camera,
    scene: Scene,
    drag: DragState,
    frame: Frame,
}

impl RenderController {
    /// Validate the scene and compute the first frame.
    pub fn new(camera: Camera, scene: Scene) -> Result<Self> {
        Light::validate_position(scene.light.position)?;
        let frame = build_frame(&camera, &scene);
        Ok(Self { camera, scene, drag: DragState::Idle, frame })
    }

    /// Move the light and synchronously rebuild the whole frame.
    pub fn on_light_moved(&mut self, position: Vec3) -> Result<&Frame> {
        Light::validate_position(position)?;
        self.scene.light.position = position;
        self.frame = build_frame(&self.camera, &self.scene);
        Ok(&self.frame)
    }

    /// Feed one pointer event through the drag state machine.
    ///
    /// Returns true if the event moved the light and a new frame was built.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match (self.drag, event) {
            (DragState::Idle, PointerEvent::Down(pointer)) => {
                if hits_glyph(&self.camera, self.scene.light.position, pointer) {
                    debug!("Light grabbed at {pointer:?}");
                    self.drag = DragState::Dragging;
                }
                false
            }
            (DragState::Dragging, PointerEvent::Move(pointer)) => {
                let target = drag_target(&self.camera, self.scene.light.position, pointer);
                match self.on_light_moved(target) {
                    Ok(_) => true,
                    Err(e) => {
                        warn!("Ignoring drag to {pointer:?}: {e}");
                        false
                    }
                }
            }
            (DragState::Dragging, PointerEvent::Up | PointerEvent::Leave) => {
                debug!("Light released at {:?}", self.scene.light.position);
                self.drag = DragState::Idle;
                false
            }
            _ => false,
        }
    }

    /// Most recently computed frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current light, including its latest position.
    pub fn light(&self) -> &Light {
        &self.scene.light
    }

    /// The scene's sphere.
    pub fn sphere(&self) -> &Sphere {
        &self.scene.sphere
    }

    /// Camera the frames are rendered and projected with.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Whether the light is currently grabbed.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }
}

/// Raster, containment test, ray fan, then glyph position. No caching.
fn build_frame(camera: &Camera, scene: &Scene) -> Frame {
    let start = Instant::now();

    let pixels = camera.render(&scene.sphere);
    let rays = trace_fan(camera, scene);
    let glyph = camera.project(scene.light.position);

    debug!(
        "Frame for light at {:?}: {} rays, glyph at {:?}, built in {:.2?}",
        scene.light.position,
        rays.len(),
        glyph,
        start.elapsed()
    );
    Frame { pixels, rays, glyph }
}
