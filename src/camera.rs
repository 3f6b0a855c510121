//! Fixed pinhole camera and the silhouette rasterizer.

use std::time::Instant;

use image::{Rgba, RgbaImage};
use log::debug;
use rayon::prelude::*;

use crate::error::{Result, SceneError};
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::{normalize, Color, Vec3};

/// Row-major RGBA8 buffer with a top-left origin. Alpha is always 255.
pub type PixelBuffer = RgbaImage;

/// Surface width used by the interactive view.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Surface height used by the interactive view.
pub const DEFAULT_HEIGHT: u32 = 800;

/// Camera at the world origin looking down -z.
///
/// The only parameters are the render surface dimensions; the field of view
/// follows from mapping pixels to `[-aspect, aspect] x [-1, 1]` on the
/// `z = -1` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    width: u32,
    height: u32,
}

impl Camera {
    /// Create a camera for a `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptySurface { width, height });
        }
        Ok(Self { width, height })
    }

    /// Rendered image width in pixel count
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rendered image height in pixel count
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width / height`, applied to the horizontal ray component.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Map a pixel to normalized device coordinates in [-1, 1).
    pub fn ndc(&self, x: f64, y: f64) -> (f64, f64) {
        let u = (x / self.width as f64) * 2.0 - 1.0;
        let v = (y / self.height as f64) * 2.0 - 1.0;
        (u, v)
    }

    /// Ray from the camera origin through pixel (x, y).
    ///
    /// Screen y grows downward while view y grows upward, hence `-v`.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let (u, v) = self.ndc(x as f64, y as f64);
        let direction = normalize(Vec3::new(u * self.aspect_ratio(), -v, -1.0));
        Ray::new(Vec3::ZERO, direction)
    }

    /// Color seen through pixel (x, y).
    ///
    /// Flat silhouette: white where the primary ray hits the sphere in front
    /// of the camera, black elsewhere. The light does not affect this pass.
    pub fn shade(&self, x: u32, y: u32, sphere: &Sphere) -> Color {
        let t = sphere.intersect(&self.primary_ray(x, y));
        if t > 0.0 {
            Color::ONE
        } else {
            Color::ZERO
        }
    }

    /// Rasterize the sphere into a fresh pixel buffer.
    ///
    /// Pixels are independent, so rows are shaded in parallel; the result is
    /// identical to a sequential row-major pass.
    pub fn render(&self, sphere: &Sphere) -> PixelBuffer {
        let mut image = PixelBuffer::new(self.width, self.height);
        let start = Instant::now();

        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            *pixel = to_rgba8(self.shade(x, y, sphere));
        });

        debug!("Rasterized {}x{} in {:.2?}", self.width, self.height, start.elapsed());
        image
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

/// Scale a [0, 1] color to bytes, clamped to [0, 255], fully opaque.
pub fn to_rgba8(color: Color) -> Rgba<u8> {
    let channel = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
    Rgba([channel(color.x), channel(color.y), channel(color.z), 255])
}
