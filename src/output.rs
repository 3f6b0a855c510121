//! # Output Module
//!
//! Writes composited frames to disk as 8-bit RGBA PNG files.
//!
//! The pixel buffer is already 8-bit and display-ready, so no tone mapping
//! or gamma correction is applied.

use image::{ImageResult, RgbaImage};
use log::{error, info};

/// Save an RGBA image as PNG.
///
/// # Arguments
///
/// * `image` - RGBA8 image, typically the output of [`crate::overlay::composite`]
/// * `output_path` - File path for the output PNG (should include .png extension)
///
/// # Errors
///
/// Returns and logs the encoder or I/O error. Common causes:
/// - Invalid file path or insufficient permissions
/// - Disk space issues
pub fn save_image_as_png(image: &RgbaImage, output_path: &str) -> ImageResult<()> {
    match image.save_with_format(output_path, image::ImageFormat::Png) {
        Ok(()) => {
            info!("Image saved as {} ({}x{})", output_path, image.width(), image.height());
            Ok(())
        }
        Err(e) => {
            error!("Failed to save image to {}: {}", output_path, e);
            Err(e)
        }
    }
}
