//! Overlay styling and a software compositor for still output.
//!
//! The interactive host draws the overlay with its own gradient primitives;
//! the tables here are the colors it is expected to use. [`composite`]
//! applies the same styling in software so a frame can be written to disk.

use image::{Rgba, RgbaImage};

use crate::controller::Frame;
use crate::fan::RaySegment;
use crate::interaction::PICK_RADIUS;
use crate::vector::Vec2;

/// Color stop at `offset` along a gradient. RGB in 0..=255, alpha in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in [0, 1].
    pub offset: f64,
    /// Red, green and blue channels.
    pub rgb: [f64; 3],
    /// Opacity.
    pub alpha: f64,
}

const fn stop(offset: f64, r: f64, g: f64, b: f64, alpha: f64) -> GradientStop {
    GradientStop { offset, rgb: [r, g, b], alpha }
}

/// Piecewise-linear gradient over stops sorted by offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// Color stops in increasing offset order.
    pub stops: &'static [GradientStop],
}

/// Stroke of every fan ray, from the light (0) to the ray end (1).
pub const RAY_GRADIENT: Gradient = Gradient {
    stops: &[
        stop(0.0, 255.0, 255.0, 255.0, 1.0),
        stop(0.1, 255.0, 245.0, 200.0, 0.95),
        stop(0.3, 255.0, 240.0, 180.0, 0.7),
        stop(0.6, 255.0, 240.0, 180.0, 0.3),
        stop(1.0, 255.0, 240.0, 180.0, 0.05),
    ],
};

/// Radial fill of the light glyph, from its center (0) to its rim (1).
pub const GLYPH_GRADIENT: Gradient = Gradient {
    stops: &[
        stop(0.0, 255.0, 255.0, 255.0, 1.0),
        stop(0.3, 255.0, 240.0, 150.0, 0.9),
        stop(0.6, 255.0, 220.0, 100.0, 0.4),
        stop(1.0, 255.0, 200.0, 80.0, 0.0),
    ],
};

/// Glyph radius in pixels. Same as the pick radius so what glows can be grabbed.
pub const GLYPH_RADIUS: f64 = PICK_RADIUS;

impl Gradient {
    /// Interpolated color at `t`, clamped to the first and last stops.
    pub fn sample(&self, t: f64) -> GradientStop {
        let stops = self.stops;
        let (first, last) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return stop(t, 0.0, 0.0, 0.0, 0.0),
        };
        if t <= first.offset {
            return first;
        }
        if t >= last.offset {
            return last;
        }

        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let k = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                let lerp = |x: f64, y: f64| x + (y - x) * k;
                return stop(
                    t,
                    lerp(a.rgb[0], b.rgb[0]),
                    lerp(a.rgb[1], b.rgb[1]),
                    lerp(a.rgb[2], b.rgb[2]),
                    lerp(a.alpha, b.alpha),
                );
            }
        }
        last
    }
}

/// Source-over blend of `src` onto an opaque destination pixel.
fn blend(dst: &mut Rgba<u8>, src: GradientStop) {
    let alpha = src.alpha.clamp(0.0, 1.0);
    for (channel, value) in dst.0.iter_mut().take(3).zip(src.rgb) {
        let mixed = value * alpha + *channel as f64 * (1.0 - alpha);
        *channel = mixed.round().clamp(0.0, 255.0) as u8;
    }
}

/// Clip the segment `a -> b` to `[0, width] x [0, height]`.
///
/// Returns the parameter range `[t0, t1]` of the visible part, or `None` if
/// the segment misses the surface.
fn clip_segment(a: Vec2, b: Vec2, width: f64, height: f64) -> Option<(f64, f64)> {
    let d = b - a;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [(-d.x, a.x), (d.x, width - a.x), (-d.y, a.y), (d.y, height - a.y)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((t0, t1))
}

/// Stroke one ray, fading along the gradient from its start to its end.
pub fn draw_ray(image: &mut RgbaImage, segment: &RaySegment) {
    let (width, height) = image.dimensions();
    let Some((t0, t1)) =
        clip_segment(segment.start, segment.end, width as f64, height as f64)
    else {
        return;
    };

    let delta = segment.end - segment.start;
    let visible = delta.length() * (t1 - t0);
    let steps = visible.ceil().max(1.0) as usize;

    let mut last = None;
    for i in 0..=steps {
        let t = t0 + (t1 - t0) * (i as f64 / steps as f64);
        let p = segment.start + delta * t;
        let (x, y) = (p.x.floor() as i64, p.y.floor() as i64);
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 || last == Some((x, y)) {
            continue;
        }
        last = Some((x, y));
        blend(image.get_pixel_mut(x as u32, y as u32), RAY_GRADIENT.sample(t));
    }
}

/// Fill the radial glow disc centered on `center`.
pub fn draw_glyph(image: &mut RgbaImage, center: Vec2) {
    let (width, height) = image.dimensions();
    let x_min = (center.x - GLYPH_RADIUS).floor().max(0.0) as u32;
    let y_min = (center.y - GLYPH_RADIUS).floor().max(0.0) as u32;
    let x_max = (center.x + GLYPH_RADIUS).ceil().min(width as f64);
    let y_max = (center.y + GLYPH_RADIUS).ceil().min(height as f64);
    if x_max <= 0.0 || y_max <= 0.0 {
        return;
    }

    for y in y_min..y_max as u32 {
        for x in x_min..x_max as u32 {
            let pixel_center = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
            let distance = pixel_center.distance(center);
            if distance <= GLYPH_RADIUS {
                blend(image.get_pixel_mut(x, y), GLYPH_GRADIENT.sample(distance / GLYPH_RADIUS));
            }
        }
    }
}

/// Flatten a frame into one image: silhouette, then rays, then the glyph on top.
pub fn composite(frame: &Frame) -> RgbaImage {
    let mut image = frame.pixels.clone();
    for segment in &frame.rays {
        draw_ray(&mut image, segment);
    }
    draw_glyph(&mut image, frame.glyph);
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_hits_stops_exactly() {
        for stop in RAY_GRADIENT.stops {
            let sampled = RAY_GRADIENT.sample(stop.offset);
            assert_eq!(sampled.rgb, stop.rgb);
            assert!((sampled.alpha - stop.alpha).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_interpolates_and_clamps() {
        let mid = GLYPH_GRADIENT.sample(0.8);
        assert!((mid.alpha - 0.2).abs() < 1e-12);
        assert!((mid.rgb[1] - 210.0).abs() < 1e-9);

        assert_eq!(GLYPH_GRADIENT.sample(-1.0).alpha, 1.0);
        assert_eq!(GLYPH_GRADIENT.sample(2.0).alpha, 0.0);
    }

    #[test]
    fn test_clip_segment() {
        let inside = clip_segment(Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0), 10.0, 10.0);
        assert_eq!(inside, Some((0.0, 1.0)));

        let (t0, t1) =
            clip_segment(Vec2::new(5.0, 5.0), Vec2::new(25.0, 5.0), 10.0, 10.0).unwrap();
        assert_eq!(t0, 0.0);
        assert!((t1 - 0.25).abs() < 1e-12);

        assert_eq!(
            clip_segment(Vec2::new(-5.0, -5.0), Vec2::new(-1.0, 20.0), 10.0, 10.0),
            None
        );
    }

    #[test]
    fn test_glyph_brightens_center_only() {
        let mut image = RgbaImage::from_pixel(200, 200, Rgba([0, 0, 0, 255]));
        draw_glyph(&mut image, Vec2::new(100.0, 100.0));

        let center = image.get_pixel(100, 100);
        assert!(center.0[..3].iter().all(|&c| c >= 245), "{center:?}");
        assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(199, 100), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_ray_fades_toward_end() {
        let mut image = RgbaImage::from_pixel(100, 10, Rgba([0, 0, 0, 255]));
        let segment = RaySegment {
            start: Vec2::new(0.5, 5.5),
            end: Vec2::new(99.5, 5.5),
            blocked: false,
        };
        draw_ray(&mut image, &segment);

        let near = image.get_pixel(1, 5)[0];
        let far = image.get_pixel(98, 5)[0];
        assert!(near > 200);
        assert!(far < 30);
        assert_eq!(*image.get_pixel(50, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_offscreen_ray_is_clipped() {
        let mut image = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let segment = RaySegment {
            start: Vec2::new(5.0, 5.0),
            end: Vec2::new(1e12, 5.0),
            blocked: false,
        };
        draw_ray(&mut image, &segment);
        assert!(image.get_pixel(9, 5)[0] > 0);
    }
}
