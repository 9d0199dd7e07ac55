//! Logo trimming, masking and squaring ahead of embedding
//!
//! A logo goes through up to three steps before it lands in the middle of
//! a QR symbol: crop to its non-background content bounds (auto-trim),
//! mask to a circle, and center on a square canvas. All three are pure
//! pixel transforms over the decoded image.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::constants::{TRIM_PADDING, TRIM_TOLERANCE, TRIM_VISIBILITY_THRESHOLD};
use crate::logo::RasterImage;
use crate::Result;

/// Target shape for the processed logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoShape {
    #[default]
    Square,
    Circle,
}

/// Auto-trim classification parameters.
///
/// The defaults are tuned values, not invariants; callers may loosen or
/// tighten them per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimSettings {
    /// Alpha a pixel must exceed to count as visible.
    pub visibility_threshold: u8,
    /// Summed RGBA channel difference from the background sample a pixel
    /// must exceed to count as content.
    pub tolerance: u32,
    /// Pixels added on each side of the detected bounding box.
    pub padding: u32,
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            visibility_threshold: TRIM_VISIBILITY_THRESHOLD,
            tolerance: TRIM_TOLERANCE,
            padding: TRIM_PADDING,
        }
    }
}

/// A single logo processing request.
///
/// Callers keep the original upload around and build a fresh request for
/// every shape or trim change, so transforms never compound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoRequest {
    pub source: RasterImage,
    pub shape: LogoShape,
    pub auto_trim: bool,
    #[serde(default)]
    pub trim: TrimSettings,
}

impl LogoRequest {
    pub fn new(source: RasterImage) -> Self {
        Self {
            source,
            shape: LogoShape::default(),
            auto_trim: false,
            trim: TrimSettings::default(),
        }
    }
}

/// Region of the source image that survives trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Bounds {
    fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Process a logo: optionally crop to content bounds, optionally mask to
/// a circle, and composite centered onto a square canvas.
///
/// Deterministic and free of I/O beyond pixel access. The output is
/// always square (`max` of the box dimensions per side) so downstream
/// masking and centering never clip content asymmetrically. Note that a
/// square source with trimming disabled still comes back re-encoded;
/// callers wanting byte identity must skip processing entirely.
pub fn process(request: &LogoRequest) -> Result<RasterImage> {
    let pixels = request.source.decode()?;
    let (width, height) = pixels.dimensions();

    let bounds = if request.auto_trim {
        content_bounds(&pixels, &request.trim)
    } else {
        Bounds::full(width, height)
    };

    let final_size = bounds.width.max(bounds.height);
    let mut canvas = RgbaImage::new(final_size, final_size);

    let offset_x = (final_size - bounds.width) / 2;
    let offset_y = (final_size - bounds.height) / 2;

    let center = final_size as f32 / 2.0;
    let radius_sq = center * center;

    for dy in 0..bounds.height {
        for dx in 0..bounds.width {
            let out_x = offset_x + dx;
            let out_y = offset_y + dy;

            if request.shape == LogoShape::Circle {
                // sample at the pixel center against the inscribed circle
                let rel_x = out_x as f32 + 0.5 - center;
                let rel_y = out_y as f32 + 0.5 - center;
                if rel_x * rel_x + rel_y * rel_y > radius_sq {
                    continue;
                }
            }

            let pixel = pixels.get_pixel(bounds.x + dx, bounds.y + dy);
            canvas.put_pixel(out_x, out_y, *pixel);
        }
    }

    RasterImage::from_pixels(&canvas)
}

/// Find the minimal bounding box of non-background content.
///
/// The background color is sampled from the top-left pixel. A pixel is
/// content when it is visible (alpha above the threshold) and either the
/// background itself is near-transparent or the pixel differs from the
/// background sample by more than the tolerance, summed over all four
/// channels. When nothing qualifies the full image is returned untrimmed.
fn content_bounds(pixels: &RgbaImage, trim: &TrimSettings) -> Bounds {
    let (width, height) = pixels.dimensions();
    let background = *pixels.get_pixel(0, 0);
    let background_transparent = background[3] < trim.visibility_threshold;

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in pixels.enumerate_pixels() {
        if pixel[3] <= trim.visibility_threshold {
            continue;
        }
        if !background_transparent && channel_diff(pixel, &background) <= trim.tolerance {
            continue;
        }
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
        found = true;
    }

    if !found {
        return Bounds::full(width, height);
    }

    let x0 = min_x.saturating_sub(trim.padding);
    let y0 = min_y.saturating_sub(trim.padding);
    let x1 = (max_x + trim.padding).min(width - 1);
    let y1 = (max_y + trim.padding).min(height - 1);

    Bounds {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    }
}

/// Sum of absolute per-channel differences, alpha included.
fn channel_diff(a: &Rgba<u8>, b: &Rgba<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| (i32::from(x) - i32::from(y)).unsigned_abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn raster(pixels: &RgbaImage) -> RasterImage {
        RasterImage::from_pixels(pixels).unwrap()
    }

    /// 100x50, fully transparent, with an opaque red 20x20 block at
    /// (40, 15)..(60, 35).
    fn red_square_on_transparent() -> RgbaImage {
        RgbaImage::from_fn(100, 50, |x, y| {
            if (40..60).contains(&x) && (15..35).contains(&y) {
                RED
            } else {
                CLEAR
            }
        })
    }

    #[test]
    fn test_uniform_opaque_image_is_not_trimmed() {
        let pixels = RgbaImage::from_pixel(10, 10, Rgba([10, 120, 200, 255]));
        let request = LogoRequest {
            auto_trim: true,
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        assert_eq!(output, pixels);
    }

    #[test]
    fn test_trim_crops_to_content_with_padding() {
        let request = LogoRequest {
            auto_trim: true,
            ..LogoRequest::new(raster(&red_square_on_transparent()))
        };

        let output = process(&request).unwrap().decode().unwrap();
        // 20x20 content expanded by 2px of padding per side
        assert_eq!(output.dimensions(), (24, 24));
        assert_eq!(*output.get_pixel(12, 12), RED);
        assert_eq!(output.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_trim_and_circle_clip_corners() {
        let request = LogoRequest {
            auto_trim: true,
            shape: LogoShape::Circle,
            ..LogoRequest::new(raster(&red_square_on_transparent()))
        };

        let output = process(&request).unwrap().decode().unwrap();
        assert_eq!(output.dimensions(), (24, 24));
        // center survives, corners are outside the inscribed circle
        assert_eq!(*output.get_pixel(12, 12), RED);
        for (x, y) in [(0, 0), (23, 0), (0, 23), (23, 23)] {
            assert_eq!(output.get_pixel(x, y)[3], 0, "corner ({x},{y}) not clipped");
        }
    }

    #[test]
    fn test_circle_masks_opaque_square() {
        let pixels = RgbaImage::from_pixel(16, 16, RED);
        let request = LogoRequest {
            shape: LogoShape::Circle,
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        assert_eq!(output.dimensions(), (16, 16));
        assert_eq!(*output.get_pixel(8, 8), RED);
        assert_eq!(output.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_fully_transparent_source_squares_untrimmed() {
        let pixels = RgbaImage::from_pixel(8, 4, CLEAR);
        let request = LogoRequest {
            auto_trim: true,
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        // no content found, so the full 8x4 image lands on an 8x8 canvas
        assert_eq!(output.dimensions(), (8, 8));
        assert!(output.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_square_no_trim_is_pixel_idempotent() {
        let pixels = RgbaImage::from_fn(12, 12, |x, y| Rgba([x as u8 * 20, y as u8 * 20, 7, 255]));
        let request = LogoRequest::new(raster(&pixels));

        let once = process(&request).unwrap();
        let twice = process(&LogoRequest::new(once.clone())).unwrap();
        assert_eq!(once.decode().unwrap(), twice.decode().unwrap());
    }

    #[test]
    fn test_non_square_source_is_centered() {
        let pixels = RgbaImage::from_pixel(10, 4, RED);
        let request = LogoRequest::new(raster(&pixels));

        let output = process(&request).unwrap().decode().unwrap();
        assert_eq!(output.dimensions(), (10, 10));
        // rows 3..7 carry the source, the rest is transparent canvas
        assert_eq!(*output.get_pixel(5, 5), RED);
        assert_eq!(output.get_pixel(5, 0)[3], 0);
        assert_eq!(output.get_pixel(5, 9)[3], 0);
    }

    #[test]
    fn test_trim_tolerance_keeps_near_background_pixels() {
        // white background with a pale gray block inside the tolerance
        let mut pixels = RgbaImage::from_pixel(12, 12, Rgba([255, 255, 255, 255]));
        for y in 4..8 {
            for x in 4..8 {
                pixels.put_pixel(x, y, Rgba([245, 245, 245, 255]));
            }
        }
        let request = LogoRequest {
            auto_trim: true,
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        // 3 * 10 = 30 < tolerance of 40, so nothing counts as content
        assert_eq!(output.dimensions(), (12, 12));
    }

    #[test]
    fn test_trim_respects_custom_tolerance() {
        let mut pixels = RgbaImage::from_pixel(12, 12, Rgba([255, 255, 255, 255]));
        for y in 4..8 {
            for x in 4..8 {
                pixels.put_pixel(x, y, Rgba([245, 245, 245, 255]));
            }
        }
        let request = LogoRequest {
            auto_trim: true,
            trim: TrimSettings {
                tolerance: 20,
                ..TrimSettings::default()
            },
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        // 4x4 block plus 2px padding per side
        assert_eq!(output.dimensions(), (8, 8));
    }

    #[test]
    fn test_padding_clamped_at_image_edge() {
        // content touches the left edge; padding must not underflow
        let pixels = RgbaImage::from_fn(10, 10, |x, y| {
            if x < 3 && (4..8).contains(&y) {
                RED
            } else {
                CLEAR
            }
        });
        let request = LogoRequest {
            auto_trim: true,
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        // x spans 0..=4 (left pad clamped to 0), y spans 2..=9, so the
        // 5x8 box lands on an 8x8 canvas
        assert_eq!(output.dimensions(), (8, 8));
    }

    #[test]
    fn test_background_sampled_from_top_left() {
        // same color block as the corner sample is background, a darker
        // block is content
        let mut pixels = RgbaImage::from_pixel(20, 20, Rgba([200, 200, 200, 255]));
        for y in 8..12 {
            for x in 8..12 {
                pixels.put_pixel(x, y, Rgba([40, 40, 40, 255]));
            }
        }
        let request = LogoRequest {
            auto_trim: true,
            ..LogoRequest::new(raster(&pixels))
        };

        let output = process(&request).unwrap().decode().unwrap();
        assert_eq!(output.dimensions(), (8, 8));
        assert_eq!(*output.get_pixel(4, 4), Rgba([40, 40, 40, 255]));
    }
}
