//! Symbol rasterization and logo compositing

use image::{imageops, RgbaImage};
use qrcode::{Color as ModuleColor, QrCode};

use crate::logo::{LogoShape, RasterImage};
use crate::render::options::RenderOptions;
use crate::{Error, Result};

/// Rasterize the QR symbol for the current options.
///
/// The canvas is `size` x `size` with a `margin`-pixel quiet zone; the
/// module grid is integer-scaled to the largest fit and centered, with
/// the remainder absorbed into the quiet zone. The minimum supported
/// size always fits the largest QR version, so the symbol never
/// overflows the canvas.
pub(super) fn render(options: &RenderOptions) -> Result<RgbaImage> {
    let code = QrCode::with_error_correction_level(
        options.data.as_bytes(),
        options.ec_level.to_ec_level(),
    )
    .map_err(|e| Error::Render(e.to_string()))?;

    let modules = code.to_colors();
    let width = code.width() as u32;

    let size = options.clamped_size();
    let margin = options.clamped_margin();
    let scale = ((size - 2 * margin) / width).max(1);
    let symbol_px = width * scale;
    let origin = (size - symbol_px) / 2;

    let dark = options.dark.to_rgba();
    let light = options.light.to_rgba();
    let mut canvas = RgbaImage::from_pixel(size, size, light);

    for y in 0..width {
        for x in 0..width {
            if modules[(y * width + x) as usize] != ModuleColor::Dark {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    canvas.put_pixel(origin + x * scale + dx, origin + y * scale + dy, dark);
                }
            }
        }
    }

    if let Some(logo) = &options.logo {
        composite_logo(&mut canvas, options, symbol_px, logo)?;
    }

    Ok(canvas)
}

/// Scale the logo to its share of the symbol and blend it into the
/// center, optionally clearing a backing region behind it first.
fn composite_logo(
    canvas: &mut RgbaImage,
    options: &RenderOptions,
    symbol_px: u32,
    logo: &RasterImage,
) -> Result<()> {
    let pixels = logo.decode()?;
    let target = (symbol_px as f32 * options.logo_scale.clamp(0.1, 1.0)) as u32;
    if target == 0 {
        return Ok(());
    }

    // preserve aspect for logos that skipped squaring
    let (src_w, src_h) = pixels.dimensions();
    let (scaled_w, scaled_h) = if src_w >= src_h {
        (target, (src_h * target / src_w).max(1))
    } else {
        ((src_w * target / src_h).max(1), target)
    };
    let resized = imageops::resize(&pixels, scaled_w, scaled_h, imageops::FilterType::Triangle);

    let (canvas_size, _) = canvas.dimensions();
    let x0 = (canvas_size - scaled_w) / 2;
    let y0 = (canvas_size - scaled_h) / 2;

    if options.hide_background_dots {
        clear_backing(canvas, options, x0, y0, scaled_w, scaled_h);
    }

    imageops::overlay(canvas, &resized, i64::from(x0), i64::from(y0));
    Ok(())
}

/// Paint the background color behind the logo so modules do not show
/// through translucent or clipped regions.
fn clear_backing(
    canvas: &mut RgbaImage,
    options: &RenderOptions,
    x0: u32,
    y0: u32,
    logo_w: u32,
    logo_h: u32,
) {
    let (canvas_size, _) = canvas.dimensions();
    let pad = options.logo_margin;
    let light = options.light.to_rgba();

    match options.logo_shape {
        LogoShape::Square => {
            let left = x0.saturating_sub(pad);
            let top = y0.saturating_sub(pad);
            let right = (x0 + logo_w + pad).min(canvas_size);
            let bottom = (y0 + logo_h + pad).min(canvas_size);
            for y in top..bottom {
                for x in left..right {
                    canvas.put_pixel(x, y, light);
                }
            }
        }
        LogoShape::Circle => {
            let center_x = x0 as f32 + logo_w as f32 / 2.0;
            let center_y = y0 as f32 + logo_h as f32 / 2.0;
            let radius = logo_w.max(logo_h) as f32 / 2.0 + pad as f32;
            let radius_sq = radius * radius;

            let left = (center_x - radius).floor().max(0.0) as u32;
            let top = (center_y - radius).floor().max(0.0) as u32;
            let right = ((center_x + radius).ceil() as u32).min(canvas_size);
            let bottom = ((center_y + radius).ceil() as u32).min(canvas_size);

            for y in top..bottom {
                for x in left..right {
                    let rel_x = x as f32 + 0.5 - center_x;
                    let rel_y = y as f32 + 0.5 - center_y;
                    if rel_x * rel_x + rel_y * rel_y <= radius_sq {
                        canvas.put_pixel(x, y, light);
                    }
                }
            }
        }
    }
}
