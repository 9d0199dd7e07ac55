//! Encoding rendered output into export formats

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use qrcode::{render::svg, QrCode};

use crate::render::options::{ExportFormat, RenderOptions};
use crate::{Error, Result};

/// Encode a rendered canvas into raster bytes.
///
/// JPEG has no alpha channel, so the canvas is flattened to RGB first.
pub(super) fn to_bytes(canvas: &RgbaImage, format: ExportFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => canvas
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| Error::Encode(e.to_string()))?,
        ExportFormat::Jpeg => DynamicImage::ImageRgba8(canvas.clone())
            .to_rgb8()
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| Error::Encode(e.to_string()))?,
        ExportFormat::Webp => canvas
            .write_to(&mut buffer, ImageFormat::WebP)
            .map_err(|e| Error::Encode(e.to_string()))?,
        ExportFormat::Svg => {
            return Err(Error::Encode(
                "SVG output is vector, not raster".to_string(),
            ))
        }
    }
    Ok(buffer.into_inner())
}

/// Produce SVG markup for the symbol.
///
/// Vector output carries the module grid and colors only; a raster logo
/// is not embedded.
pub(super) fn to_svg(options: &RenderOptions) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(
        options.data.as_bytes(),
        options.ec_level.to_ec_level(),
    )
    .map_err(|e| Error::Render(e.to_string()))?;

    let dark = options.dark.to_hex();
    let light = options.light.to_hex();
    let size = options.clamped_size();

    let markup = code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(options.clamped_margin() > 0)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build();

    Ok(markup.into_bytes())
}
