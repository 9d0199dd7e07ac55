//! Styled QR rendering and export
//!
//! Wraps symbol encoding (the qrcode crate) behind the surface the UI
//! consumes: render the current options to pixels, apply incremental
//! style updates, export to PNG/JPEG/WEBP/SVG.

mod draw;
mod export;
mod options;

pub use options::{Color, ErrorCorrection, ExportFormat, RenderOptions, RenderPatch};

use image::RgbaImage;

use crate::Result;

/// Styled QR renderer owning the current option set.
#[derive(Debug, Clone, Default)]
pub struct QrRenderer {
    options: RenderOptions,
}

impl QrRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Apply an incremental style update.
    pub fn update(&mut self, patch: RenderPatch) {
        self.options.apply(patch);
    }

    /// Rasterize the symbol with the current options.
    pub fn render(&self) -> Result<RgbaImage> {
        draw::render(&self.options)
    }

    /// Produce export bytes in the requested format.
    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Svg => export::to_svg(&self.options),
            _ => {
                let canvas = self.render()?;
                export::to_bytes(&canvas, format)
            }
        }
    }
}
