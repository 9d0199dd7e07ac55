//! Stateful editing session coordinating content, logo and renderer
//!
//! The studio owns everything the UI would otherwise scatter across
//! ambient globals: the per-mode content fields, the pristine uploaded
//! logo, the derived logo actually embedded, and the renderer options.
//! Every logo derivation starts from the retained original, never from
//! a previously processed result, so repeated shape or trim changes do
//! not compound.

use image::RgbaImage;

use crate::constants::{DEFAULT_LOGO_SCALE, LOGO_EMBED_MARGIN};
use crate::logo::{self, LogoRequest, LogoShape, RasterImage, TrimSettings};
use crate::payload::{ContentKind, ContentSession};
use crate::render::{ErrorCorrection, ExportFormat, QrRenderer, RenderOptions, RenderPatch};
use crate::Result;

/// A QR customization session.
pub struct Studio {
    content: ContentSession,
    renderer: QrRenderer,
    original_logo: Option<RasterImage>,
    logo_shape: LogoShape,
    auto_trim: bool,
    trim: TrimSettings,
    /// Error correction restored when the logo is removed.
    ec_before_logo: ErrorCorrection,
}

impl Studio {
    pub fn new() -> Self {
        let content = ContentSession::new();
        let mut renderer = QrRenderer::new(RenderOptions::default());
        renderer.options_mut().data = content.payload();

        Self {
            content,
            renderer,
            original_logo: None,
            logo_shape: LogoShape::default(),
            auto_trim: false,
            trim: TrimSettings::default(),
            ec_before_logo: ErrorCorrection::default(),
        }
    }

    pub fn content(&self) -> &ContentSession {
        &self.content
    }

    /// Mutate the content fields and re-encode the payload afterwards.
    pub fn edit_content<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut ContentSession),
    {
        edit(&mut self.content);
        self.refresh_payload();
    }

    /// Switch the active content mode (applying its reset side effects)
    /// and re-encode.
    pub fn select_mode(&mut self, kind: ContentKind) {
        self.content.select(kind);
        self.refresh_payload();
    }

    /// Push the current content payload into the renderer.
    pub fn refresh_payload(&mut self) {
        self.renderer.options_mut().data = self.content.payload();
    }

    /// The payload string currently fed to the renderer.
    pub fn payload(&self) -> &str {
        &self.renderer.options().data
    }

    /// Embed a logo, retaining the pristine upload for later re-derives.
    ///
    /// Embedding bumps error correction to H and enables module hiding
    /// behind the logo; both are undone by [`clear_logo`](Self::clear_logo).
    /// On failure nothing changes and any previous logo stays in place.
    pub fn set_logo(&mut self, image: RasterImage) -> Result<()> {
        let processed = self.derive(&image)?;
        if self.original_logo.is_none() {
            self.ec_before_logo = self.renderer.options().ec_level;
        }
        self.original_logo = Some(image);
        self.apply_logo(processed);
        tracing::info!(shape = ?self.logo_shape, auto_trim = self.auto_trim, "logo embedded");
        Ok(())
    }

    /// Change the logo shape, re-deriving from the retained original.
    ///
    /// A failed derive keeps the previous shape and logo (last known
    /// good).
    pub fn set_logo_shape(&mut self, shape: LogoShape) -> Result<()> {
        let previous = self.logo_shape;
        self.logo_shape = shape;
        self.rederive().inspect_err(|_| self.logo_shape = previous)
    }

    /// Toggle auto-trim, re-deriving from the retained original.
    pub fn set_auto_trim(&mut self, enabled: bool) -> Result<()> {
        let previous = self.auto_trim;
        self.auto_trim = enabled;
        self.rederive().inspect_err(|_| self.auto_trim = previous)
    }

    /// Replace the trim parameters, re-deriving from the retained
    /// original.
    pub fn set_trim_settings(&mut self, trim: TrimSettings) -> Result<()> {
        let previous = self.trim;
        self.trim = trim;
        self.rederive().inspect_err(|_| self.trim = previous)
    }

    /// Remove the logo and restore the pre-logo rendering options.
    pub fn clear_logo(&mut self) {
        self.original_logo = None;
        let ec = self.ec_before_logo;
        let options = self.renderer.options_mut();
        options.logo = None;
        options.ec_level = ec;
        options.hide_background_dots = true;
        options.logo_margin = crate::constants::DEFAULT_LOGO_MARGIN;
    }

    /// The pristine uploaded logo, if any.
    pub fn original_logo(&self) -> Option<&RasterImage> {
        self.original_logo.as_ref()
    }

    /// The processed logo currently embedded, if any.
    pub fn processed_logo(&self) -> Option<&RasterImage> {
        self.renderer.options().logo.as_ref()
    }

    pub fn logo_shape(&self) -> LogoShape {
        self.logo_shape
    }

    pub fn renderer(&self) -> &QrRenderer {
        &self.renderer
    }

    /// Apply an incremental style update to the renderer.
    pub fn update_style(&mut self, patch: RenderPatch) {
        self.renderer.update(patch);
    }

    /// Rasterize the symbol with the current payload, style and logo.
    pub fn render(&self) -> Result<RgbaImage> {
        self.renderer.render()
    }

    /// Export the symbol in the requested format.
    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        self.renderer.export(format)
    }

    fn derive(&self, source: &RasterImage) -> Result<RasterImage> {
        logo::process(&LogoRequest {
            source: source.clone(),
            shape: self.logo_shape,
            auto_trim: self.auto_trim,
            trim: self.trim,
        })
    }

    /// Re-derive the embedded logo from the retained original, if one
    /// exists; settings-only changes before any upload are recorded
    /// without processing.
    fn rederive(&mut self) -> Result<()> {
        let Some(original) = self.original_logo.clone() else {
            return Ok(());
        };
        let processed = self.derive(&original).inspect_err(|e| {
            tracing::warn!("logo derive failed, keeping previous: {}", e);
        })?;
        self.apply_logo(processed);
        Ok(())
    }

    fn apply_logo(&mut self, processed: RasterImage) {
        let shape = self.logo_shape;
        let options = self.renderer.options_mut();
        options.logo = Some(processed);
        options.logo_shape = shape;
        options.ec_level = ErrorCorrection::H;
        options.hide_background_dots = true;
        options.logo_margin = LOGO_EMBED_MARGIN;
        options.logo_scale = DEFAULT_LOGO_SCALE;
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn logo(side: u32) -> RasterImage {
        let pixels = RgbaImage::from_pixel(side, side, Rgba([200, 30, 30, 255]));
        RasterImage::from_pixels(&pixels).unwrap()
    }

    #[test]
    fn test_payload_follows_content_edits() {
        let mut studio = Studio::new();
        studio.select_mode(ContentKind::Phone);
        studio.edit_content(|c| c.phone.number = "+15551234".to_string());
        assert_eq!(studio.payload(), "tel:+15551234");

        studio.edit_content(|c| c.phone.number = "+15559999".to_string());
        assert_eq!(studio.payload(), "tel:+15559999");
    }

    #[test]
    fn test_logo_embed_forces_high_ec() {
        let mut studio = Studio::new();
        assert_eq!(studio.renderer().options().ec_level, ErrorCorrection::Q);

        studio.set_logo(logo(16)).unwrap();
        assert_eq!(studio.renderer().options().ec_level, ErrorCorrection::H);
        assert!(studio.processed_logo().is_some());

        studio.clear_logo();
        assert_eq!(studio.renderer().options().ec_level, ErrorCorrection::Q);
        assert!(studio.processed_logo().is_none());
    }

    #[test]
    fn test_shape_roundtrip_reproduces_square_output() {
        let mut studio = Studio::new();
        studio.set_logo(logo(16)).unwrap();
        let square_only = studio.processed_logo().unwrap().clone();

        studio.set_logo_shape(LogoShape::Circle).unwrap();
        let circled = studio.processed_logo().unwrap().clone();
        assert_ne!(
            circled.decode().unwrap(),
            square_only.decode().unwrap()
        );

        studio.set_logo_shape(LogoShape::Square).unwrap();
        let back = studio.processed_logo().unwrap().clone();
        assert_eq!(back.decode().unwrap(), square_only.decode().unwrap());
    }

    #[test]
    fn test_failed_upload_keeps_previous_logo() {
        let mut studio = Studio::new();
        studio.set_logo(logo(16)).unwrap();
        let good = studio.processed_logo().unwrap().clone();

        let err = studio.set_logo(RasterImage::from_bytes(vec![9, 9, 9]));
        assert!(err.is_err());
        assert_eq!(studio.processed_logo().unwrap(), &good);
        assert_eq!(studio.renderer().options().ec_level, ErrorCorrection::H);
    }

    #[test]
    fn test_settings_changes_before_upload_are_recorded() {
        let mut studio = Studio::new();
        studio.set_logo_shape(LogoShape::Circle).unwrap();
        studio.set_auto_trim(true).unwrap();
        assert!(studio.processed_logo().is_none());

        // content block on transparent background gets trimmed on upload
        let mut pixels = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        for y in 12..20 {
            for x in 12..20 {
                pixels.put_pixel(x, y, Rgba([10, 10, 10, 255]));
            }
        }
        studio
            .set_logo(RasterImage::from_pixels(&pixels).unwrap())
            .unwrap();

        let processed = studio.processed_logo().unwrap().decode().unwrap();
        assert_eq!(processed.dimensions(), (12, 12));
    }

    #[test]
    fn test_export_uses_current_payload() {
        let mut studio = Studio::new();
        studio.select_mode(ContentKind::PlainText);
        studio.edit_content(|c| c.text = "hello".to_string());
        studio.update_style(RenderPatch {
            size: Some(300),
            ..RenderPatch::default()
        });

        let bytes = studio.export(ExportFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (300, 300));
    }
}
