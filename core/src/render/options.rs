//! Renderer options and incremental updates

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXPORT_SIZE, DEFAULT_LOGO_MARGIN, DEFAULT_LOGO_SCALE, DEFAULT_QUIET_ZONE,
    MAX_EXPORT_SIZE, MAX_QUIET_ZONE, MIN_EXPORT_SIZE,
};
use crate::logo::{LogoShape, RasterImage};
use crate::{Error, Result};

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorCorrection {
    L,
    M,
    #[default]
    Q,
    H,
}

impl ErrorCorrection {
    pub(crate) fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

/// Export image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Webp => "webp",
            ExportFormat::Svg => "svg",
        }
    }
}

/// RGBA color parsed from `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(Error::InvalidOptions(format!("bad color literal: {hex:?}")));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidOptions(format!("bad color literal: {hex:?}")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: if digits.len() == 8 { channel(6..8)? } else { 255 },
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Full style and content state for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Payload string to encode.
    pub data: String,
    /// Output edge length in pixels; clamped to the supported range.
    pub size: u32,
    /// Quiet zone margin in pixels; clamped to the supported range.
    pub margin: u32,
    pub ec_level: ErrorCorrection,
    /// Module color.
    pub dark: Color,
    /// Background color.
    pub light: Color,
    /// Processed logo to composite into the symbol center.
    pub logo: Option<RasterImage>,
    /// Shape the logo was masked to; controls the backing shape.
    pub logo_shape: LogoShape,
    /// Logo edge length as a fraction of the symbol width.
    pub logo_scale: f32,
    /// Extra clear pixels around the logo when backing is enabled.
    pub logo_margin: u32,
    /// Paint a backing in the background color behind the logo.
    pub hide_background_dots: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            data: String::new(),
            size: DEFAULT_EXPORT_SIZE,
            margin: DEFAULT_QUIET_ZONE,
            ec_level: ErrorCorrection::default(),
            dark: Color::rgb(0x0f, 0x17, 0x2a),
            light: Color::rgb(0xff, 0xff, 0xff),
            logo: None,
            logo_shape: LogoShape::default(),
            logo_scale: DEFAULT_LOGO_SCALE,
            logo_margin: DEFAULT_LOGO_MARGIN,
            hide_background_dots: true,
        }
    }
}

impl RenderOptions {
    pub(crate) fn clamped_size(&self) -> u32 {
        self.size.clamp(MIN_EXPORT_SIZE, MAX_EXPORT_SIZE)
    }

    pub(crate) fn clamped_margin(&self) -> u32 {
        self.margin.min(MAX_QUIET_ZONE)
    }

    /// Apply a partial update, leaving unspecified fields untouched.
    pub fn apply(&mut self, patch: RenderPatch) {
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(margin) = patch.margin {
            self.margin = margin;
        }
        if let Some(ec_level) = patch.ec_level {
            self.ec_level = ec_level;
        }
        if let Some(dark) = patch.dark {
            self.dark = dark;
        }
        if let Some(light) = patch.light {
            self.light = light;
        }
        if let Some(logo_scale) = patch.logo_scale {
            self.logo_scale = logo_scale;
        }
        if let Some(logo_margin) = patch.logo_margin {
            self.logo_margin = logo_margin;
        }
        if let Some(hide) = patch.hide_background_dots {
            self.hide_background_dots = hide;
        }
    }
}

/// Incremental style update; `None` fields are left as they are.
///
/// The logo itself is managed through the session, not patched here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderPatch {
    pub data: Option<String>,
    pub size: Option<u32>,
    pub margin: Option<u32>,
    pub ec_level: Option<ErrorCorrection>,
    pub dark: Option<Color>,
    pub light: Option<Color>,
    pub logo_scale: Option<f32>,
    pub logo_margin: Option<u32>,
    pub hide_background_dots: Option<bool>,
}
