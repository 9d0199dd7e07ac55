//! Generate command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use qrsmith_core::{Color, ErrorCorrection, ExportFormat, LogoShape, RasterImage, RenderPatch, Studio};

use crate::commands::Content;
use crate::ui::print_banner;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub content: Content,

    /// Output file
    #[arg(short, long, default_value = "qrsmith.png")]
    pub out: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    pub format: Format,

    /// Output resolution in pixels (300-4000)
    #[arg(long, default_value_t = 1000)]
    pub size: u32,

    /// Quiet zone margin in pixels (0-50)
    #[arg(long, default_value_t = 10)]
    pub margin: u32,

    /// Error correction level (forced to H when a logo is embedded)
    #[arg(long, value_enum, default_value_t = EcLevel::Q)]
    pub ec_level: EcLevel,

    /// Module color, e.g. #0f172a
    #[arg(long, default_value = "#0f172a")]
    pub dark: String,

    /// Background color
    #[arg(long, default_value = "#ffffff")]
    pub light: String,

    /// Logo image to embed in the symbol center
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Logo shape
    #[arg(long, value_enum, default_value_t = Shape::Square)]
    pub logo_shape: Shape,

    /// Auto-trim the logo to its content bounds
    #[arg(long)]
    pub trim: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Png,
    Jpeg,
    Webp,
    Svg,
}

impl From<Format> for ExportFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Png => ExportFormat::Png,
            Format::Jpeg => ExportFormat::Jpeg,
            Format::Webp => ExportFormat::Webp,
            Format::Svg => ExportFormat::Svg,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

impl From<EcLevel> for ErrorCorrection {
    fn from(value: EcLevel) -> Self {
        match value {
            EcLevel::L => ErrorCorrection::L,
            EcLevel::M => ErrorCorrection::M,
            EcLevel::Q => ErrorCorrection::Q,
            EcLevel::H => ErrorCorrection::H,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shape {
    Square,
    Circle,
}

impl From<Shape> for LogoShape {
    fn from(value: Shape) -> Self {
        match value {
            Shape::Square => LogoShape::Square,
            Shape::Circle => LogoShape::Circle,
        }
    }
}

/// Render the QR code and write it to the output file.
pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    print_banner();

    let mut studio = Studio::new();

    let record = args.content.into_record();
    studio.edit_content(|content| content.apply(record));

    studio.update_style(RenderPatch {
        size: Some(args.size),
        margin: Some(args.margin),
        ec_level: Some(args.ec_level.into()),
        dark: Some(Color::from_hex(&args.dark)?),
        light: Some(Color::from_hex(&args.light)?),
        ..RenderPatch::default()
    });

    if let Some(path) = &args.logo {
        studio.set_logo_shape(args.logo_shape.into())?;
        studio.set_auto_trim(args.trim)?;
        let logo = RasterImage::open(path)
            .with_context(|| format!("failed to read logo {}", path.display()))?;
        studio.set_logo(logo)?;
    }

    let bytes = studio.export(args.format.into())?;
    tracing::debug!(format = ?args.format, bytes = bytes.len(), "export encoded");
    fs::write(&args.out, &bytes)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    println!(
        "\x1b[1;32m✓\x1b[0m Wrote \x1b[1m{}\x1b[0m ({} bytes)",
        args.out.display(),
        bytes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(content: Content, out: PathBuf, format: Format) -> GenerateArgs {
        GenerateArgs {
            content,
            out,
            format,
            size: 300,
            margin: 10,
            ec_level: EcLevel::Q,
            dark: "#0f172a".to_string(),
            light: "#ffffff".to_string(),
            logo: None,
            logo_shape: Shape::Square,
            trim: false,
        }
    }

    #[test]
    fn test_generate_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("code.png");

        generate(args(
            Content::Url {
                url: "https://example.com".to_string(),
            },
            out.clone(),
            Format::Png,
        ))
        .unwrap();

        let bytes = fs::read(&out).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_generate_writes_svg_markup() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("code.svg");

        generate(args(
            Content::Phone {
                number: "+15551234".to_string(),
            },
            out.clone(),
            Format::Svg,
        ))
        .unwrap();

        let markup = fs::read_to_string(&out).unwrap();
        assert!(markup.contains("<svg"));
    }
}
