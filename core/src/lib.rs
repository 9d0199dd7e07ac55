//! Qrsmith Core - QR code customization library
//!
//! This library builds QR payload strings from structured content
//! records (URL, Wi-Fi, vCard, ...), prepares uploaded logos for
//! embedding (background auto-trim, circular masking), and renders
//! styled, exportable QR symbols around them.

pub mod constants;
pub mod logo;
pub mod payload;
pub mod render;
pub mod service;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use logo::{LogoEvent, LogoRequest, LogoShape, LogoWorker, RasterImage, TrimSettings};
pub use payload::{encode, ContentKind, ContentRecord, ContentSession};
pub use render::{Color, ErrorCorrection, ExportFormat, QrRenderer, RenderOptions, RenderPatch};
pub use service::Studio;
