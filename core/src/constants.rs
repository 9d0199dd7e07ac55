//! Centralized tuning constants
//!
//! Default thresholds and limits are defined here to ensure consistency
//! across the codebase and make configuration easier.

/// Alpha value a pixel must exceed to count as visible during auto-trim.
pub const TRIM_VISIBILITY_THRESHOLD: u8 = 20;

/// Summed per-channel RGBA difference a pixel must exceed to count as
/// differing from the sampled background.
pub const TRIM_TOLERANCE: u32 = 40;

/// Padding in pixels added on each side of the detected content box.
pub const TRIM_PADDING: u32 = 2;

/// Default export resolution in pixels.
pub const DEFAULT_EXPORT_SIZE: u32 = 1000;

/// Minimum export resolution in pixels.
pub const MIN_EXPORT_SIZE: u32 = 300;

/// Maximum export resolution in pixels.
pub const MAX_EXPORT_SIZE: u32 = 4000;

/// Default quiet zone margin in pixels.
pub const DEFAULT_QUIET_ZONE: u32 = 10;

/// Maximum quiet zone margin in pixels.
pub const MAX_QUIET_ZONE: u32 = 50;

/// Fraction of the symbol width covered by an embedded logo.
pub const DEFAULT_LOGO_SCALE: f32 = 0.4;

/// Default clear margin around an embedded logo, in pixels.
pub const DEFAULT_LOGO_MARGIN: u32 = 5;

/// Clear margin applied at the moment a logo is embedded.
pub const LOGO_EMBED_MARGIN: u32 = 10;

/// Initial URL content for a fresh session.
pub const DEFAULT_URL: &str = "https://example.com";

/// Placeholder the URL field resets to when URL mode is selected.
pub const URL_SCHEME_PLACEHOLDER: &str = "https://";
