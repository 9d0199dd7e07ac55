//! Encoded raster image interchange type

use std::io::Cursor;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An image in its encoded interchange form (PNG, JPEG, ...).
///
/// Processing steps hand these around instead of pixel buffers; decode
/// with [`RasterImage::decode`] when pixel access is needed. The encoded
/// bytes serialize as a base64 string in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterImage {
    #[serde(with = "base64_bytes")]
    bytes: Vec<u8>,
}

impl RasterImage {
    /// Wrap already-encoded image bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read an encoded image from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_bytes(std::fs::read(path)?))
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let payload = uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, payload)| payload)
            .ok_or_else(|| Error::Decode("not a base64 data URI".to_string()))?;

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| Error::Decode(format!("invalid base64 payload: {}", e)))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Render as a base64 data URI, sniffing the mime type from the bytes.
    pub fn to_data_uri(&self) -> String {
        let mime = image::guess_format(&self.bytes)
            .map(|f| f.to_mime_type())
            .unwrap_or("application/octet-stream");
        format!("data:{};base64,{}", mime, BASE64.encode(&self.bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decode into an RGBA pixel grid.
    pub fn decode(&self) -> Result<RgbaImage> {
        let decoded = image::load_from_memory(&self.bytes)
            .map_err(|e| Error::Decode(e.to_string()))?;
        let pixels = decoded.to_rgba8();
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        Ok(pixels)
    }

    /// Encode a pixel grid back into interchange form (PNG).
    pub fn from_pixels(pixels: &RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let mut buffer = Cursor::new(Vec::new());
        pixels
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| Error::Encode(e.to_string()))?;
        Ok(Self::from_bytes(buffer.into_inner()))
    }
}

/// Serialize/deserialize the encoded bytes as a base64 string.
mod base64_bytes {
    use super::BASE64;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(data))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        BASE64.decode(&s).map_err(serde::de::Error::custom)
    }
}
