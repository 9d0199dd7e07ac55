use thiserror::Error;

/// Qrsmith error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Image has a zero dimension: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to encode output: {0}")]
    Encode(String),

    #[error("QR rendering failed: {0}")]
    Render(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
