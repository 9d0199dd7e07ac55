//! Logo preparation for QR embedding

mod process;
mod raster;
mod worker;

pub use process::{process, LogoRequest, LogoShape, TrimSettings};
pub use raster::RasterImage;
pub use worker::{LogoEvent, LogoWorker};
