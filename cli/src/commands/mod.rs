//! CLI command implementations.

mod content;
mod encode;
mod generate;
mod preview;

pub use content::Content;
pub use encode::encode;
pub use generate::{generate, GenerateArgs};
pub use preview::preview;
