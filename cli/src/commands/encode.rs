//! Encode command implementation.

use qrsmith_core::payload;

use crate::commands::Content;

/// Print the payload string for the given content.
pub fn encode(content: Content) {
    println!("{}", payload::encode(&content.into_record()));
}
