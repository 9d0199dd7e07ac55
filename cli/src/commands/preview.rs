//! Preview command implementation.

use qrsmith_core::payload;

use crate::commands::Content;
use crate::ui::print_qr_code;

/// Print the QR code for the given content to the terminal.
pub fn preview(content: Content) {
    print_qr_code(&payload::encode(&content.into_record()));
}
