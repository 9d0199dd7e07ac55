//! QR code generation and terminal display.

use qrcode::types::QrError;
use qrcode::QrCode;

/// Print a QR code to the terminal.
///
/// Uses Unicode half-block characters so each character cell carries two
/// vertical modules.
pub fn print_qr_code(data: &str) {
    match render_blocks(data) {
        Ok(blocks) => print!("{}", blocks),
        Err(e) => eprintln!("Failed to generate QR code: {}", e),
    }
}

/// Render a QR code as Unicode half-block rows with a quiet zone.
fn render_blocks(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    let colors = code.to_colors();
    let width = code.width();

    // ▀ top module dark, ▄ bottom module dark, █ both, space neither
    let mut out = String::new();
    let blank = " ".repeat(width + 8);

    out.push_str(&blank);
    out.push('\n');

    for row in (0..colors.len()).step_by(width * 2) {
        out.push_str("    ");
        for x in 0..width {
            let top = colors
                .get(row + x)
                .map(|c| *c == qrcode::Color::Dark)
                .unwrap_or(false);
            let bottom = colors
                .get(row + width + x)
                .map(|c| *c == qrcode::Color::Dark)
                .unwrap_or(false);

            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push_str("    \n");
    }

    out.push_str(&blank);
    out.push('\n');
    Ok(out)
}
