//! Payload string construction for each content mode
//!
//! The grammars here are what QR reader apps expect to find inside the
//! symbol; they must be reproduced byte for byte.

use super::content::ContentRecord;

/// Encode a content record into the payload string embedded in the QR code.
///
/// Total over all inputs: empty fields yield a syntactically valid but
/// semantically empty payload, never an error.
pub fn encode(record: &ContentRecord) -> String {
    match record {
        ContentRecord::Url(text) | ContentRecord::PlainText(text) => text.clone(),

        ContentRecord::Wifi(w) => format!(
            "WIFI:S:{};T:{};P:{};H:{};;",
            w.ssid,
            w.encryption.as_qr_str(),
            w.password,
            w.hidden,
        ),

        ContentRecord::Email(e) => format!(
            "mailto:{}?subject={}&body={}",
            e.address,
            urlencoding::encode(&e.subject),
            urlencoding::encode(&e.body),
        ),

        ContentRecord::Phone(p) => format!("tel:{}", p.number),

        ContentRecord::Sms(s) => format!("smsto:{}:{}", s.number, s.message),

        ContentRecord::WhatsApp(w) => format!(
            "https://wa.me/{}?text={}",
            strip_non_digits(&w.number),
            urlencoding::encode(&w.message),
        ),

        ContentRecord::VCard(v) => [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("N:{};{}", v.last_name, v.first_name),
            format!("FN:{} {}", v.first_name, v.last_name),
            format!("ORG:{}", v.organization),
            format!("TITLE:{}", v.title),
            format!("TEL:{}", v.phone),
            format!("EMAIL:{}", v.email),
            format!("URL:{}", v.website),
            "END:VCARD".to_string(),
        ]
        .join("\n"),
    }
}

/// Drop everything but ASCII digits from a phone number.
///
/// Idempotent; `wa.me` links accept only the bare digit string.
pub fn strip_non_digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}
