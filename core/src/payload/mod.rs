//! Content records and payload string encoding

mod content;
mod encode;

pub use content::{
    ContentKind, ContentRecord, ContentSession, EmailFields, PhoneFields, SmsFields, VCardFields,
    WhatsAppFields, WifiEncryption, WifiFields,
};
pub use encode::{encode, strip_non_digits};
