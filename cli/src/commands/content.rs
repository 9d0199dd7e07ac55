//! Content mode arguments shared by the encode/preview/generate commands.

use clap::{Subcommand, ValueEnum};
use qrsmith_core::payload::{
    ContentRecord, EmailFields, PhoneFields, SmsFields, VCardFields, WhatsAppFields,
    WifiEncryption, WifiFields,
};

/// What to put inside the QR code.
#[derive(Debug, Subcommand)]
pub enum Content {
    /// Website link
    Url { url: String },
    /// Plain text
    Text { text: String },
    /// Wi-Fi network credentials
    Wifi {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, value_enum, default_value_t = Encryption::Wpa)]
        encryption: Encryption,
        /// Network does not broadcast its SSID
        #[arg(long)]
        hidden: bool,
    },
    /// Email message
    Email {
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Phone call
    Phone { number: String },
    /// SMS message
    Sms {
        #[arg(long)]
        number: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// WhatsApp chat
    Whatsapp {
        #[arg(long)]
        number: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Contact card (vCard 3.0)
    Vcard {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        organization: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        website: String,
    },
}

/// Wi-Fi encryption flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Encryption {
    Wpa,
    Wep,
    None,
}

impl From<Encryption> for WifiEncryption {
    fn from(value: Encryption) -> Self {
        match value {
            Encryption::Wpa => WifiEncryption::Wpa,
            Encryption::Wep => WifiEncryption::Wep,
            Encryption::None => WifiEncryption::None,
        }
    }
}

impl Content {
    /// Convert parsed arguments into a content record.
    pub fn into_record(self) -> ContentRecord {
        match self {
            Content::Url { url } => ContentRecord::Url(url),
            Content::Text { text } => ContentRecord::PlainText(text),
            Content::Wifi {
                ssid,
                password,
                encryption,
                hidden,
            } => ContentRecord::Wifi(WifiFields {
                ssid,
                password,
                encryption: encryption.into(),
                hidden,
            }),
            Content::Email { to, subject, body } => ContentRecord::Email(EmailFields {
                address: to,
                subject,
                body,
            }),
            Content::Phone { number } => ContentRecord::Phone(PhoneFields { number }),
            Content::Sms { number, message } => ContentRecord::Sms(SmsFields { number, message }),
            Content::Whatsapp { number, message } => {
                ContentRecord::WhatsApp(WhatsAppFields { number, message })
            }
            Content::Vcard {
                first_name,
                last_name,
                phone,
                email,
                organization,
                title,
                website,
            } => ContentRecord::VCard(VCardFields {
                first_name,
                last_name,
                phone,
                email,
                organization,
                title,
                website,
            }),
        }
    }
}
