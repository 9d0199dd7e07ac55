//! Content record definitions and the per-mode editing session

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_URL, URL_SCHEME_PLACEHOLDER};
use crate::Result;

/// Wi-Fi encryption scheme advertised in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    Wpa,
    Wep,
    None,
}

impl WifiEncryption {
    /// The token embedded in the `T:` field of a WIFI payload.
    pub fn as_qr_str(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::None => "nopass",
        }
    }
}

/// Wi-Fi network credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiFields {
    pub ssid: String,
    pub password: String,
    pub encryption: WifiEncryption,
    pub hidden: bool,
}

/// Email message fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFields {
    pub address: String,
    pub subject: String,
    pub body: String,
}

/// Phone number for a `tel:` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneFields {
    pub number: String,
}

/// SMS recipient and message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsFields {
    pub number: String,
    pub message: String,
}

/// WhatsApp chat target and prefilled message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppFields {
    pub number: String,
    pub message: String,
}

/// vCard 3.0 contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCardFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub organization: String,
    pub title: String,
    pub website: String,
}

/// A content record: exactly one mode's data, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentRecord {
    Url(String),
    PlainText(String),
    Wifi(WifiFields),
    Email(EmailFields),
    Phone(PhoneFields),
    Sms(SmsFields),
    WhatsApp(WhatsAppFields),
    VCard(VCardFields),
}

impl ContentRecord {
    /// Which mode this record belongs to.
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Url(_) => ContentKind::Url,
            ContentRecord::PlainText(_) => ContentKind::PlainText,
            ContentRecord::Wifi(_) => ContentKind::Wifi,
            ContentRecord::Email(_) => ContentKind::Email,
            ContentRecord::Phone(_) => ContentKind::Phone,
            ContentRecord::Sms(_) => ContentKind::Sms,
            ContentRecord::WhatsApp(_) => ContentKind::WhatsApp,
            ContentRecord::VCard(_) => ContentKind::VCard,
        }
    }

    /// Serialize to JSON for host-app interchange.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Identifies a content mode without carrying its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentKind {
    #[default]
    Url,
    PlainText,
    Wifi,
    Email,
    Phone,
    Sms,
    WhatsApp,
    VCard,
}

/// Editing state for every content mode at once.
///
/// Each mode keeps its own independent field set; switching the active
/// mode never clobbers the fields of the inactive ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSession {
    active: ContentKind,
    pub url: String,
    pub text: String,
    pub wifi: WifiFields,
    pub email: EmailFields,
    pub phone: PhoneFields,
    pub sms: SmsFields,
    pub whatsapp: WhatsAppFields,
    pub vcard: VCardFields,
}

impl Default for ContentSession {
    fn default() -> Self {
        Self {
            active: ContentKind::Url,
            url: DEFAULT_URL.to_string(),
            text: String::new(),
            wifi: WifiFields::default(),
            email: EmailFields::default(),
            phone: PhoneFields::default(),
            sms: SmsFields::default(),
            whatsapp: WhatsAppFields::default(),
            vcard: VCardFields::default(),
        }
    }
}

impl ContentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active content mode.
    pub fn active(&self) -> ContentKind {
        self.active
    }

    /// Switch the active mode.
    ///
    /// Selecting `Url` resets the URL field to the scheme placeholder and
    /// selecting `PlainText` clears the text; all other modes keep
    /// whatever was last entered.
    pub fn select(&mut self, kind: ContentKind) {
        self.active = kind;
        match kind {
            ContentKind::Url => self.url = URL_SCHEME_PLACEHOLDER.to_string(),
            ContentKind::PlainText => self.text.clear(),
            _ => {}
        }
    }

    /// Replace the matching mode's fields with `record` and make it active.
    ///
    /// Unlike [`select`](Self::select), this never applies reset side
    /// effects; the supplied values win.
    pub fn apply(&mut self, record: ContentRecord) {
        self.active = record.kind();
        match record {
            ContentRecord::Url(url) => self.url = url,
            ContentRecord::PlainText(text) => self.text = text,
            ContentRecord::Wifi(fields) => self.wifi = fields,
            ContentRecord::Email(fields) => self.email = fields,
            ContentRecord::Phone(fields) => self.phone = fields,
            ContentRecord::Sms(fields) => self.sms = fields,
            ContentRecord::WhatsApp(fields) => self.whatsapp = fields,
            ContentRecord::VCard(fields) => self.vcard = fields,
        }
    }

    /// Snapshot the active mode's fields as a [`ContentRecord`].
    pub fn record(&self) -> ContentRecord {
        match self.active {
            ContentKind::Url => ContentRecord::Url(self.url.clone()),
            ContentKind::PlainText => ContentRecord::PlainText(self.text.clone()),
            ContentKind::Wifi => ContentRecord::Wifi(self.wifi.clone()),
            ContentKind::Email => ContentRecord::Email(self.email.clone()),
            ContentKind::Phone => ContentRecord::Phone(self.phone.clone()),
            ContentKind::Sms => ContentRecord::Sms(self.sms.clone()),
            ContentKind::WhatsApp => ContentRecord::WhatsApp(self.whatsapp.clone()),
            ContentKind::VCard => ContentRecord::VCard(self.vcard.clone()),
        }
    }

    /// Encode the active mode's current fields.
    ///
    /// Callers re-invoke this after every field mutation so the payload
    /// always reflects current state.
    pub fn payload(&self) -> String {
        super::encode(&self.record())
    }
}
