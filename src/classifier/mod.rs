mod parsers;
pub mod tlv;

use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

// Payload type
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum PayloadType {
    Url,
    Qris,
    VCard,
    WiFi,
    Email,
    Sms,
    Geo,
    Calendar,
    PlainText,
}

impl Display for PayloadType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let label = match *self {
            Self::Url => "URL",
            Self::Qris => "QRIS",
            Self::VCard => "vCard",
            Self::WiFi => "WiFi",
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Geo => "Geo Location",
            Self::Calendar => "Calendar Event",
            Self::PlainText => "Plain Text",
        };
        f.write_str(label)
    }
}

// Payload data
//------------------------------------------------------------------------------

/// Merchant and transaction fields extracted from a QRIS payload. Every field
/// is optional: QRIS payloads in the wild are routinely truncated or missing
/// optional EMVCo tags, and each security heuristic decides for itself whether
/// absence matters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrisData {
    pub merchant_pan: Option<String>,
    pub merchant_id: Option<String>,
    pub merchant_name: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_category_code: Option<String>,
    pub transaction_amount: Option<String>,
    pub transaction_currency: Option<String>,
    /// National Merchant ID; mirrors the merchant id when present.
    pub nmid: Option<String>,
}

/// Structured data parsed out of a classified payload, one variant per
/// [`PayloadType`] so missing-field handling is exhaustive at the type level
/// instead of scattered presence checks over a string map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadData {
    Url {
        /// Normalized URL: a bare `www.` payload gets `http://` prepended
        /// here, never in the raw string.
        url: String,
    },
    Qris(QrisData),
    VCard {
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    },
    WiFi {
        ssid: Option<String>,
        encryption: Option<String>,
        password: Option<String>,
    },
    Email {
        email: String,
    },
    Sms {
        phone: Option<String>,
        body: Option<String>,
    },
    Geo {
        latitude: Option<String>,
        longitude: Option<String>,
    },
    Calendar {
        title: Option<String>,
        start: Option<String>,
        end: Option<String>,
    },
    PlainText {
        text: String,
    },
}

impl PayloadData {
    pub fn payload_type(&self) -> PayloadType {
        match self {
            Self::Url { .. } => PayloadType::Url,
            Self::Qris(_) => PayloadType::Qris,
            Self::VCard { .. } => PayloadType::VCard,
            Self::WiFi { .. } => PayloadType::WiFi,
            Self::Email { .. } => PayloadType::Email,
            Self::Sms { .. } => PayloadType::Sms,
            Self::Geo { .. } => PayloadType::Geo,
            Self::Calendar { .. } => PayloadType::Calendar,
            Self::PlainText { .. } => PayloadType::PlainText,
        }
    }
}

/// A classified QR payload: the detected type, the trimmed raw input
/// (never re-encoded) and the parsed structured data. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPayload {
    pub payload_type: PayloadType,
    pub raw: String,
    pub data: PayloadData,
}

impl DecodedPayload {
    fn new(raw: &str, data: PayloadData) -> Self {
        Self { payload_type: data.payload_type(), raw: raw.to_string(), data }
    }
}

// Classifier
//------------------------------------------------------------------------------

/// Classifies a decoded QR string and parses its type-specific fields.
///
/// Signatures are tested in a fixed priority order, first match wins. The URL
/// test runs before the QRIS test and matches only at the start of the string
/// (never a substring test): QRIS payloads can legally contain `http` inside
/// merchant fields, and must not be misclassified as URLs. A bare `www.`
/// prefix still classifies as URL and is normalized with an `http://` scheme
/// in the parsed field only.
///
/// Classification is total: every string classifies as exactly one type, with
/// [`PayloadType::PlainText`] as the fallback.
pub fn classify(raw: &str) -> DecodedPayload {
    let trimmed = raw.trim();

    let payload = if has_prefix_ignore_case(trimmed, "http://")
        || has_prefix_ignore_case(trimmed, "https://")
        || has_prefix_ignore_case(trimmed, "www.")
    {
        let url = if has_prefix_ignore_case(trimmed, "www.") {
            format!("http://{trimmed}")
        } else {
            trimmed.to_string()
        };
        DecodedPayload::new(trimmed, PayloadData::Url { url })
    } else if trimmed.starts_with("00020") || trimmed.contains("ID.CO.QRIS") {
        DecodedPayload::new(trimmed, PayloadData::Qris(parsers::parse_qris(trimmed)))
    } else if trimmed.starts_with("BEGIN:VCARD") {
        DecodedPayload::new(trimmed, parsers::parse_vcard(trimmed))
    } else if trimmed.starts_with("WIFI:") {
        DecodedPayload::new(trimmed, parsers::parse_wifi(trimmed))
    } else if trimmed.starts_with("mailto:") {
        DecodedPayload::new(trimmed, parsers::parse_mailto(trimmed))
    } else if trimmed.starts_with("sms:") || trimmed.starts_with("smsto:") {
        DecodedPayload::new(trimmed, parsers::parse_sms(trimmed))
    } else if trimmed.starts_with("geo:") {
        DecodedPayload::new(trimmed, parsers::parse_geo(trimmed))
    } else if trimmed.starts_with("BEGIN:VEVENT") {
        DecodedPayload::new(trimmed, parsers::parse_calendar(trimmed))
    } else {
        DecodedPayload::new(trimmed, PayloadData::PlainText { text: trimmed.to_string() })
    };

    debug!("classified payload as {}", payload.payload_type);

    payload
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len()).is_some_and(|p| p.eq_ignore_ascii_case(prefix))
}
