use super::tlv;
use super::{PayloadData, QrisData};

// Type-specific parsers
//------------------------------------------------------------------------------
//
// None of these fail fatally on malformed input: a missing prefix or delimiter
// simply leaves the corresponding field absent. Empty values are normalized to
// absent so the analyzers only ever see meaningful fields.

/// Parses a QRIS payload by scanning the EMVCo TLV structure at the top level.
/// Tag 26 (merchant account information) is scanned recursively; sub-tag 00
/// carries the merchant PAN and sub-tag 01 the merchant id, which also serves
/// as the NMID.
pub(super) fn parse_qris(data: &str) -> QrisData {
    let entries = tlv::scan(data);

    let mut qris = QrisData {
        merchant_category_code: field(&entries, "51"),
        transaction_currency: field(&entries, "52"),
        transaction_amount: field(&entries, "54"),
        merchant_name: field(&entries, "59"),
        merchant_city: field(&entries, "60"),
        ..QrisData::default()
    };

    if let Some(merchant) = tlv::lookup(&entries, "26") {
        let sub = tlv::scan(merchant);
        qris.merchant_pan = field(&sub, "00");
        qris.merchant_id = field(&sub, "01");
    }
    qris.nmid = qris.merchant_id.clone();

    qris
}

fn field(entries: &[(String, String)], tag: &str) -> Option<String> {
    tlv::lookup(entries, tag).and_then(non_empty)
}

pub(super) fn parse_vcard(data: &str) -> PayloadData {
    let mut name = None;
    let mut phone = None;
    let mut email = None;

    for line in data.lines() {
        if let Some(rest) = line.strip_prefix("FN:") {
            name = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("TEL:") {
            phone = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("EMAIL:") {
            email = non_empty(rest);
        }
    }

    PayloadData::VCard { name, phone, email }
}

pub(super) fn parse_wifi(data: &str) -> PayloadData {
    let mut ssid = None;
    let mut encryption = None;
    let mut password = None;

    let body = data.strip_prefix("WIFI:").unwrap_or(data);
    for segment in body.split(';') {
        let mut parts = segment.split(':');
        let key = parts.next();
        let value = parts.next();
        match key {
            Some("S") => ssid = value.and_then(non_empty),
            Some("T") => encryption = value.and_then(non_empty),
            Some("P") => password = value.and_then(non_empty),
            _ => {}
        }
    }

    PayloadData::WiFi { ssid, encryption, password }
}

pub(super) fn parse_mailto(data: &str) -> PayloadData {
    let email = data.strip_prefix("mailto:").unwrap_or(data);
    PayloadData::Email { email: email.to_string() }
}

pub(super) fn parse_sms(data: &str) -> PayloadData {
    let rest = data.strip_prefix("smsto:").or_else(|| data.strip_prefix("sms:")).unwrap_or(data);
    let (phone, body) = match rest.split_once(':') {
        Some((phone, body)) => (non_empty(phone), non_empty(body)),
        None => (non_empty(rest), None),
    };
    PayloadData::Sms { phone, body }
}

pub(super) fn parse_geo(data: &str) -> PayloadData {
    let coords = data.strip_prefix("geo:").unwrap_or(data);
    let mut parts = coords.split(',');
    let latitude = parts.next().and_then(non_empty);
    let longitude = parts.next().and_then(non_empty);
    PayloadData::Geo { latitude, longitude }
}

pub(super) fn parse_calendar(data: &str) -> PayloadData {
    let mut title = None;
    let mut start = None;
    let mut end = None;

    for line in data.lines() {
        if let Some(rest) = line.strip_prefix("SUMMARY:") {
            title = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("DTSTART:") {
            start = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix("DTEND:") {
            end = non_empty(rest);
        }
    }

    PayloadData::Calendar { title, start, end }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    // Merchant account (26): sub-tag 00 = PAN, sub-tag 01 = merchant id
    const QRIS_SAMPLE: &str = concat!(
        "000201",
        "010211",
        "2636",
        "0012123456789012",
        "0116ID00000000001234",
        "51043605",
        "5203360",
        "54072000000",
        "5910Toko Benua",
        "6007Jakarta",
    );

    #[test]
    fn test_parse_qris_full() {
        let qris = parse_qris(QRIS_SAMPLE);
        assert_eq!(qris.merchant_pan.as_deref(), Some("123456789012"));
        assert_eq!(qris.merchant_id.as_deref(), Some("ID00000000001234"));
        assert_eq!(qris.nmid.as_deref(), Some("ID00000000001234"));
        assert_eq!(qris.transaction_currency.as_deref(), Some("360"));
        assert_eq!(qris.transaction_amount.as_deref(), Some("2000000"));
        assert_eq!(qris.merchant_name.as_deref(), Some("Toko Benua"));
        assert_eq!(qris.merchant_city.as_deref(), Some("Jakarta"));
    }

    #[test]
    fn test_parse_qris_without_merchant_account() {
        let qris = parse_qris("0002015802ID5904Toko");
        assert_eq!(qris.merchant_pan, None);
        assert_eq!(qris.merchant_id, None);
        assert_eq!(qris.nmid, None);
        assert_eq!(qris.merchant_name.as_deref(), Some("Toko"));
    }

    #[test]
    fn test_parse_qris_truncated_keeps_prefix() {
        // merchant name survives, the truncated city tag is dropped
        let qris = parse_qris("5904Toko6010Jak");
        assert_eq!(qris.merchant_name.as_deref(), Some("Toko"));
        assert_eq!(qris.merchant_city, None);
    }

    #[test]
    fn test_parse_vcard() {
        let data = "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:+628111234567\nEMAIL:jane@example.com\nEND:VCARD";
        let parsed = parse_vcard(data);
        assert_eq!(
            parsed,
            PayloadData::VCard {
                name: Some("Jane Doe".to_string()),
                phone: Some("+628111234567".to_string()),
                email: Some("jane@example.com".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_vcard_missing_fields() {
        let parsed = parse_vcard("BEGIN:VCARD\nFN:Jane\nEND:VCARD");
        assert_eq!(
            parsed,
            PayloadData::VCard { name: Some("Jane".to_string()), phone: None, email: None }
        );
    }

    #[test]
    fn test_parse_wifi() {
        let parsed = parse_wifi("WIFI:S:CafeNet;T:WPA;P:secret;;");
        assert_eq!(
            parsed,
            PayloadData::WiFi {
                ssid: Some("CafeNet".to_string()),
                encryption: Some("WPA".to_string()),
                password: Some("secret".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_wifi_missing_segments() {
        let parsed = parse_wifi("WIFI:S:CafeNet;;");
        assert_eq!(
            parsed,
            PayloadData::WiFi { ssid: Some("CafeNet".to_string()), encryption: None, password: None }
        );
    }

    #[test]
    fn test_parse_mailto() {
        let parsed = parse_mailto("mailto:someone@example.com");
        assert_eq!(parsed, PayloadData::Email { email: "someone@example.com".to_string() });
    }

    #[test]
    fn test_parse_sms_with_body() {
        let parsed = parse_sms("sms:+628111234567:Hello there");
        assert_eq!(
            parsed,
            PayloadData::Sms {
                phone: Some("+628111234567".to_string()),
                body: Some("Hello there".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_smsto_without_body() {
        let parsed = parse_sms("smsto:+628111234567");
        assert_eq!(
            parsed,
            PayloadData::Sms { phone: Some("+628111234567".to_string()), body: None }
        );
    }

    #[test]
    fn test_parse_geo() {
        let parsed = parse_geo("geo:-6.2088,106.8456");
        assert_eq!(
            parsed,
            PayloadData::Geo {
                latitude: Some("-6.2088".to_string()),
                longitude: Some("106.8456".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_geo_missing_longitude() {
        let parsed = parse_geo("geo:-6.2088");
        assert_eq!(
            parsed,
            PayloadData::Geo { latitude: Some("-6.2088".to_string()), longitude: None }
        );
    }

    #[test]
    fn test_parse_calendar() {
        let data = "BEGIN:VEVENT\nSUMMARY:Team meetup\nDTSTART:20260901T100000Z\nDTEND:20260901T110000Z\nEND:VEVENT";
        let parsed = parse_calendar(data);
        assert_eq!(
            parsed,
            PayloadData::Calendar {
                title: Some("Team meetup".to_string()),
                start: Some("20260901T100000Z".to_string()),
                end: Some("20260901T110000Z".to_string()),
            }
        );
    }
}
