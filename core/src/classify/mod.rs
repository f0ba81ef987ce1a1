//! Best-effort mapping from scanned text back to an editable form.
//!
//! Prefixes are checked in a fixed order and the first match wins. The result
//! is not an inverse of the encoders: contacts, events, locations, SMS and
//! social links all come back as plain text or URLs.

use crate::types::{Content, EmailData, PhoneData, Security, TextData, UrlData, WifiData};

pub fn classify(text: &str) -> Content {
    if text.starts_with("http") || text.starts_with("www") {
        return Content::Url(UrlData {
            url: text.to_string(),
        });
    }

    if let Some(phone) = text.strip_prefix("tel:") {
        return Content::Phone(PhoneData {
            phone: phone.to_string(),
        });
    }

    if let Some(email) = text.strip_prefix("mailto:") {
        return Content::Email(EmailData {
            email: email.to_string(),
            ..Default::default()
        });
    }

    if let Some(fields) = text.strip_prefix("WIFI:") {
        return Content::Wifi(parse_wifi(fields));
    }

    Content::Text(TextData {
        text: text.to_string(),
    })
}

/// Reads `S:`, `P:`, `T:` and `H:` sub-fields. Unknown security values keep
/// the WPA default.
fn parse_wifi(fields: &str) -> WifiData {
    let mut wifi = WifiData::default();

    for part in fields.split(';') {
        if let Some(ssid) = part.strip_prefix("S:") {
            wifi.ssid = ssid.to_string();
        } else if let Some(password) = part.strip_prefix("P:") {
            wifi.password = password.to_string();
        } else if let Some(security) = part.strip_prefix("T:") {
            if let Some(security) = Security::from_payload(security) {
                wifi.security = security;
            }
        } else if let Some(hidden) = part.strip_prefix("H:") {
            wifi.hidden = hidden.eq_ignore_ascii_case("true");
        }
    }

    wifi
}
