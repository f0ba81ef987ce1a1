//! Payload encoders.
//!
//! Every function here is total and pure: partial input produces a degraded
//! payload, never an error. Required-field gating lives in
//! [`Content::payload`](crate::Content::payload).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::{ContactData, EventData, LocationData, SocialPlatform, WifiData};

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a query component. Multi-byte characters are escaped per
/// UTF-8 byte.
pub fn percent_encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

pub fn encode_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

pub fn encode_text(text: &str) -> String {
    text.to_string()
}

pub fn encode_phone(phone: &str) -> String {
    format!("tel:{phone}")
}

/// `mailto:` URI. Subject and body are only emitted when non-empty.
pub fn encode_email(email: &str, subject: Option<&str>, body: Option<&str>) -> String {
    let query: Vec<String> = [("subject", subject), ("body", body)]
        .into_iter()
        .filter_map(|(key, value)| {
            present(value).map(|v| format!("{key}={}", percent_encode_component(v)))
        })
        .collect();

    if query.is_empty() {
        format!("mailto:{email}")
    } else {
        format!("mailto:{email}?{}", query.join("&"))
    }
}

pub fn encode_sms(phone: &str, message: Option<&str>) -> String {
    match present(message) {
        Some(message) => format!("sms:{phone}?body={}", percent_encode_component(message)),
        None => format!("sms:{phone}"),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// vCard 3.0. Values are inserted verbatim without vCard escaping.
pub fn encode_contact(contact: &ContactData) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{} {}", contact.first_name, contact.last_name),
        format!("ORG:{}", contact.organization),
        format!("TEL:{}", contact.phone),
        format!("EMAIL:{}", contact.email),
        format!("URL:{}", contact.url),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

pub fn encode_wifi(wifi: &WifiData) -> String {
    format!(
        "WIFI:T:{};S:{};P:{};H:{};;",
        wifi.security, wifi.ssid, wifi.password, wifi.hidden
    )
}

/// iCalendar VEVENT block.
pub fn encode_event(event: &EventData) -> String {
    [
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART:{}", ical_timestamp(&event.start_date)),
        format!("DTEND:{}", ical_timestamp(&event.end_date)),
        format!("SUMMARY:{}", event.title),
        format!("LOCATION:{}", event.location),
        format!("DESCRIPTION:{}", event.description),
        "END:VEVENT".to_string(),
    ]
    .join("\n")
}

/// Strips `-` and `:` and appends `00Z`. Assumes a `YYYY-MM-DDTHH:MM` input;
/// anything else formats incorrectly.
fn ical_timestamp(input: &str) -> String {
    let mut stamp: String = input.chars().filter(|c| *c != '-' && *c != ':').collect();
    stamp.push_str("00Z");
    stamp
}

/// `geo:` URI. Coordinates are not validated.
pub fn encode_location(location: &LocationData) -> String {
    if !location.latitude.is_empty() && !location.longitude.is_empty() {
        format!("geo:{},{}", location.latitude, location.longitude)
    } else {
        format!("geo:0,0?q={}", percent_encode_component(&location.query))
    }
}

pub fn encode_social(platform: &str, username: &str) -> String {
    let handle = username.strip_prefix('@').unwrap_or(username);
    format!("{}{handle}", SocialPlatform::lookup(platform).base_url())
}

#[cfg(test)]
mod tests;
