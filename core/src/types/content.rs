//! The content model: one variant per supported content type.
//!
//! Form records keep every field as plain text, with an empty string meaning
//! "not filled in". Only the encoded payload is ever persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::encode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Text,
    Contact,
    Phone,
    Email,
    Sms,
    Wifi,
    Event,
    Location,
    Social,
}

impl ContentType {
    pub const ALL: [ContentType; 10] = [
        ContentType::Url,
        ContentType::Text,
        ContentType::Contact,
        ContentType::Phone,
        ContentType::Email,
        ContentType::Sms,
        ContentType::Wifi,
        ContentType::Event,
        ContentType::Location,
        ContentType::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Text => "text",
            ContentType::Contact => "contact",
            ContentType::Phone => "phone",
            ContentType::Email => "email",
            ContentType::Sms => "sms",
            ContentType::Wifi => "wifi",
            ContentType::Event => "event",
            ContentType::Location => "location",
            ContentType::Social => "social",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content type: {0}")]
pub struct ParseContentTypeError(pub String);

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseContentTypeError(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{content_type} has no field named '{field}'")]
    UnknownField {
        content_type: ContentType,
        field: String,
    },

    #[error("invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Security {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl Security {
    pub fn as_str(self) -> &'static str {
        match self {
            Security::Wpa => "WPA",
            Security::Wep => "WEP",
            Security::NoPass => "nopass",
        }
    }

    /// Exact, case-sensitive match on the WiFi payload spelling.
    pub fn from_payload(s: &str) -> Option<Self> {
        match s {
            "WPA" => Some(Security::Wpa),
            "WEP" => Some(Security::Wep),
            "nopass" => Some(Security::NoPass),
            _ => None,
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
    YouTube,
}

impl SocialPlatform {
    /// Resolves a lowercase platform key. Anything else, including other
    /// casings, falls back to Twitter.
    pub fn lookup(name: &str) -> Self {
        match name {
            "facebook" => SocialPlatform::Facebook,
            "instagram" => SocialPlatform::Instagram,
            "linkedin" => SocialPlatform::LinkedIn,
            "youtube" => SocialPlatform::YouTube,
            _ => SocialPlatform::Twitter,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "https://twitter.com/",
            SocialPlatform::Facebook => "https://facebook.com/",
            SocialPlatform::Instagram => "https://instagram.com/",
            SocialPlatform::LinkedIn => "https://linkedin.com/in/",
            SocialPlatform::YouTube => "https://youtube.com/@",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlData {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextData {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactData {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneData {
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailData {
    pub email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsData {
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiData {
    pub ssid: String,
    pub password: String,
    pub security: Security,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventData {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationData {
    pub latitude: String,
    pub longitude: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialData {
    pub platform: String,
    pub username: String,
}

impl Default for SocialData {
    fn default() -> Self {
        Self {
            platform: "twitter".to_string(),
            username: String::new(),
        }
    }
}

/// Form state for one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Url(UrlData),
    Text(TextData),
    Contact(ContactData),
    Phone(PhoneData),
    Email(EmailData),
    Sms(SmsData),
    Wifi(WifiData),
    Event(EventData),
    Location(LocationData),
    Social(SocialData),
}

impl Default for Content {
    fn default() -> Self {
        Content::empty(ContentType::Url)
    }
}

impl Content {
    /// A blank form for the given type.
    pub fn empty(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Url => Content::Url(UrlData::default()),
            ContentType::Text => Content::Text(TextData::default()),
            ContentType::Contact => Content::Contact(ContactData::default()),
            ContentType::Phone => Content::Phone(PhoneData::default()),
            ContentType::Email => Content::Email(EmailData::default()),
            ContentType::Sms => Content::Sms(SmsData::default()),
            ContentType::Wifi => Content::Wifi(WifiData::default()),
            ContentType::Event => Content::Event(EventData::default()),
            ContentType::Location => Content::Location(LocationData::default()),
            ContentType::Social => Content::Social(SocialData::default()),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Url(_) => ContentType::Url,
            Content::Text(_) => ContentType::Text,
            Content::Contact(_) => ContentType::Contact,
            Content::Phone(_) => ContentType::Phone,
            Content::Email(_) => ContentType::Email,
            Content::Sms(_) => ContentType::Sms,
            Content::Wifi(_) => ContentType::Wifi,
            Content::Event(_) => ContentType::Event,
            Content::Location(_) => ContentType::Location,
            Content::Social(_) => ContentType::Social,
        }
    }

    /// Encodes the form, or returns an empty string when the field the type
    /// depends on is still blank. Contact and location always encode.
    pub fn payload(&self) -> String {
        match self {
            Content::Url(d) if d.url.is_empty() => String::new(),
            Content::Url(d) => encode::encode_url(&d.url),
            Content::Text(d) => encode::encode_text(&d.text),
            Content::Contact(d) => encode::encode_contact(d),
            Content::Phone(d) if d.phone.is_empty() => String::new(),
            Content::Phone(d) => encode::encode_phone(&d.phone),
            Content::Email(d) if d.email.is_empty() => String::new(),
            Content::Email(d) => {
                encode::encode_email(&d.email, non_empty(&d.subject), non_empty(&d.body))
            }
            Content::Sms(d) if d.phone.is_empty() => String::new(),
            Content::Sms(d) => encode::encode_sms(&d.phone, non_empty(&d.message)),
            Content::Wifi(d) if d.ssid.is_empty() => String::new(),
            Content::Wifi(d) => encode::encode_wifi(d),
            Content::Event(d) if d.title.is_empty() => String::new(),
            Content::Event(d) => encode::encode_event(d),
            Content::Location(d) => encode::encode_location(d),
            Content::Social(d) if d.username.is_empty() => String::new(),
            Content::Social(d) => encode::encode_social(&d.platform, &d.username),
        }
    }

    /// Sets one form field by name. Accepts `snake_case` and `camelCase`.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FieldError> {
        let content_type = self.content_type();
        let normalized: String = field
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let value_owned = value.to_string();

        let slot: &mut String = match (self, normalized.as_str()) {
            (Content::Url(d), "url") => &mut d.url,
            (Content::Text(d), "text") => &mut d.text,
            (Content::Contact(d), "firstname") => &mut d.first_name,
            (Content::Contact(d), "lastname") => &mut d.last_name,
            (Content::Contact(d), "organization") => &mut d.organization,
            (Content::Contact(d), "phone") => &mut d.phone,
            (Content::Contact(d), "email") => &mut d.email,
            (Content::Contact(d), "url") => &mut d.url,
            (Content::Phone(d), "phone") => &mut d.phone,
            (Content::Email(d), "email") => &mut d.email,
            (Content::Email(d), "subject") => &mut d.subject,
            (Content::Email(d), "body") => &mut d.body,
            (Content::Sms(d), "phone") => &mut d.phone,
            (Content::Sms(d), "message") => &mut d.message,
            (Content::Wifi(d), "ssid") => &mut d.ssid,
            (Content::Wifi(d), "password") => &mut d.password,
            (Content::Wifi(d), "security") => {
                d.security = Security::from_payload(value).ok_or_else(|| {
                    FieldError::InvalidValue {
                        field: field.to_string(),
                        value: value_owned,
                    }
                })?;
                return Ok(());
            }
            (Content::Wifi(d), "hidden") => {
                d.hidden = parse_flag(value).ok_or_else(|| FieldError::InvalidValue {
                    field: field.to_string(),
                    value: value_owned,
                })?;
                return Ok(());
            }
            (Content::Event(d), "title") => &mut d.title,
            (Content::Event(d), "startdate") => &mut d.start_date,
            (Content::Event(d), "enddate") => &mut d.end_date,
            (Content::Event(d), "location") => &mut d.location,
            (Content::Event(d), "description") => &mut d.description,
            (Content::Location(d), "latitude") => &mut d.latitude,
            (Content::Location(d), "longitude") => &mut d.longitude,
            (Content::Location(d), "query") => &mut d.query,
            (Content::Social(d), "platform") => &mut d.platform,
            (Content::Social(d), "username") => &mut d.username,
            _ => {
                return Err(FieldError::UnknownField {
                    content_type,
                    field: field.to_string(),
                });
            }
        };

        *slot = value_owned;
        Ok(())
    }

    /// Form fields in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Content::Url(d) => vec![("url", d.url.clone())],
            Content::Text(d) => vec![("text", d.text.clone())],
            Content::Contact(d) => vec![
                ("first_name", d.first_name.clone()),
                ("last_name", d.last_name.clone()),
                ("organization", d.organization.clone()),
                ("phone", d.phone.clone()),
                ("email", d.email.clone()),
                ("url", d.url.clone()),
            ],
            Content::Phone(d) => vec![("phone", d.phone.clone())],
            Content::Email(d) => vec![
                ("email", d.email.clone()),
                ("subject", d.subject.clone()),
                ("body", d.body.clone()),
            ],
            Content::Sms(d) => vec![("phone", d.phone.clone()), ("message", d.message.clone())],
            Content::Wifi(d) => vec![
                ("ssid", d.ssid.clone()),
                ("password", d.password.clone()),
                ("security", d.security.to_string()),
                ("hidden", d.hidden.to_string()),
            ],
            Content::Event(d) => vec![
                ("title", d.title.clone()),
                ("start_date", d.start_date.clone()),
                ("end_date", d.end_date.clone()),
                ("location", d.location.clone()),
                ("description", d.description.clone()),
            ],
            Content::Location(d) => vec![
                ("latitude", d.latitude.clone()),
                ("longitude", d.longitude.clone()),
                ("query", d.query.clone()),
            ],
            Content::Social(d) => vec![
                ("platform", d.platform.clone()),
                ("username", d.username.clone()),
            ],
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
