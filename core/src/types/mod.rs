pub mod config;
pub use config::{AppConfig, AppConfigError, Config};

pub(crate) mod color;
pub use color::{ColorError, HexColor};

pub(crate) mod content;
pub use content::{
    ContactData, Content, ContentType, EmailData, EventData, FieldError, LocationData,
    ParseContentTypeError, PhoneData, Security, SmsData, SocialData, SocialPlatform, TextData,
    UrlData, WifiData,
};

pub(crate) mod customization;
pub use customization::{Colors, Customization, EcLevel, ModulePattern};

pub(crate) mod name;
pub use name::{MAX_NAME_LENGTH, RecordName, RecordNameError};

pub(crate) mod record;
pub use record::{RecordDraft, RecordId, RecordUpdate, SavedRecord};
