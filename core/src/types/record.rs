use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{ContentType, Customization, RecordName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A generated code kept in the saved collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub id: RecordId,
    pub content_type: ContentType,
    pub customization: Customization,
    /// Encoder output at save time. Never recomputed.
    pub payload: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<RecordName>,
    #[serde(default)]
    pub scans: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scanned: Option<DateTime<Utc>>,
}

/// Input to `SavedCodeStore::save`; the store assigns id, timestamp and counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub content_type: ContentType,
    pub customization: Customization,
    pub payload: String,
    pub name: Option<RecordName>,
}

/// Partial update merged into an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    name: Option<Option<RecordName>>,
    customization: Option<Customization>,
}

impl RecordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` clears the name.
    pub fn name(mut self, name: Option<RecordName>) -> Self {
        self.name = Some(name);
        self
    }

    pub fn customization(mut self, customization: Customization) -> Self {
        self.customization = Some(customization);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.customization.is_none()
    }

    pub(crate) fn apply(self, record: &mut SavedRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(customization) = self.customization {
            record.customization = customization;
        }
    }
}
