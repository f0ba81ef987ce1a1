//! The saved-codes view: entries for display plus the actions on them.
//!
//! Every action reports its outcome as a [`Notice`]. Failure notices are
//! deliberately vague; the cause goes to the log.

use chrono::{DateTime, Utc};
use log::warn;
use std::path::{Path, PathBuf};

use crate::render::{self, ExportFormat};
use crate::store::{SavedCodeStore, Slot};
use crate::types::{ContentType, RecordId, RecordName, RecordUpdate, SavedRecord};

/// Payload characters shown before truncation.
const SUMMARY_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEntry {
    pub id: RecordId,
    pub content_type: ContentType,
    pub name: Option<RecordName>,
    /// The name, or `"<type> QR"` for unnamed codes.
    pub title: String,
    /// The payload, cut to 50 characters.
    pub summary: String,
    pub scans: u64,
    pub created_at: DateTime<Utc>,
    pub last_scanned: Option<DateTime<Utc>>,
}

impl From<&SavedRecord> for DashboardEntry {
    fn from(record: &SavedRecord) -> Self {
        Self {
            id: record.id,
            content_type: record.content_type,
            name: record.name.clone(),
            title: title_of(record),
            summary: summarize(&record.payload),
            scans: record.scans,
            created_at: record.created_at,
            last_scanned: record.last_scanned,
        }
    }
}

pub struct Dashboard<'a, S> {
    store: &'a mut SavedCodeStore<S>,
}

impl<'a, S: Slot> Dashboard<'a, S> {
    pub fn new(store: &'a mut SavedCodeStore<S>) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        self.store.list().iter().map(DashboardEntry::from).collect()
    }

    /// Sets the name; blank text clears it.
    pub fn rename(&mut self, id: RecordId, text: &str) -> Notice {
        let name = match RecordName::parse_optional(text) {
            Ok(name) => name,
            Err(e) => {
                warn!("rejected name for {id}: {e}");
                return Notice::failure("Failed to update QR code name.");
            }
        };

        match self.store.update(id, RecordUpdate::new().name(name)) {
            Ok(true) => Notice::success("Name Updated", "QR code name has been updated."),
            Ok(false) => Notice::failure("QR code not found."),
            Err(e) => {
                warn!("failed to rename {id}: {e}");
                Notice::failure("Failed to update QR code name.")
            }
        }
    }

    pub fn delete(&mut self, id: RecordId) -> Notice {
        match self.store.delete(id) {
            Ok(()) => Notice::success("QR Code Deleted", "QR code removed from your collection."),
            Err(e) => {
                warn!("failed to delete {id}: {e}");
                Notice::failure("Failed to delete QR code.")
            }
        }
    }

    /// Re-renders a saved code from its stored payload and customization into
    /// `dir`.
    pub fn download(&self, id: RecordId, dir: &Path, format: ExportFormat) -> Notice {
        let Some(record) = self.store.get(id) else {
            return Notice::failure("QR code not found.");
        };

        let path = dir.join(export_file_name(&record, format));
        let result = render::render(&record.payload, &record.customization)
            .and_then(|image| render::export::write_file(&image, &path, format));

        match result {
            Ok(()) => Notice::success(
                "Downloaded!",
                format!("QR code downloaded to {}.", path.display()),
            ),
            Err(e) => {
                warn!("failed to export {id}: {e}");
                Notice::failure("Failed to download QR code.")
            }
        }
    }
}

/// `<name or type>-qr.<ext>`, with path-unsafe characters replaced.
pub fn export_file_name(record: &SavedRecord, format: ExportFormat) -> PathBuf {
    let stem = match &record.name {
        Some(name) => name.to_string(),
        None => record.content_type.to_string(),
    };
    let safe: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    PathBuf::from(format!("{safe}-qr.{}", format.extension()))
}

fn title_of(record: &SavedRecord) -> String {
    match &record.name {
        Some(name) => name.to_string(),
        None => format!("{} QR", record.content_type),
    }
}

fn summarize(payload: &str) -> String {
    if payload.chars().count() > SUMMARY_CHARS {
        let head: String = payload.chars().take(SUMMARY_CHARS).collect();
        format!("{head}...")
    } else {
        payload.to_string()
    }
}
