//! The saved-code collection.
//!
//! The whole collection lives in one slot as a JSON array. Every operation
//! reads it, modifies it in memory and writes it back. There is no locking:
//! two writers racing on the same slot lose updates, last write wins.

use chrono::{DateTime, Utc};
use error::StoreError;
use log::{info, warn};

use crate::types::{Config, RecordDraft, RecordId, RecordUpdate, SavedRecord};

mod db;
mod slot;

pub use db::RedbSlot;
pub use slot::{MemorySlot, Slot};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SlotError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Slot error: {0}")]
        Slot(#[from] SlotError),

        #[error("Serialization error: {0}")]
        Serialize(#[from] serde_json::Error),
    }
}

/// Slot key the collection is stored under.
pub const SAVED_CODES_KEY: &str = "saved-qr-codes";

pub struct SavedCodeStore<S> {
    slot: S,
    key: String,
}

impl<S: Slot> SavedCodeStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, SAVED_CODES_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }
}

impl SavedCodeStore<RedbSlot> {
    /// Opens the on-disk collection under `config.base_path`.
    pub fn open(config: &Config) -> crate::Result<Self> {
        Ok(Self::new(RedbSlot::open(config)?))
    }
}

/// Create operations.
impl<S: Slot> SavedCodeStore<S> {
    /// Appends a new record with a fresh id, `created_at = now` and zero scans.
    pub fn save(&mut self, draft: RecordDraft, now: DateTime<Utc>) -> Result<SavedRecord, StoreError> {
        let record = SavedRecord {
            id: RecordId::new(),
            content_type: draft.content_type,
            customization: draft.customization,
            payload: draft.payload,
            created_at: now,
            name: draft.name,
            scans: 0,
            last_scanned: None,
        };

        let mut records = self.read_all();
        records.push(record.clone());
        self.write_all(&records)?;

        info!("saved {} code {}", record.content_type, record.id);
        Ok(record)
    }
}

/// Read operations.
impl<S: Slot> SavedCodeStore<S> {
    /// The full collection in insertion order. Missing or unreadable data
    /// yields an empty list.
    pub fn list(&self) -> Vec<SavedRecord> {
        self.read_all()
    }

    pub fn get(&self, id: RecordId) -> Option<SavedRecord> {
        self.read_all().into_iter().find(|r| r.id == id)
    }
}

/// Update operations.
impl<S: Slot> SavedCodeStore<S> {
    /// Merges `update` into the matching record. Returns `false` and writes
    /// nothing when no record matches.
    pub fn update(&mut self, id: RecordId, update: RecordUpdate) -> Result<bool, StoreError> {
        self.modify(id, |record| update.apply(record))
    }

    /// Increments the scan counter and stamps `last_scanned`.
    pub fn record_scan(&mut self, id: RecordId, now: DateTime<Utc>) -> Result<bool, StoreError> {
        self.modify(id, |record| {
            record.scans += 1;
            record.last_scanned = Some(now);
        })
    }
}

/// Delete operations.
impl<S: Slot> SavedCodeStore<S> {
    /// Removes the matching record. Absent ids are a no-op.
    pub fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        let mut records = self.read_all();
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() != before {
            self.write_all(&records)?;
            info!("deleted code {id}");
        }
        Ok(())
    }
}

/// Internal helpers.
impl<S: Slot> SavedCodeStore<S> {
    fn read_all(&self) -> Vec<SavedRecord> {
        let contents = match self.slot.load(&self.key) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read saved codes: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("discarding unreadable saved codes: {e}");
            Vec::new()
        })
    }

    fn write_all(&mut self, records: &[SavedRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.slot.store(&self.key, &json)?;
        Ok(())
    }

    fn modify(
        &mut self,
        id: RecordId,
        f: impl FnOnce(&mut SavedRecord),
    ) -> Result<bool, StoreError> {
        let mut records = self.read_all();
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };

        f(record);
        self.write_all(&records)?;
        Ok(true)
    }
}
