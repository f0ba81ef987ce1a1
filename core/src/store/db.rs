//! redb-backed slot: one `&str → &str` table, one row per slot key.

use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;

use super::error::SlotError;
use super::slot::Slot;
use crate::types::Config;

/// Slot table: key → serialized contents
const SLOTS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("slots");

pub struct RedbSlot {
    db: redb::Database,
}

impl RedbSlot {
    /// Creates or opens the database at `config.db_path()`.
    pub fn open(config: &Config) -> Result<Self, SlotError> {
        std::fs::create_dir_all(&config.base_path)?;
        Self::open_path(&config.db_path())
    }

    pub fn open_path(path: &Path) -> Result<Self, SlotError> {
        let db = redb::Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

impl Slot for RedbSlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        let contents = table.get(key)?.map(|guard| guard.value().to_string());
        Ok(contents)
    }

    fn store(&mut self, key: &str, contents: &str) -> Result<(), SlotError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.insert(key, contents)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
