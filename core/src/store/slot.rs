use std::collections::HashMap;

use super::error::SlotError;

/// A keyed string cell the store persists into.
pub trait Slot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError>;
    fn store(&mut self, key: &str, contents: &str) -> Result<(), SlotError>;
}

/// In-process slot. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    cells: HashMap<String, String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a cell without counting it as a write.
    pub fn with_contents(mut self, key: &str, contents: &str) -> Self {
        self.cells.insert(key.to_string(), contents.to_string());
        self
    }

    pub fn contents(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    /// Number of `store` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Slot for MemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.cells.get(key).cloned())
    }

    fn store(&mut self, key: &str, contents: &str) -> Result<(), SlotError> {
        self.cells.insert(key.to_string(), contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
