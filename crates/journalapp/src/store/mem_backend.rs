use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory slots for testing logic without filesystem I/O.
#[derive(Default)]
pub struct MemBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. to simulate a pre-existing or hand-edited
    /// entries slot in tests.
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots
            .lock()
            .expect("slot lock poisoned")
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| JournalError::Store("slot lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| JournalError::Store("slot lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
