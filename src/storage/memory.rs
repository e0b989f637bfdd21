//! In-process storage, used when no file is configured and in tests

use super::traits::{PersistedState, StorageBackend, StorageError};

/// Keeps the serialized blob in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved blob, if any
    pub fn contents(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        self.blob
            .as_deref()
            .map(PersistedState::from_json)
            .transpose()
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        self.blob = Some(state.to_json()?);
        Ok(())
    }
}
