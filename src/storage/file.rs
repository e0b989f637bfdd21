//! JSON file storage in the user's data directory

use super::traits::{PersistedState, StorageBackend, StorageError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the persisted blob
pub const STORAGE_FILE_NAME: &str = "form-builder-storage.json";

/// Stores the collections as one pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default blob location in the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formbuilder", "form-builder")
            .map(|dirs| dirs.data_dir().join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let state = PersistedState::from_json(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            forms = state.forms.len(),
            responses = state.responses.len(),
            "Loaded form builder storage"
        );
        Ok(Some(state))
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = state.to_json()?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
