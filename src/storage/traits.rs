//! Trait abstraction for storage backends to enable mocking in tests

use crate::state::{default_templates, Form, Response, Template};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while reading or writing the persisted blob
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage blob could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The collections written to durable storage
///
/// The current form and the undo history are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub forms: Vec<Form>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl PersistedState {
    /// State of a store that has never been saved
    pub fn fresh() -> Self {
        Self {
            forms: Vec::new(),
            responses: Vec::new(),
            templates: default_templates(),
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Trait for storage operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend: Send {
    /// Read the persisted blob, `None` if nothing was saved yet
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;

    /// Replace the persisted blob
    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError>;
}
