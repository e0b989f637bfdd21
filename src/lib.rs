//! Form builder - local-first engine for building, sharing and filling forms
//!
//! The [`FormStore`] owns every form, field, response and template, keeps a
//! bounded undo/redo log for the form being edited, and saves its collections
//! through a [`StorageBackend`]. [`FillSession`] drives the filler view on
//! top of it.

pub mod config;
pub mod fill;
pub mod share;
pub mod state;
pub mod storage;

pub use config::BuilderConfig;
pub use fill::{validate_field, FillSession, SubmitError};
pub use state::{
    Field, FieldDraft, FieldKind, FieldUpdate, FieldValue, Form, FormStore, FormUpdate, Response,
    ResponseData, Template, Validation,
};
pub use storage::{FileStorage, MemoryStorage, PersistedState, StorageBackend, StorageError};
