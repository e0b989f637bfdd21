//! Durable storage for the form builder collections

mod file;
mod memory;
mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{PersistedState, StorageBackend, StorageError};

#[cfg(test)]
pub use traits::MockStorageBackend;
