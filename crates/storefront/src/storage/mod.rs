//! Durable key-value storage for the storefront.
//!
//! The profile records are persisted to a small key-value store addressed by
//! namespaced string keys. The store holds raw serialized documents; record
//! (de)serialization lives with the [`crate::profile`] layer.
//!
//! Two backends ship:
//!
//! - [`JsonFileStore`] - one document per key under a directory (durable)
//! - [`MemoryStore`] - in-memory map for unit tests

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Keys for the records the storefront persists.
pub mod keys {
    /// Saved account record.
    pub const USER: &str = "td_user";
    /// Saved delivery address record.
    pub const DELIVERY_ADDRESS: &str = "td_delivery_address";
}

/// Errors from the key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached or the operation failed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable key-value store holding one serialized document per key.
///
/// Implementations are synchronous and make a single attempt per operation;
/// retry policy (there is none) belongs to the caller.
pub trait KeyValueStore {
    /// Read the raw document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any existing document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the document under `key`. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
