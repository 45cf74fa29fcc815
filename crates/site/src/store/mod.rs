//! On-device persistent storage.
//!
//! The site keeps three independent keys on the local device, each read and
//! written as an opaque string:
//!
//! - [`keys::DOCUMENT`] - the last successfully reconciled or published
//!   document (serialized JSON)
//! - [`keys::LOGGED_IN`] - the owner's logged-in flag
//! - [`keys::LANGUAGE`] - the selected display language
//!
//! Storage is modeled as a small injected port so the engine and session
//! state can be exercised against an in-memory fake in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage keys for on-device state.
pub mod keys {
    /// Key for the cached document.
    pub const DOCUMENT: &str = "document";

    /// Key for the owner's logged-in flag.
    pub const LOGGED_IN: &str = "logged_in";

    /// Key for the selected display language.
    pub const LANGUAGE: &str = "language";
}

/// Errors raised by the on-device store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key/value storage for on-device state.
///
/// `read` returns the last stored value, or `None` if the key was never
/// written. `write` overwrites unconditionally; there is no versioning.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Durably overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying storage cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying storage cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
