//! Backing store traits
//!
//! These traits define the untyped storage the domain layer writes through.
//! Implementations are in infra/storage.

use super::error::{SecureStoreError, StoreError};

/// Durable, string-keyed map of opaque blobs
///
/// One instance represents one storage scope (the app, or a shared
/// app-group container). Blobs are JSON text produced by the typed store.
pub trait KeyValueBackend: Send + Sync {
    /// Fetch the blob stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Every key currently stored in this scope
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Make all previous writes durable
    fn flush(&self) -> Result<(), StoreError>;
}

/// Higher-confidentiality string map (keychain, keystore, ...)
pub trait SecureBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SecureStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SecureStoreError>;

    fn delete(&self, key: &str) -> Result<(), SecureStoreError>;

    /// Remove every item owned by this application
    fn clear(&self) -> Result<(), SecureStoreError>;

    fn keys(&self) -> Result<Vec<String>, SecureStoreError>;
}
