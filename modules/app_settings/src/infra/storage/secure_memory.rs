//! In-memory secure backend for tests and platforms without a keychain

use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::contract::{SecureBackend, SecureStoreError};

#[derive(Debug, Default)]
pub struct MemorySecureBackend {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemorySecureBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureBackend for MemorySecureBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SecureStoreError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SecureStoreError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SecureStoreError> {
        self.items.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), SecureStoreError> {
        self.items.write().clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, SecureStoreError> {
        Ok(self.items.read().keys().cloned().collect())
    }
}
