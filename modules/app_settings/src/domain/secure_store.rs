//! Secure credential storage
//!
//! Thin, string-only facade over a [`SecureBackend`]. Values never go through
//! the typed store's JSON path. Backend failures read as "no value".

use std::sync::Arc;

use crate::contract::{SecureBackend, SecureEntry, SecureStoreError};

#[derive(Clone)]
pub struct SecureStore {
    backend: Arc<dyn SecureBackend>,
}

impl SecureStore {
    pub fn new(backend: Arc<dyn SecureBackend>) -> Self {
        Self { backend }
    }

    /// Stored string for `entry`; `None` when missing or the backend is unavailable
    pub fn item(&self, entry: &SecureEntry) -> Option<String> {
        match self.backend.get(entry.entry_key()) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = entry.entry_key(), error = %err, "secure read failed");
                None
            }
        }
    }

    /// Stored flag for `entry`; anything other than `"true"`/`"false"` reads as `None`
    pub fn item_bool(&self, entry: &SecureEntry) -> Option<bool> {
        match self.item(entry)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn exists(&self, entry: &SecureEntry) -> bool {
        self.item(entry).is_some()
    }

    pub fn save(&self, value: &str, entry: &SecureEntry) -> Result<(), SecureStoreError> {
        self.backend.set(entry.entry_key(), value)
    }

    pub fn save_bool(&self, value: bool, entry: &SecureEntry) -> Result<(), SecureStoreError> {
        self.backend
            .set(entry.entry_key(), if value { "true" } else { "false" })
    }

    pub fn delete(&self, entry: &SecureEntry) -> Result<(), SecureStoreError> {
        self.backend.delete(entry.entry_key())
    }

    pub fn clear_all(&self) -> Result<(), SecureStoreError> {
        self.backend.clear()
    }

    /// Delete every item except `protected`
    ///
    /// Not atomic: keys written while the sweep runs may or may not survive.
    /// Individual delete failures are logged and the sweep continues.
    pub fn clear_all_except(&self, protected: &SecureEntry) -> Result<(), SecureStoreError> {
        let keep = protected.entry_key();
        for key in self.backend.keys()? {
            if key == keep {
                continue;
            }
            if let Err(err) = self.backend.delete(&key) {
                tracing::warn!(key = %key, error = %err, "secure delete failed during sweep");
            }
        }
        Ok(())
    }

    /// Delete everything but the access token
    pub fn clear_all_except_token(&self) -> Result<(), SecureStoreError> {
        self.clear_all_except(&SecureEntry::AccessToken)
    }
}

impl std::fmt::Debug for SecureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::MemorySecureBackend;

    fn store() -> SecureStore {
        SecureStore::new(Arc::new(MemorySecureBackend::new()))
    }

    #[test]
    fn test_save_and_read_string() {
        let store = store();
        let entry = SecureEntry::AccessToken;

        assert!(!store.exists(&entry));
        store.save("secret-token", &entry).unwrap();
        assert_eq!(store.item(&entry).as_deref(), Some("secret-token"));
        assert!(store.exists(&entry));

        store.delete(&entry).unwrap();
        assert_eq!(store.item(&entry), None);
    }

    #[test]
    fn test_flags_round_trip_as_strings() {
        let store = store();
        let entry = SecureEntry::Custom("biometrics".into());

        store.save_bool(true, &entry).unwrap();
        assert_eq!(store.item(&entry).as_deref(), Some("true"));
        assert_eq!(store.item_bool(&entry), Some(true));

        store.save("maybe", &entry).unwrap();
        assert_eq!(store.item_bool(&entry), None);
    }

    #[test]
    fn test_clear_all_except_token_keeps_only_token() {
        let store = store();
        store.save("tok", &SecureEntry::AccessToken).unwrap();
        store.save("1", &SecureEntry::Custom("a".into())).unwrap();
        store.save("2", &SecureEntry::Custom("b".into())).unwrap();

        store.clear_all_except_token().unwrap();

        assert_eq!(store.item(&SecureEntry::AccessToken).as_deref(), Some("tok"));
        assert!(!store.exists(&SecureEntry::Custom("a".into())));
        assert!(!store.exists(&SecureEntry::Custom("b".into())));
    }

    #[test]
    fn test_clear_all_removes_token_too() {
        let store = store();
        store.save("tok", &SecureEntry::AccessToken).unwrap();
        store.clear_all().unwrap();
        assert!(!store.exists(&SecureEntry::AccessToken));
    }

    #[test]
    fn test_clear_all_except_custom_entry() {
        let store = store();
        let device = SecureEntry::Custom("device-id".into());
        store.save("tok", &SecureEntry::AccessToken).unwrap();
        store.save("abc-123", &device).unwrap();
        store.save_bool(true, &SecureEntry::Custom("onboarded".into())).unwrap();

        store.clear_all_except(&device).unwrap();

        assert_eq!(store.item(&device).as_deref(), Some("abc-123"));
        assert!(!store.exists(&SecureEntry::AccessToken));
        assert!(!store.exists(&SecureEntry::Custom("onboarded".into())));
    }
}
