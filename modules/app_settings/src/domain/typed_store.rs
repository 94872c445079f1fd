//! Typed key-value persistence over an untyped backing store

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::contract::{KeyValueBackend, StoreError};
use crate::infra::storage::MemoryBackend;

/// Serializes arbitrary values into a [`KeyValueBackend`]
///
/// The store is type-erased: a value written as `T` must be read back as
/// `T`. Each value is serialized individually as JSON, primitives included.
/// No locking happens here; concurrent writes to one key are last-write-wins.
#[derive(Clone)]
pub struct TypedStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl TypedStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by a fresh in-memory map
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Write `value` under `key` and flush before returning
    ///
    /// When the flush fails the previous blob is restored, so readers never
    /// observe a value that was not made durable.
    pub fn put<T: Serialize + ?Sized>(&self, value: &T, key: &str) -> Result<(), StoreError> {
        let blob = serde_json::to_string(value)?;
        let previous = self.backend.get(key)?;
        self.backend.set(key, blob)?;
        self.commit(&[(key.to_string(), previous)])
    }

    /// Read `key` as `T`
    ///
    /// Absent keys, blobs that do not decode as `T` and backend read failures
    /// all yield `None`. Use [`TypedStore::try_get`] to tell them apart.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(key, error = %err, "typed store read treated as miss");
                None
            }
        }
    }

    /// Read `key` as `T`, distinguishing "never written" from "unreadable"
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(blob) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            })
    }

    pub fn has(&self, key: &str) -> bool {
        matches!(self.backend.get(key), Ok(Some(_)))
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let previous = self.backend.get(key)?;
        self.backend.remove(key)?;
        self.commit(&[(key.to_string(), previous)])
    }

    /// Remove every key in this store's scope
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut snapshot = Vec::new();
        for key in self.backend.keys()? {
            let previous = self.backend.get(&key)?;
            self.backend.remove(&key)?;
            snapshot.push((key, previous));
        }
        self.commit(&snapshot)
    }

    /// Flush, or put the `(key, previous blob)` pairs back when the flush fails
    fn commit(&self, snapshot: &[(String, Option<String>)]) -> Result<(), StoreError> {
        let Err(err) = self.backend.flush() else {
            return Ok(());
        };
        for (key, previous) in snapshot {
            let restored = match previous {
                Some(blob) => self.backend.set(key, blob.clone()),
                None => self.backend.remove(key),
            };
            if let Err(restore_err) = restored {
                tracing::warn!(key = %key, error = %restore_err, "failed to roll back write");
            }
        }
        Err(err)
    }
}

impl std::fmt::Debug for TypedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        age: u32,
    }

    #[test]
    fn test_round_trips_primitives_and_structs() {
        let store = TypedStore::in_memory();

        store.put(&42_i64, "answer").unwrap();
        store.put("dark", "theme").unwrap();
        store.put(&true, "flag").unwrap();
        store
            .put(
                &Profile {
                    name: "Ada".into(),
                    age: 36,
                },
                "profile",
            )
            .unwrap();

        assert_eq!(store.get::<i64>("answer"), Some(42));
        assert_eq!(store.get::<String>("theme").as_deref(), Some("dark"));
        assert_eq!(store.get::<bool>("flag"), Some(true));
        assert_eq!(
            store.get::<Profile>("profile"),
            Some(Profile {
                name: "Ada".into(),
                age: 36
            })
        );
    }

    #[test]
    fn test_missing_key_is_absent_for_any_type() {
        let store = TypedStore::in_memory();
        assert_eq!(store.get::<i64>("nope"), None);
        assert_eq!(store.get::<String>("nope"), None);
        assert!(!store.has("nope"));
        assert!(matches!(store.try_get::<bool>("nope"), Ok(None)));
    }

    #[test]
    fn test_type_mismatch_is_silent_miss_but_try_get_reports_it() {
        let store = TypedStore::in_memory();
        store.put("not a number", "key").unwrap();

        assert_eq!(store.get::<i64>("key"), None);
        assert!(store.has("key"));
        assert!(matches!(
            store.try_get::<i64>("key"),
            Err(StoreError::Decode { .. })
        ));
    }

    #[test]
    fn test_put_overwrites_and_remove_deletes() {
        let store = TypedStore::in_memory();
        store.put(&1_u8, "n").unwrap();
        store.put(&2_u8, "n").unwrap();
        assert_eq!(store.get::<u8>("n"), Some(2));

        store.remove("n").unwrap();
        assert!(!store.has("n"));
        store.remove("n").unwrap();
    }

    #[test]
    fn test_clear_empties_the_scope_only() {
        let shared = Arc::new(MemoryBackend::new());
        let store = TypedStore::new(shared.clone());
        let other = TypedStore::in_memory();

        store.put(&1, "a").unwrap();
        store.put(&2, "b").unwrap();
        other.put(&3, "a").unwrap();

        store.clear().unwrap();

        assert!(!store.has("a"));
        assert!(!store.has("b"));
        assert_eq!(other.get::<i32>("a"), Some(3));
        assert!(shared.keys().unwrap().is_empty());
    }

    /// Memory backend whose flush can be switched to fail
    #[derive(Default)]
    struct FlakyBackend {
        inner: MemoryBackend,
        failing: AtomicBool,
    }

    impl KeyValueBackend for FlakyBackend {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }

        fn keys(&self) -> Result<Vec<String>, StoreError> {
            self.inner.keys()
        }

        fn flush(&self) -> Result<(), StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::Backend("disk full".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_failed_flush_leaves_previous_values_visible() {
        let backend = Arc::new(FlakyBackend::default());
        let store = TypedStore::new(backend.clone());
        store.put("light", "theme").unwrap();
        store.put(&7, "count").unwrap();

        backend.failing.store(true, Ordering::SeqCst);

        assert!(store.put("dark", "theme").is_err());
        assert!(store.put(&true, "fresh").is_err());
        assert!(store.remove("count").is_err());
        assert!(store.clear().is_err());

        assert_eq!(store.get::<String>("theme").as_deref(), Some("light"));
        assert_eq!(store.get::<i32>("count"), Some(7));
        assert!(!store.has("fresh"));
    }
}
