//! JSON-file backing store
//!
//! The whole scope lives in one JSON object on disk. Writes go to memory;
//! `flush` rewrites the file through a temporary sibling and an atomic rename.

use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::contract::{KeyValueBackend, StoreError};

const DEFAULT_SCOPE: &str = "standard";

#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
    // serializes concurrent flushes onto the same file
    flush_lock: Mutex<()>,
}

impl JsonFileBackend {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| StoreError::Backend(format!("{}: {err}", path.display())))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), keys = data.len(), "opened settings file");
        Ok(Self {
            path,
            data: RwLock::new(data),
            flush_lock: Mutex::new(()),
        })
    }

    /// Open the store of a named scope inside `directory`
    ///
    /// `None` selects the application's standard scope; a group name selects
    /// a container shared with other processes of the same app group.
    pub fn for_scope(directory: &Path, app_group: Option<&str>) -> Result<Self, StoreError> {
        let name = app_group.unwrap_or(DEFAULT_SCOPE);
        Self::open(directory.join(format!("{name}.settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.data.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn flush(&self) -> Result<(), StoreError> {
        let _guard = self.flush_lock.lock();
        let bytes = serde_json::to_vec_pretty(&*self.data.read())?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(|e| self.io_err(e))?;
        file.write_all(&bytes).map_err(|e| self.io_err(e))?;
        file.sync_all().map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flushed_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::for_scope(dir.path(), None).unwrap();
        backend.set("AppAppearance", "\"dark\"".to_string()).unwrap();
        backend.flush().unwrap();
        drop(backend);

        let reopened = JsonFileBackend::for_scope(dir.path(), None).unwrap();
        assert_eq!(
            reopened.get("AppAppearance").unwrap().as_deref(),
            Some("\"dark\"")
        );
    }

    #[test]
    fn test_scopes_are_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let standard = JsonFileBackend::for_scope(dir.path(), None).unwrap();
        let group = JsonFileBackend::for_scope(dir.path(), Some("group.widgets")).unwrap();

        standard.set("k", "1".to_string()).unwrap();
        standard.flush().unwrap();

        assert_ne!(standard.path(), group.path());
        assert_eq!(group.get("k").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, b"{not json").unwrap();

        assert!(matches!(
            JsonFileBackend::open(&path),
            Err(StoreError::Backend(_))
        ));
    }
}
