//! File-backed key-value store.
//!
//! Each key maps to one document at `<dir>/<key>.json`. Writes replace the
//! whole file, matching the wholesale-overwrite lifecycle of the records
//! stored here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// Key-value store keeping one JSON document per key under a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::Unavailable(format!("mkdir {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    /// The directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Unavailable(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| StorageError::Unavailable(format!("write {}: {e}", path.display())))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Unavailable(format!(
                "remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let (_dir, store) = open_temp();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let (_dir, mut store) = open_temp();
        store.set("record", r#"{"a":1}"#).unwrap();
        assert_eq!(store.get("record").unwrap().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_set_overwrites_existing_document() {
        let (_dir, mut store) = open_temp();
        store.set("record", "old").unwrap();
        store.set("record", "new").unwrap();
        assert_eq!(store.get("record").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, mut store) = open_temp();
        store.set("record", "value").unwrap();
        store.remove("record").unwrap();
        store.remove("record").unwrap();
        assert_eq!(store.get("record").unwrap(), None);
    }

    #[test]
    fn test_documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = JsonFileStore::open(dir.path()).unwrap();
            store.set("record", "durable").unwrap();
        }
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("record").unwrap().as_deref(), Some("durable"));
    }
}
