//! Durable key-value slots backing the entry store.
//!
//! The journal persists its whole entry list as one document under one
//! fixed key. [`Storage`] abstracts where that document lives:
//!
//! - [`FileStorage`] keeps one file per key in a data directory.
//! - [`MemoryStorage`] keeps documents in process memory.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::StoreError;

/// A durable slot holding one document per key.
///
/// Implementations either store the whole document or leave the previous
/// one in place; a failed write must never leave a truncated document.
pub trait Storage {
    /// Read the document stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been written under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `key`.
    fn write(&mut self, key: &str, document: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory slots
// ---------------------------------------------------------------------------

/// Documents held in process memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Create storage that already holds `document` under `key`.
    pub fn with_document(key: &str, document: &str) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(key.to_owned(), document.to_owned());
        Self { slots }
    }

    /// The raw document under `key`, if any.
    pub fn document(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_owned(), document.to_owned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File-backed slots
// ---------------------------------------------------------------------------

/// One JSON file per key inside a data directory.
///
/// Writes go to a temporary file in the same directory which is synced and
/// then renamed over the target, so readers see either the old or the new
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file holding the document for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.starts_with('.')
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn atomic_write(&self, key: &str, path: &Path, data: &[u8]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = self.dir.join(format!(".{key}.{}.tmp", Uuid::new_v4()));

        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        });
        if let Err(source) = written.and_then(|()| fs::rename(&tmp, path)) {
            // Best effort; the temp file is garbage either way.
            let _ = fs::remove_file(&tmp);
            return Err(io_err(source));
        }

        // Flush the directory entry so the rename survives a crash.
        if let Ok(dir) = fs::File::open(&self.dir) {
            let _ = dir.sync_all();
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(document) => Ok(Some(document)),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, document: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        self.atomic_write(key, &path, document.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = document.len(), "Wrote storage slot");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_starts_empty_and_overwrites() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("jurnal").unwrap(), None);

        storage.write("jurnal", "[1]").unwrap();
        storage.write("jurnal", "[2]").unwrap();
        assert_eq!(storage.read("jurnal").unwrap().as_deref(), Some("[2]"));
        assert_eq!(storage.read("altceva").unwrap(), None);
    }

    #[test]
    fn file_slot_round_trips_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("data"));

        assert_eq!(storage.read("jurnal").unwrap(), None);
        storage.write("jurnal", "[]").unwrap();
        storage.write("jurnal", "[\"x\"]").unwrap();
        assert_eq!(storage.read("jurnal").unwrap().as_deref(), Some("[\"x\"]"));

        let names: Vec<String> = fs::read_dir(storage.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["jurnal.json".to_owned()]);
    }

    #[test]
    fn keys_that_escape_the_directory_are_rejected() {
        let storage = FileStorage::new("/tmp/jurnal");
        for key in ["", ".", "..", "../x", "a/b", "a\\b", ".hidden"] {
            assert!(
                matches!(storage.path_for(key), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
        assert!(storage.path_for("app3-jurnal-ganduri-automate-v1").is_ok());
    }

    #[test]
    fn write_into_unusable_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let mut storage = FileStorage::new(&blocker);
        let result = storage.write("jurnal", "[]");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
