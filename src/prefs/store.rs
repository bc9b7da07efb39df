//! Key-value storage backends for persisted preferences
//!
//! Values are opaque strings to the store; the typed layer in
//! [`super::keys`] serializes them as JSON before they get here.

use rustc_hash::FxHashMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to start preference writer: {0}")]
    Spawn(#[source] io::Error),
}

/// String-keyed persistent storage
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// A JSON object file holding every key.
///
/// Each entry is expected to be a string. An entry of any other type is
/// treated as malformed for that key alone; the other entries still load and
/// are kept on the next write. The whole file is rewritten on each `set`, via a temporary sibling file
/// and a rename so a crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "prefs.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Store `prefs.json` inside `dir`, creating the directory if needed
    pub fn in_dir(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self::new(dir.join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| StoreError::Io { path, source }
        };
        fs::write(&tmp, text).map_err(io_err(&tmp))?;
        fs::rename(&tmp, &self.path).map_err(io_err(&self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.read_all()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::warn!(key, entry = %other, "ignoring non-string preference entry");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future write
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Json(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt preference file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&entries)
    }
}

/// Shared in-memory store.
///
/// Clones see the same entries, which lets a test keep a handle while the
/// preference writer owns another. Reads and writes can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<FxHashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored value, bypassing the failure switches
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, FxHashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("read of {key} refused")));
        }
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("write of {key} refused")));
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::in_dir(&dir.path().join("nested")).expect("store");
        assert_eq!(store.get("haptics_enabled").expect("get"), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut store = FileStore::in_dir(dir.path()).expect("store");
        store.set("haptics_enabled", "false").expect("set");
        store.set("forced_theme", "\"dark\"").expect("set");

        let reopened = FileStore::in_dir(dir.path()).expect("store");
        assert_eq!(
            reopened.get("haptics_enabled").expect("get").as_deref(),
            Some("false")
        );
        assert_eq!(
            reopened.get("forced_theme").expect("get").as_deref(),
            Some("\"dark\"")
        );
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(FileStore::FILE_NAME);
        fs::write(&path, "{not json").expect("write");

        let mut store = FileStore::new(&path);
        assert!(matches!(store.get("forced_theme"), Err(StoreError::Json(_))));

        store.set("forced_theme", "\"light\"").expect("set over corrupt file");
        assert_eq!(
            store.get("forced_theme").expect("get").as_deref(),
            Some("\"light\"")
        );
    }

    #[test]
    fn test_file_store_bad_entry_only_affects_its_key() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(FileStore::FILE_NAME);
        fs::write(&path, r#"{"forced_theme":"\"dark\"","haptics_enabled":false}"#)
            .expect("write");

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("haptics_enabled").expect("get"), None);
        assert_eq!(
            store.get("forced_theme").expect("get").as_deref(),
            Some("\"dark\"")
        );

        store.set("haptics_enabled", "true").expect("set");
        assert_eq!(
            store.get("haptics_enabled").expect("get").as_deref(),
            Some("true")
        );
        assert_eq!(
            store.get("forced_theme").expect("get").as_deref(),
            Some("\"dark\"")
        );
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get").as_deref(), Some("v"));

        store.set_fail_reads(true);
        assert!(store.get("k").is_err());
        assert_eq!(store.raw("k").as_deref(), Some("v"));
    }
}
