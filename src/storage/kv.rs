use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::LabError;

/// Durable string key-value storage injected into the persistent stores.
///
/// Calls are synchronous: once `set` or `remove` returns `Ok`, a later
/// `get` in the same process observes the change.
pub trait KeyValueStore {
    /// Value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, LabError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), LabError>;

    /// Delete `key`. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), LabError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store, used in tests and as a fallback when no directory is
/// configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write with a storage error (simulates a full quota).
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> Result<(), LabError> {
        if self.read_only {
            return Err(LabError::Storage("store is read-only".to_owned()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LabError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LabError> {
        self.check_writable()?;
        let _ = self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), LabError> {
        self.check_writable()?;
        let _ = self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// One JSON file per key inside a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`, created if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LabError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, LabError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LabError::Storage(format!("invalid key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, LabError> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LabError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LabError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(LabError::Io(e));
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), LabError> {
        match std::fs::remove_file(self.path_for(key)?) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(LabError::Io(e))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("biolab-kv-{tag}-{}", std::process::id()))
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn read_only_memory_store_rejects_writes() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_read_only(true);
        assert!(matches!(store.set("k", "w"), Err(LabError::Storage(_))));
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = temp_dir("persist");
        let mut store = FileStore::open(&dir).unwrap();
        store.set("savedViews", "[]").unwrap();

        let reopened = FileStore::open(&dir).unwrap();
        assert_eq!(reopened.get("savedViews").unwrap().as_deref(), Some("[]"));
        assert!(!dir.join("savedViews.json.tmp").exists());

        store.remove("savedViews").unwrap();
        assert_eq!(reopened.get("savedViews").unwrap(), None);
        store.remove("savedViews").unwrap();
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = temp_dir("rename");
        let mut store = FileStore::open(&dir).unwrap();
        assert_eq!(store.dir(), dir.as_path());

        // A non-empty directory where the value file should go.
        let blocked = store.dir().join("blocked.json");
        std::fs::create_dir_all(blocked.join("inner")).unwrap();
        assert!(matches!(store.set("blocked", "x"), Err(LabError::Io(_))));
        assert!(!dir.join("blocked.json.tmp").exists());
        assert!(blocked.is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = temp_dir("keys");
        let mut store = FileStore::open(&dir).unwrap();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(LabError::Storage(_))
        ));
        assert!(store.get("").is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
