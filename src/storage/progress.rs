use std::collections::BTreeMap;

use super::kv::KeyValueStore;
use crate::error::LabError;

/// Storage key holding the problem-id → completed map.
pub const COMPLETED_PROBLEMS_KEY: &str = "completedProblems";

/// Practice-problem completion flags, persisted as a JSON object.
#[derive(Debug)]
pub struct ProgressStore<K: KeyValueStore> {
    store: K,
    completed: BTreeMap<String, bool>,
}

impl<K: KeyValueStore> ProgressStore<K> {
    /// Load completion flags; a missing or corrupt entry reads as empty.
    pub fn open(store: K) -> Self {
        let completed = match store.get(COMPLETED_PROBLEMS_KEY) {
            Ok(Some(json)) => {
                serde_json::from_str(&json).unwrap_or_else(|e| {
                    log::warn!("ignoring corrupt problem progress: {e}");
                    BTreeMap::new()
                })
            }
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::warn!("could not read problem progress: {e}");
                BTreeMap::new()
            }
        };
        Self { store, completed }
    }

    /// Whether problem `id` is marked completed.
    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.get(id).copied().unwrap_or(false)
    }

    /// Number of problems marked completed.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.values().filter(|done| **done).count()
    }

    /// Set the completion flag for `id`.
    pub fn set_completed(
        &mut self,
        id: &str,
        completed: bool,
    ) -> Result<(), LabError> {
        let previous = self.completed.insert(id.to_owned(), completed);
        if let Err(e) = self.persist() {
            match previous {
                Some(flag) => {
                    let _ = self.completed.insert(id.to_owned(), flag);
                }
                None => {
                    let _ = self.completed.remove(id);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    /// Flip the completion flag for `id` and return the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, LabError> {
        let next = !self.is_completed(id);
        self.set_completed(id, next)?;
        Ok(next)
    }

    /// Forget all progress.
    pub fn clear(&mut self) -> Result<(), LabError> {
        self.store.remove(COMPLETED_PROBLEMS_KEY)?;
        self.completed.clear();
        Ok(())
    }

    fn persist(&mut self) -> Result<(), LabError> {
        let json = serde_json::to_string(&self.completed)?;
        self.store.set(COMPLETED_PROBLEMS_KEY, &json).inspect_err(|e| {
            log::error!("failed to persist problem progress: {e}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn toggle_persists_json_object() {
        let mut progress = ProgressStore::open(MemoryStore::new());
        assert!(progress.toggle("enz-1").unwrap());
        progress.set_completed("carb-2", false).unwrap();
        assert_eq!(progress.completed_count(), 1);

        let json = progress
            .store
            .get(COMPLETED_PROBLEMS_KEY)
            .unwrap()
            .unwrap();
        assert_eq!(json, r#"{"carb-2":false,"enz-1":true}"#);

        assert!(!progress.toggle("enz-1").unwrap());
        assert!(!progress.is_completed("enz-1"));
    }

    #[test]
    fn absent_or_corrupt_entry_is_empty() {
        let progress = ProgressStore::open(MemoryStore::new());
        assert_eq!(progress.completed_count(), 0);

        let mut store = MemoryStore::new();
        store.set(COMPLETED_PROBLEMS_KEY, "[1, 2").unwrap();
        let progress = ProgressStore::open(store);
        assert!(!progress.is_completed("anything"));
    }

    #[test]
    fn failed_write_keeps_previous_flag() {
        let mut store = MemoryStore::new();
        store.set(COMPLETED_PROBLEMS_KEY, r#"{"p1":true}"#).unwrap();
        store.set_read_only(true);
        let mut progress = ProgressStore::open(store);
        assert!(progress.toggle("p1").is_err());
        assert!(progress.is_completed("p1"));
        assert!(progress.set_completed("p2", true).is_err());
        assert!(!progress.is_completed("p2"));
    }

    #[test]
    fn clear_removes_entry() {
        let mut progress = ProgressStore::open(MemoryStore::new());
        progress.set_completed("p1", true).unwrap();
        progress.clear().unwrap();
        assert_eq!(progress.completed_count(), 0);
        assert_eq!(progress.store.get(COMPLETED_PROBLEMS_KEY).unwrap(), None);
    }
}
