use chrono::{DateTime, SecondsFormat, Utc};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::kv::KeyValueStore;
use crate::error::LabError;
use crate::viewer::ViewSnapshot;

/// Storage key holding the JSON array of saved views.
pub const SAVED_VIEWS_KEY: &str = "savedViews";

/// Rotation angles as persisted (`{x, y, z}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation about x (radians).
    pub x: f32,
    /// Rotation about y (radians).
    pub y: f32,
    /// Rotation about z (radians).
    pub z: f32,
}

impl From<Vec3> for Rotation {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Rotation> for Vec3 {
    fn from(r: Rotation) -> Self {
        Self::new(r.x, r.y, r.z)
    }
}

/// One persisted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedView {
    /// Creation time in milliseconds since the epoch, unique per store.
    pub id: u64,
    /// User-supplied name (non-empty).
    pub name: String,
    /// Registry id of the molecule.
    pub molecule: String,
    /// Rotation snapshot.
    pub rotation: Rotation,
    /// Camera distance snapshot.
    pub zoom: f32,
    /// Creation time, RFC 3339 / ISO-8601 UTC.
    pub time: String,
}

impl SavedView {
    /// Snapshot to hand to
    /// [`ViewerSession::restore`](crate::viewer::ViewerSession::restore).
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            molecule: self.molecule.clone(),
            rotation: self.rotation.into(),
            zoom: self.zoom,
        }
    }
}

/// Named saved views, kept in lockstep with a [`KeyValueStore`].
///
/// The in-memory list is a cache of the durable entry. Every mutation
/// writes the full list back before returning; if the write fails the
/// cache is rolled back so memory and storage never diverge.
#[derive(Debug)]
pub struct ViewStore<K: KeyValueStore> {
    store: K,
    views: Vec<SavedView>,
}

impl<K: KeyValueStore> ViewStore<K> {
    /// Load the saved views from `store`.
    ///
    /// A missing, unreadable or corrupt entry yields an empty list.
    pub fn open(store: K) -> Self {
        let views = match store.get(SAVED_VIEWS_KEY) {
            Ok(Some(json)) => {
                serde_json::from_str(&json).unwrap_or_else(|e| {
                    log::warn!("ignoring corrupt saved views: {e}");
                    Vec::new()
                })
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("could not read saved views: {e}");
                Vec::new()
            }
        };
        Self { store, views }
    }

    /// Saved views in insertion order.
    #[must_use]
    pub fn list_views(&self) -> &[SavedView] {
        &self.views
    }

    /// View with the given id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&SavedView> {
        self.views.iter().find(|v| v.id == id)
    }

    /// Number of saved views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether there are no saved views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Underlying storage.
    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Save a view stamped with the current time.
    ///
    /// Returns `Ok(None)` without touching storage when `name` is blank,
    /// there is no snapshot (nothing loaded) or the snapshot's transform
    /// is not finite.
    pub fn save_view(
        &mut self,
        name: &str,
        snapshot: Option<&ViewSnapshot>,
    ) -> Result<Option<u64>, LabError> {
        self.save_view_at(name, snapshot, Utc::now())
    }

    /// [`save_view`](Self::save_view) with an explicit creation time.
    pub fn save_view_at(
        &mut self,
        name: &str,
        snapshot: Option<&ViewSnapshot>,
        now: DateTime<Utc>,
    ) -> Result<Option<u64>, LabError> {
        let name = name.trim();
        let Some(snapshot) =
            snapshot.filter(|s| !name.is_empty() && s.is_finite())
        else {
            return Ok(None);
        };

        // Stored ids can be anything; skip past them without overflowing.
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let mut id = self
            .views
            .iter()
            .filter_map(|v| v.id.checked_add(1))
            .fold(millis, u64::max);
        while self.get(id).is_some() {
            id = id.wrapping_add(1);
        }
        self.views.push(SavedView {
            id,
            name: name.to_owned(),
            molecule: snapshot.molecule.clone(),
            rotation: snapshot.rotation.into(),
            zoom: snapshot.zoom,
            time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        });

        if let Err(e) = self.persist() {
            let _ = self.views.pop();
            return Err(e);
        }
        log::info!("saved view '{name}' ({})", snapshot.molecule);
        Ok(Some(id))
    }

    /// Delete the view with `id`. Absent ids are a no-op returning
    /// `Ok(false)`.
    pub fn delete_view(&mut self, id: u64) -> Result<bool, LabError> {
        let Some(index) = self.views.iter().position(|v| v.id == id) else {
            return Ok(false);
        };
        let removed = self.views.remove(index);
        if let Err(e) = self.persist() {
            self.views.insert(index, removed);
            return Err(e);
        }
        log::info!("deleted view '{}'", removed.name);
        Ok(true)
    }

    /// Remove every view and the durable entry.
    pub fn clear_all(&mut self) -> Result<(), LabError> {
        if let Err(e) = self.store.remove(SAVED_VIEWS_KEY) {
            log::error!("failed to clear saved views: {e}");
            return Err(e);
        }
        self.views.clear();
        log::info!("cleared saved views");
        Ok(())
    }

    fn persist(&mut self) -> Result<(), LabError> {
        let json = serde_json::to_string(&self.views)?;
        self.store.set(SAVED_VIEWS_KEY, &json).inspect_err(|e| {
            log::error!("failed to persist saved views: {e}");
        })
    }
}
