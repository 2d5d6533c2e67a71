//! Renderer-agnostic scene port.
//!
//! The viewer session never talks to a graphics API. It issues
//! add/remove/dispose commands against a [`Scene`], which any 3D (or
//! 2D-projected) renderer can implement. [`DisplayList`] is the in-memory
//! implementation used by tests and the command-line front end.

mod mesh;

pub use mesh::{meshes_for, Mesh, MeshHandle, BOND_RADIUS, HBOND_RADIUS};
use rustc_hash::FxHashMap;

// ---------------------------------------------------------------------------
// Scene port
// ---------------------------------------------------------------------------

/// Retained-mode display list the viewer session drives.
pub trait Scene {
    /// Attach a mesh and return its handle.
    fn add(&mut self, mesh: Mesh) -> MeshHandle;

    /// Detach a mesh without releasing its resources. Returns whether the
    /// handle was attached.
    fn remove(&mut self, handle: MeshHandle) -> bool;

    /// Release a mesh's resources, detaching it first if needed. Returns
    /// whether the handle was known.
    fn dispose(&mut self, handle: MeshHandle) -> bool;
}

// ---------------------------------------------------------------------------
// DisplayList
// ---------------------------------------------------------------------------

/// In-memory [`Scene`].
///
/// Tracks attached meshes, meshes that were removed but still hold
/// resources, and how many meshes have been disposed.
#[derive(Debug, Default)]
pub struct DisplayList {
    attached: FxHashMap<MeshHandle, Mesh>,
    detached: FxHashMap<MeshHandle, Mesh>,
    next_handle: u64,
    disposed: usize,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether the list changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Current generation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Attached mesh by handle.
    #[must_use]
    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.attached.get(&handle)
    }

    /// Whether `handle` is currently attached.
    #[must_use]
    pub fn contains(&self, handle: MeshHandle) -> bool {
        self.attached.contains_key(&handle)
    }

    /// Attached meshes, ordered by handle (insertion order).
    #[must_use]
    pub fn meshes(&self) -> Vec<(MeshHandle, &Mesh)> {
        let mut meshes: Vec<_> =
            self.attached.iter().map(|(h, m)| (*h, m)).collect();
        meshes.sort_unstable_by_key(|(h, _)| *h);
        meshes
    }

    /// Number of attached meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Attached atom spheres.
    #[must_use]
    pub fn sphere_count(&self) -> usize {
        self.attached.values().filter(|m| m.is_sphere()).count()
    }

    /// Attached bond cylinders.
    #[must_use]
    pub fn cylinder_count(&self) -> usize {
        self.len() - self.sphere_count()
    }

    /// Meshes still holding resources (attached or merely removed).
    #[must_use]
    pub fn live_resources(&self) -> usize {
        self.attached.len() + self.detached.len()
    }

    /// Total meshes disposed over the list's lifetime.
    #[must_use]
    pub fn disposed_count(&self) -> usize {
        self.disposed
    }
}

impl Scene for DisplayList {
    fn add(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;
        let _ = self.attached.insert(handle, mesh);
        self.invalidate();
        handle
    }

    fn remove(&mut self, handle: MeshHandle) -> bool {
        let Some(mesh) = self.attached.remove(&handle) else {
            return false;
        };
        let _ = self.detached.insert(handle, mesh);
        self.invalidate();
        true
    }

    fn dispose(&mut self, handle: MeshHandle) -> bool {
        let known = self.attached.remove(&handle).is_some()
            || self.detached.remove(&handle).is_some();
        if known {
            self.disposed += 1;
            self.invalidate();
        }
        known
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::Element;

    fn sphere() -> Mesh {
        Mesh::Sphere {
            center: Vec3::ZERO,
            radius: 0.4,
            color: [1.0; 3],
            element: Element::C,
        }
    }

    #[test]
    fn add_remove_dispose_lifecycle() {
        let mut list = DisplayList::new();
        let a = list.add(sphere());
        let b = list.add(sphere());
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);

        assert!(list.remove(a));
        assert!(!list.contains(a));
        assert_eq!(list.live_resources(), 2);

        assert!(list.dispose(a));
        assert!(list.dispose(b));
        assert_eq!(list.live_resources(), 0);
        assert_eq!(list.disposed_count(), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut list = DisplayList::new();
        assert!(!list.remove(MeshHandle(7)));
        assert!(!list.dispose(MeshHandle(7)));
        assert_eq!(list.disposed_count(), 0);
        assert!(!list.is_dirty());
    }

    #[test]
    fn generation_tracks_mutations() {
        let mut list = DisplayList::new();
        let h = list.add(sphere());
        assert!(list.is_dirty());
        list.mark_rendered();
        assert!(!list.is_dirty());
        let _ = list.dispose(h);
        assert!(list.is_dirty());
        assert_eq!(list.generation(), 2);
    }

    #[test]
    fn meshes_come_back_in_insertion_order() {
        let mut list = DisplayList::new();
        let handles: Vec<_> = (0..5).map(|_| list.add(sphere())).collect();
        let listed: Vec<_> =
            list.meshes().into_iter().map(|(h, _)| h).collect();
        assert_eq!(listed, handles);
    }
}
