//! Viewer session: owns the live scene and the view transform.
//!
//! The session is a two-state machine, `Empty` → `Loaded`, where loading a
//! different molecule disposes every mesh of the outgoing one before the
//! incoming one is attached. Pointer input mutates only the
//! [`ViewTransform`]; geometry is immutable once built.

mod command;

pub use command::ViewerCommand;
use glam::{Vec2, Vec3};

use crate::camera::ViewTransform;
use crate::options::{ColorOptions, Options, ViewerOptions};
use crate::registry::{MoleculeInfo, MoleculeRegistry, RegistryEntry};
use crate::scene::{meshes_for, MeshHandle, Scene};

/// Whether a molecule is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded yet (or explicitly unloaded).
    Empty,
    /// A molecule's meshes are attached to the scene.
    Loaded,
}

/// Transform captured for a saved view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Registry id of the displayed molecule.
    pub molecule: String,
    /// Rotation angles (radians).
    pub rotation: Vec3,
    /// Camera distance.
    pub zoom: f32,
}

impl ViewSnapshot {
    /// Whether every rotation angle and the zoom are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.zoom.is_finite()
    }
}

/// The molecule currently in the scene.
#[derive(Debug)]
struct Loaded<'r> {
    entry: &'r RegistryEntry,
    handles: Vec<MeshHandle>,
}

#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    dragging: bool,
    last: Vec2,
}

/// Interactive session over a [`Scene`].
///
/// The scene is exclusively owned here; other components only read it
/// through [`scene`](Self::scene).
#[derive(Debug)]
pub struct ViewerSession<'r, S: Scene> {
    registry: &'r MoleculeRegistry,
    scene: S,
    options: ViewerOptions,
    colors: ColorOptions,
    loaded: Option<Loaded<'r>>,
    view: ViewTransform,
    drag: DragState,
}

impl<'r, S: Scene> ViewerSession<'r, S> {
    /// Empty session with default options.
    pub fn new(registry: &'r MoleculeRegistry, scene: S) -> Self {
        Self::with_options(registry, scene, &Options::default())
    }

    /// Empty session with explicit viewer options and palette.
    pub fn with_options(
        registry: &'r MoleculeRegistry,
        scene: S,
        options: &Options,
    ) -> Self {
        Self {
            registry,
            scene,
            options: options.viewer.clone(),
            colors: options.colors.clone(),
            loaded: None,
            view: ViewTransform::from_options(&options.viewer),
            drag: DragState::default(),
        }
    }

    // -- Accessors --

    /// `Empty` or `Loaded`.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.loaded.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    /// Id of the displayed molecule.
    #[must_use]
    pub fn current_id(&self) -> Option<&'static str> {
        self.loaded.as_ref().map(|l| l.entry.id())
    }

    /// Metadata of the displayed molecule.
    #[must_use]
    pub fn current(&self) -> Option<&'r MoleculeInfo> {
        self.loaded.as_ref().map(|l| l.entry).map(|e| &e.info)
    }

    /// Handles of the displayed molecule's meshes.
    #[must_use]
    pub fn mesh_handles(&self) -> &[MeshHandle] {
        self.loaded
            .as_ref()
            .map(|l| l.handles.as_slice())
            .unwrap_or_default()
    }

    /// Current rotation and camera distance.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Read access to the scene.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Tear down the session and hand back the scene.
    pub fn into_scene(mut self) -> S {
        self.unload();
        self.scene
    }

    // -- Molecule lifecycle --

    /// Switch to molecule `id`.
    ///
    /// Unknown ids leave the current display untouched and return `false`.
    /// Otherwise every mesh of the outgoing molecule is disposed before the
    /// new molecule's meshes are added, the rotation is reset and drag
    /// state cleared.
    pub fn load(&mut self, id: &str) -> bool {
        let registry = self.registry;
        let Some(entry) = registry.get(id) else {
            log::warn!("molecule '{id}' not found; keeping current display");
            return false;
        };
        let group = entry.build();

        self.unload();

        let handles: Vec<MeshHandle> = meshes_for(&group, &self.colors)
            .into_iter()
            .map(|mesh| self.scene.add(mesh))
            .collect();
        log::debug!(
            "attached {} meshes for '{}' ({} atoms, {} bonds)",
            handles.len(),
            entry.id(),
            group.atom_count(),
            group.bond_count()
        );
        log::info!("now showing {}", entry.info.title);

        self.loaded = Some(Loaded { entry, handles });
        self.view.rotation = Vec3::ZERO;
        self.drag = DragState::default();
        true
    }

    /// Dispose every mesh of the current molecule and return to `Empty`.
    pub fn unload(&mut self) {
        let Some(loaded) = self.loaded.take() else {
            return;
        };
        let mut disposed = 0usize;
        for handle in loaded.handles {
            if self.scene.dispose(handle) {
                disposed += 1;
            }
        }
        log::debug!("disposed {disposed} meshes of '{}'", loaded.entry.id());
        self.drag = DragState::default();
    }

    // -- Interaction --

    /// Start a drag at a pointer position. Non-finite positions are
    /// ignored.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.drag = DragState {
            dragging: true,
            last: Vec2::new(x, y),
        };
    }

    /// Rotate by the pointer delta since the last recorded position.
    ///
    /// No-op unless a drag is active and a molecule is loaded, or when the
    /// position is not finite.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        let pointer = Vec2::new(x, y);
        if !self.drag.dragging || self.loaded.is_none() || !pointer.is_finite()
        {
            return;
        }
        self.view
            .drag(pointer - self.drag.last, self.options.drag_sensitivity);
        self.drag.last = pointer;
    }

    /// Stop dragging; idle rotation resumes on the next tick.
    pub fn end_drag(&mut self) {
        self.drag.dragging = false;
    }

    /// Adjust camera distance, clamped to the configured range. Allowed in
    /// any state. Non-finite deltas are ignored.
    pub fn scroll_zoom(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.view.zoom(delta_y, &self.options);
    }

    /// Advance idle rotation by `dt` seconds.
    ///
    /// Only applies while a molecule is loaded and no drag is active. The
    /// per-frame spin is scaled so one reference frame advances it exactly
    /// once.
    pub fn tick(&mut self, dt: f32) {
        if self.drag.dragging
            || self.loaded.is_none()
            || !dt.is_finite()
            || dt <= 0.0
        {
            return;
        }
        let frames = dt * self.options.reference_fps;
        self.view.rotate(Vec3::new(
            self.options.idle_spin_x * frames,
            self.options.idle_spin_y * frames,
            0.0,
        ));
    }

    // -- Saved views --

    /// Capture the displayed molecule and transform; `None` when empty.
    #[must_use]
    pub fn snapshot(&self) -> Option<ViewSnapshot> {
        let id = self.current_id()?;
        Some(ViewSnapshot {
            molecule: id.to_owned(),
            rotation: self.view.rotation,
            zoom: self.view.distance,
        })
    }

    /// Load the snapshot's molecule, then apply its rotation and zoom.
    ///
    /// The transform is applied only after the new geometry is attached.
    /// An unknown molecule or a non-finite transform leaves everything
    /// unchanged and returns `false`. The zoom is clamped to the configured
    /// distance range.
    pub fn restore(&mut self, view: &ViewSnapshot) -> bool {
        if !view.is_finite() {
            log::warn!("ignoring saved view with a non-finite transform");
            return false;
        }
        if !self.load(&view.molecule) {
            return false;
        }
        self.view.rotation = view.rotation;
        self.view.distance = self.options.clamp_distance(view.zoom);
        true
    }

    /// Dispatch a command.
    pub fn execute(&mut self, cmd: ViewerCommand) {
        match cmd {
            ViewerCommand::Load { id } => {
                let _ = self.load(&id);
            }
            ViewerCommand::BeginDrag { x, y } => self.begin_drag(x, y),
            ViewerCommand::DragTo { x, y } => self.drag_to(x, y),
            ViewerCommand::EndDrag => self.end_drag(),
            ViewerCommand::Zoom { delta } => self.scroll_zoom(delta),
            ViewerCommand::Unload => self.unload(),
        }
    }
}
