//! The viewer session's interactive vocabulary.
//!
//! Pointer gestures, menu selections and programmatic calls are all
//! expressed as a `ViewerCommand` and handed to
//! [`ViewerSession::execute`](super::ViewerSession::execute).

/// A single viewer operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    /// Switch to the molecule with this registry id.
    Load {
        /// Registry identifier.
        id: String,
    },
    /// Primary button pressed at a pointer position.
    BeginDrag {
        /// Pointer x in pixels.
        x: f32,
        /// Pointer y in pixels.
        y: f32,
    },
    /// Pointer moved while the button may be held.
    DragTo {
        /// Pointer x in pixels.
        x: f32,
        /// Pointer y in pixels.
        y: f32,
    },
    /// Button released or pointer left the viewport.
    EndDrag,
    /// Scroll-wheel zoom.
    Zoom {
        /// Scroll delta (positive moves the camera away).
        delta: f32,
    },
    /// Remove the current molecule from the scene.
    Unload,
}
