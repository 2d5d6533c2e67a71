/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::viewer::ViewerCommand)
/// values.
///
/// # Example
///
/// ```
/// # use biolab::input::{InputEvent, InputProcessor};
/// let mut input = InputProcessor::new();
/// let cmd = input.handle_event(InputEvent::Scroll { delta_y: 120.0 });
/// assert!(cmd.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, browser convention (positive = away from the model).
    Scroll {
        /// Vertical scroll amount.
        delta_y: f32,
    },
    /// Cursor left the viewport.
    CursorLeft,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
