//! Converts raw pointer events into viewer commands.
//!
//! The `InputProcessor` owns the transient pointer state (cursor position,
//! whether the primary button is held). It is the only thing that sits
//! between raw window events and
//! [`ViewerSession::execute`](crate::viewer::ViewerSession::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::viewer::ViewerCommand;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```
/// # use biolab::input::{InputEvent, InputProcessor, MouseButton};
/// # use biolab::registry::MoleculeRegistry;
/// # use biolab::scene::DisplayList;
/// # use biolab::viewer::ViewerSession;
/// # let registry = MoleculeRegistry::standard();
/// # let mut session = ViewerSession::new(&registry, DisplayList::new());
/// let mut input = InputProcessor::new();
/// let press = InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// };
/// if let Some(cmd) = input.handle_event(press) {
///     session.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last known cursor position in pixels.
    cursor: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with the button released.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                self.mouse_pressed.then_some(ViewerCommand::DragTo { x, y })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta_y } => {
                Some(ViewerCommand::Zoom { delta: delta_y })
            }
            InputEvent::CursorLeft => self.release(),
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.mouse_pressed = true;
            return Some(ViewerCommand::BeginDrag {
                x: self.cursor.x,
                y: self.cursor.y,
            });
        }
        self.release()
    }

    /// Release or leave: end a drag only if one was in progress.
    fn release(&mut self) -> Option<ViewerCommand> {
        let was_pressed = std::mem::take(&mut self.mouse_pressed);
        was_pressed.then_some(ViewerCommand::EndDrag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn press_move_release_is_a_drag() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 4.0, y: 5.0 }),
            None
        );
        assert_eq!(input.cursor(), Vec2::new(4.0, 5.0));
        assert_eq!(
            input.handle_event(left(true)),
            Some(ViewerCommand::BeginDrag { x: 4.0, y: 5.0 })
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 9.0, y: 1.0 }),
            Some(ViewerCommand::DragTo { x: 9.0, y: 1.0 })
        );
        assert_eq!(input.cursor(), Vec2::new(9.0, 1.0));
        assert_eq!(
            input.handle_event(left(false)),
            Some(ViewerCommand::EndDrag)
        );
        assert!(!input.mouse_pressed());
    }

    #[test]
    fn leaving_viewport_ends_drag_once() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(left(true));
        assert_eq!(
            input.handle_event(InputEvent::CursorLeft),
            Some(ViewerCommand::EndDrag)
        );
        assert_eq!(input.handle_event(InputEvent::CursorLeft), None);
        assert_eq!(input.handle_event(left(false)), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputProcessor::new();
        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        };
        assert_eq!(input.handle_event(right), None);
        assert!(!input.mouse_pressed());
    }

    #[test]
    fn scroll_always_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta_y: -3.0 }),
            Some(ViewerCommand::Zoom { delta: -3.0 })
        );
    }
}
