//! Input handling: event types and the processor that converts raw
//! pointer events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
