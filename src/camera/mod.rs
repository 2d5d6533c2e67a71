//! Camera system for viewing a single molecule.
//!
//! The molecule rotates about its origin while the camera stays on the +Z
//! axis; only the [`ViewTransform`] changes in response to input.

/// Model rotation and camera distance.
pub mod controller;
/// Perspective camera and projection helpers.
pub mod core;

pub use controller::ViewTransform;
pub use self::core::Camera;
