use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use super::core::Camera;
use crate::options::ViewerOptions;

/// Model rotation plus camera distance: the only state pointer input
/// mutates.
///
/// Rotation is three Euler-like angles in radians, accumulated
/// incrementally and applied in X, Y, Z order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Accumulated rotation about x, y, z (radians).
    pub rotation: Vec3,
    /// Camera distance from the model origin.
    pub distance: f32,
}

impl ViewTransform {
    /// Unrotated model at `distance`.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        Self {
            rotation: Vec3::ZERO,
            distance,
        }
    }

    /// Transform for a fresh session.
    #[must_use]
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self::new(options.clamp_distance(options.initial_distance))
    }

    /// Add `delta` radians to the rotation angles.
    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    /// Apply a pointer drag: horizontal delta → yaw (y), vertical → pitch
    /// (x).
    pub fn drag(&mut self, pointer_delta: Vec2, sensitivity: f32) {
        self.rotate(Vec3::new(
            pointer_delta.y * sensitivity,
            pointer_delta.x * sensitivity,
            0.0,
        ));
    }

    /// Move the camera by `delta * sensitivity`, clamped to the configured
    /// distance range. Non-finite deltas are ignored.
    pub fn zoom(&mut self, delta: f32, options: &ViewerOptions) {
        if !delta.is_finite() {
            return;
        }
        self.distance = options
            .clamp_distance(self.distance + delta * options.zoom_sensitivity);
    }

    /// Rotation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix rotating the molecule about its origin.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation())
    }

    /// Camera looking at the model from the current distance.
    #[must_use]
    pub fn camera(&self, aspect: f32, options: &ViewerOptions) -> Camera {
        Camera::looking_at_origin(self.distance, aspect, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_maps_axes() {
        let mut view = ViewTransform::new(15.0);
        view.drag(Vec2::new(10.0, -4.0), 0.01);
        assert!((view.rotation.y - 0.1).abs() < 1e-6);
        assert!((view.rotation.x + 0.04).abs() < 1e-6);
        assert_eq!(view.rotation.z, 0.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let options = ViewerOptions::default();
        let mut view = ViewTransform::from_options(&options);
        view.zoom(1.0e6, &options);
        assert_eq!(view.distance, 30.0);
        view.zoom(-1.0e6, &options);
        assert_eq!(view.distance, 5.0);
        view.zoom(f32::NAN, &options);
        assert_eq!(view.distance, 5.0);
    }

    #[test]
    fn camera_sits_at_view_distance() {
        let options = ViewerOptions::default();
        let mut view = ViewTransform::from_options(&options);
        view.zoom(-300.0, &options);
        let camera = view.camera(1.5, &options);
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, view.distance));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.aspect, 1.5);
        assert_eq!(camera.fovy, options.fovy);
    }

    #[test]
    fn model_matrix_matches_orientation() {
        let mut view = ViewTransform::new(10.0);
        view.rotate(Vec3::new(0.3, -1.2, 0.7));
        let p = Vec3::new(1.0, 2.0, 3.0);
        let a = view.model_matrix().transform_point3(p);
        let b = view.orientation() * p;
        assert!((a - b).length() < 1e-5);
    }
}
