use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
/// Interaction, idle-spin and projection parameters for the viewer session.
pub struct ViewerOptions {
    /// Radians of rotation per pixel of pointer drag.
    #[schemars(title = "Drag Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub drag_sensitivity: f32,
    /// Camera distance change per unit of scroll delta.
    #[schemars(title = "Zoom Sensitivity", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub zoom_sensitivity: f32,
    /// Idle rotation about x, radians per reference frame.
    #[schemars(title = "Idle Spin X", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub idle_spin_x: f32,
    /// Idle rotation about y, radians per reference frame.
    #[schemars(title = "Idle Spin Y", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub idle_spin_y: f32,
    /// Frame rate the idle spin is expressed against.
    #[schemars(skip)]
    pub reference_fps: f32,
    /// Closest allowed camera distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Camera distance for a fresh session.
    #[schemars(title = "Initial Distance", range(min = 5.0, max = 30.0), extend("step" = 0.5))]
    pub initial_distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.01,
            zoom_sensitivity: 0.01,
            idle_spin_x: 0.01,
            idle_spin_y: 0.01,
            reference_fps: 60.0,
            min_distance: 5.0,
            max_distance: 30.0,
            initial_distance: 15.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl ViewerOptions {
    /// Clamp a camera distance into `[min_distance, max_distance]`.
    ///
    /// A misconfigured range (min above max) collapses to `min_distance`,
    /// as does a NaN distance.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        if distance.is_nan() {
            return self.min_distance;
        }
        let max = self.max_distance.max(self.min_distance);
        distance.clamp(self.min_distance, max)
    }
}
