use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{DEFAULT_FAR_PLANE, DEFAULT_NEAR_PLANE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial clipping planes and dolly step.
pub struct CameraOptions {
    /// Near clipping plane distance at session start.
    #[schemars(title = "Near Plane", range(min = 0.0))]
    pub near_plane: f64,
    /// Far clipping plane distance at session start.
    #[schemars(title = "Far Plane", range(min = 0.0))]
    pub far_plane: f64,
    /// Plane shift per scroll-wheel line.
    #[schemars(title = "Dolly Step", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub dolly_step: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            dolly_step: 10.0,
        }
    }
}
