use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::ScenePreset;

/// Which bodies populate the scene at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Preset used to build the initial bodies.
    pub preset: ScenePreset,
    /// Body count for the randomized and ring presets.
    #[schemars(range(min = 1, max = 10000))]
    pub count: usize,
    /// RNG seed for the randomized presets; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            preset: ScenePreset::ParticleStream,
            count: 20,
            seed: None,
        }
    }
}
