use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport size in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
pub struct ViewportOptions {
    /// Width in pixels.
    #[schemars(range(min = 1))]
    pub width: u32,
    /// Height in pixels.
    #[schemars(range(min = 1))]
    pub height: u32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
