use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Overlay Font", inline)]
#[serde(default)]
/// Font and spacing for the top-left text overlay.
pub struct FontOptions {
    /// Font family name handed to the backend.
    pub family: String,
    /// Point size.
    #[schemars(range(min = 1))]
    pub size: u32,
    /// Style keyword (e.g. `normal`, `bold`).
    pub style: String,
    /// RGBA text color.
    #[schemars(skip)]
    pub color: [f32; 4],
    /// Line height as a multiple of the font size.
    #[schemars(title = "Line Height", range(min = 0.5, max = 4.0), extend("step" = 0.1))]
    pub line_height: f64,
    /// Margin from the viewport edges, in percent of width/height.
    #[schemars(title = "Padding (%)", range(min = 0, max = 50))]
    pub padding_percent: u32,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_owned(),
            size: 12,
            style: "normal".to_owned(),
            color: [1.0, 1.0, 1.0, 1.0],
            line_height: 1.5,
            padding_percent: 2,
        }
    }
}
