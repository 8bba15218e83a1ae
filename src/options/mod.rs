//! Viewer options with TOML file support.
//!
//! Viewport size, initial camera planes, overlay font, and the startup
//! scene are consolidated here. Options serialize to/from TOML so a
//! session can be described by a single file.

mod camera;
mod overlay;
mod scene;
mod viewport;

use std::path::Path;

pub use camera::CameraOptions;
pub use overlay::FontOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Viewport dimensions.
    pub viewport: ViewportOptions,
    /// Initial clipping planes and dolly step.
    pub camera: CameraOptions,
    /// Text overlay font.
    pub overlay: FontOptions,
    /// Startup scene.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ScenePreset;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
near_plane = 40.0

[scene]
preset = 'dust'
seed = 7
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.near_plane, 40.0);
        assert_eq!(opts.camera.far_plane, 200.0);
        assert_eq!(opts.camera.dolly_step, 10.0);
        assert_eq!(opts.scene.preset, ScenePreset::Dust);
        assert_eq!(opts.scene.seed, Some(7));
        assert_eq!(opts.viewport, ViewportOptions::default());
        assert_eq!(opts.overlay.family, "Helvetica");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join("bodyview-options-malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nnear_plane = ").unwrap();

        let result = Options::load(&path);
        assert!(matches!(result, Err(ViewerError::OptionsParse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("bodyview-does-not-exist.toml");
        assert!(matches!(Options::load(&path), Err(ViewerError::Io(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("bodyview-options-save");
        let path = dir.join("nested").join("session.toml");
        let mut opts = Options::default();
        opts.viewport.width = 1024;
        opts.scene.preset = ScenePreset::Ring;

        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("viewport"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("overlay"));
        assert!(props.contains_key("scene"));

        let overlay = &props["overlay"]["properties"];
        assert!(overlay.get("line_height").is_some());
        assert!(overlay.get("color").is_none());
    }
}
