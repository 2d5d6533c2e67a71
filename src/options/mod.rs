//! Runtime options with TOML preset support.
//!
//! Interaction tuning, kinetics ranges and the color palette live here.
//! Options serialize to/from TOML so presets can be kept as files.

mod colors;
mod kinetics;
mod viewer;

use std::path::Path;

pub use colors::ColorOptions;
pub use kinetics::{FieldRange, FitGrid, KineticsOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::error::LabError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[viewer]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Viewer interaction and projection parameters.
    pub viewer: ViewerOptions,
    /// Kinetics lab ranges, noise and fit grid.
    pub kinetics: KineticsOptions,
    /// Atom and bond color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LabError> {
        let content = std::fs::read_to_string(path).map_err(LabError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| LabError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LabError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LabError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LabError::Io)?;
        }
        std::fs::write(path, content).map_err(LabError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Element;

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
[viewer]
drag_sensitivity = 0.02
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.viewer.drag_sensitivity, 0.02);
        // Everything else should be default
        assert_eq!(opts.viewer.max_distance, 30.0);
        assert_eq!(opts.kinetics.noise_fraction, 0.08);
    }

    #[test]
    fn element_color_override() {
        let toml_str = r"
[colors.elements]
C = [0.1, 0.1, 0.1]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.colors.element(Element::C), [0.1, 0.1, 0.1]);
        assert_eq!(opts.colors.element(Element::O), Element::O.default_color());
    }

    #[test]
    fn default_fit_grid_matches_declared_bounds() {
        let grid = FitGrid::default();
        assert_eq!(grid.km_values().count(), 500);
        assert_eq!(grid.vmax_values().count(), 200);
        assert_eq!(grid.vmax_values().last(), Some(996.0));
        assert_eq!(grid.size(), 100_000);
    }

    #[test]
    fn distance_clamp_uses_configured_bounds() {
        let viewer = ViewerOptions::default();
        assert_eq!(viewer.clamp_distance(100.0), 30.0);
        assert_eq!(viewer.clamp_distance(-3.0), 5.0);
        assert_eq!(viewer.clamp_distance(12.5), 12.5);
        assert_eq!(viewer.clamp_distance(f32::NAN), 5.0);
        assert_eq!(viewer.clamp_distance(f32::INFINITY), 30.0);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("biolab-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.viewer.idle_spin_y = 0.0;
        opts.save(&dir.join("still.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["still".to_owned()]);
        let loaded = Options::load(&dir.join("still.toml")).unwrap();
        assert_eq!(loaded, opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let dir = std::env::temp_dir()
            .join(format!("biolab-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[viewer\nfovy = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(LabError::OptionsParse(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("viewer"));
        assert!(props.contains_key("kinetics"));
        assert!(!props.contains_key("colors"));

        let viewer = &props["viewer"]["properties"];
        assert!(viewer.get("drag_sensitivity").is_some());
        assert!(viewer.get("fovy").is_some());
        assert!(viewer.get("reference_fps").is_none());

        let kinetics = &props["kinetics"]["properties"];
        assert!(kinetics.get("noise_fraction").is_some());
        assert!(kinetics.get("grid").is_none());
    }
}
