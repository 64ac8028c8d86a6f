//! Backdrop configuration.
//!
//! Every tunable of the backdrop in one serializable struct. Missing fields
//! in a JSON file take their defaults, so `{}` is a valid config.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::field::FieldSettings;
use crate::surface::Viewport;
use crate::visuals::rgba8;

fn default_speed() -> f32 {
    1.0
}

/// Native window settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Color behind the translucent backdrop (RGBA, 0.0-1.0).
    pub base_color: Vec4,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Java Learning Journey".into(),
            width: 1280,
            height: 720,
            // teal-900
            base_color: rgba8(19, 78, 74, 1.0),
        }
    }
}

impl WindowSettings {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

/// Complete backdrop configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BackdropConfig {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub field: FieldSettings,
    /// Animation speed multiplier (1.0 = normal).
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Fixed RNG seed; `None` picks a new layout every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            field: FieldSettings::default(),
            speed: default_speed(),
            seed: None,
        }
    }
}

impl BackdropConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = BackdropConfig::from_json("{}").unwrap();
        assert_eq!(config, BackdropConfig::default());
        assert_eq!(config.field.particles.count, 100);
        assert_eq!(config.field.waves.count, 5);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let json = r#"{
            "seed": 7,
            "field": { "particles": { "count": 250 }, "waves": { "amplitude": 35.0 } }
        }"#;
        let config = BackdropConfig::from_json(json).unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.field.particles.count, 250);
        assert_eq!(config.field.particles.min_size, 0.2);
        assert_eq!(config.field.waves.amplitude, 35.0);
        assert_eq!(config.field.waves.step, 20.0);
        assert_eq!(config.speed, 1.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("backdrop-config-{}.json", std::process::id()));
        let mut config = BackdropConfig::default();
        config.window.title = "Saved".into();
        config.speed = 0.5;

        config.save(&path).unwrap();
        let loaded = BackdropConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(BackdropConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
        assert!(matches!(
            BackdropConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_window_viewport() {
        let mut window = WindowSettings::default();
        window.width = 640;
        window.height = 360;
        assert_eq!(window.viewport(), Viewport::new(640.0, 360.0));
    }
}
