use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "SKETCH_GRID_CONFIG";

/// Smallest grid a config may allow
pub const MIN_GRID_SIZE: usize = 1;

/// Largest grid a config may allow
pub const MAX_GRID_SIZE: usize = 100;

/// Board settings. Colors are written as hex strings in the file and parsed
/// once when it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct SketchConfig {
    /// Grid size at startup
    pub default_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    /// Pen color
    #[serde(with = "hex_color")]
    pub ink: Color32,
    /// Board background, also used by the eraser and clear
    #[serde(with = "hex_color")]
    pub paper: Color32,
    /// Transition the eraser attaches to cells, in milliseconds
    pub eraser_transition_ms: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            default_size: 16,
            min_size: 1,
            max_size: 100,
            ink: color::INK,
            paper: color::PAPER,
            eraser_transition_ms: 150,
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from [`CONFIG_ENV`] if it is set, otherwise use the defaults.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::info!("Loading config from {}", path.to_string_lossy());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_size < MIN_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "min_size must be at least {MIN_GRID_SIZE}"
            )));
        }
        if self.max_size > MAX_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_size {} is larger than {MAX_GRID_SIZE}",
                self.max_size
            )));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "min_size {} is larger than max_size {}",
                self.min_size, self.max_size
            )));
        }
        if !(self.min_size..=self.max_size).contains(&self.default_size) {
            return Err(ConfigError::Invalid(format!(
                "default_size {} is outside {}..={}",
                self.default_size, self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    /// Eraser transition in seconds
    pub fn eraser_transition(&self) -> f32 {
        self.eraser_transition_ms as f32 / 1000.0
    }
}

/// `#rrggbb` strings on disk, [`Color32`] in memory
mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::color;

    pub fn serialize<S: Serializer>(value: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color::to_hex(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let text = String::deserialize(deserializer)?;
        color::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SketchConfig::default();
        assert_eq!(config.default_size, 16);
        assert_eq!((config.min_size, config.max_size), (1, 100));
        assert_eq!(config.ink, color::INK);
        assert_eq!(config.paper, color::PAPER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SketchConfig::from_json(r#"{ "default_size": 32 }"#).unwrap();
        assert_eq!(config.default_size, 32);
        assert_eq!(config.max_size, 100);
        assert_eq!(config.eraser_transition_ms, 150);
    }

    #[test]
    fn test_colors_parse_once_on_load() {
        let config = SketchConfig::from_json(r##"{ "ink": "#ff0000", "paper": "#fff" }"##).unwrap();
        assert_eq!(config.ink, Color32::RED);
        assert_eq!(config.paper, Color32::WHITE);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r##""ink":"#ff0000""##));
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        assert!(matches!(
            SketchConfig::from_json(r#"{ "default_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "min_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "max_size": 1000, "default_size": 300 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "max_size": 101 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "ink": "black" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SketchConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
