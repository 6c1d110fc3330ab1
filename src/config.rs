use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::blend::BlendMode;
use crate::color::PackedColor;
use crate::error::ConfigError;
use crate::gamma::{GammaTables, DEFAULT_GAMMA};
use crate::hex::parse_hex_color;

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

fn default_leds() -> u16 {
    120
}

fn default_gradient() -> Vec<String> {
    vec!["c83c46".into(), "fa6e97".into()]
}

const FIELDS: [&str; 4] = ["gamma", "leds", "mode", "gradient"];

/// Top-level fields absent from a config document.
fn missing_fields(document: &Value) -> Vec<&'static str> {
    FIELDS
        .into_iter()
        .filter(|field| document.get(*field).is_none())
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowConfig {
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default = "default_leds")]
    pub leds: u16,
    #[serde(default)]
    pub mode: BlendMode,
    /// Gradient stops as `rrggbb` strings.
    #[serde(default = "default_gradient")]
    pub gradient: Vec<String>,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            gamma: default_gamma(),
            leds: default_leds(),
            mode: BlendMode::default(),
            gradient: default_gradient(),
        }
    }
}

impl GlowConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Parse(format!("failed to read {}: {e}", path.display()))
        })?;
        let document: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("failed to parse JSON: {e}")))?;
        for field in missing_fields(&document) {
            warn!("{} has no `{field}`, using the default", path.display());
        }
        let config: GlowConfig = serde_json::from_value(document)
            .map_err(|e| ConfigError::Parse(format!("failed to parse JSON: {e}")))?;
        config.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "gamma must be a positive number, got {}",
                self.gamma
            )));
        }
        self.stops()?;
        Ok(())
    }

    pub fn stops(&self) -> Result<Vec<PackedColor>, ConfigError> {
        self.gradient
            .iter()
            .map(|stop| {
                parse_hex_color(stop)
                    .map_err(|e| ConfigError::Validation(format!("gradient stop {stop:?}: {e}")))
            })
            .collect()
    }

    /// Tables for the configured exponent.
    pub fn gamma_tables(&self) -> GammaTables {
        debug!(exponent = self.gamma, "building gamma tables from config");
        GammaTables::with_exponent(self.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_object_gives_defaults() {
        let file = write_config("{}");
        let config = GlowConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config, GlowConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let file = write_config(
            r##"{"gamma": 2.8, "leds": 30, "mode": "raw", "gradient": ["#000000", "FFFFFF"]}"##,
        );
        let config = GlowConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.gamma, 2.8);
        assert_eq!(config.leds, 30);
        assert_eq!(config.mode, BlendMode::Raw);
        assert_eq!(
            config.stops().unwrap(),
            vec![PackedColor::BLACK, PackedColor::WHITE]
        );
    }

    #[test]
    fn reports_fields_that_fall_back() {
        let document: Value = serde_json::from_str(r#"{"leds": 8, "mode": "raw"}"#).unwrap();
        assert_eq!(missing_fields(&document), vec!["gamma", "gradient"]);
        let full = serde_json::to_value(GlowConfig::default()).unwrap();
        assert!(missing_fields(&full).is_empty());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let file = write_config(r#"{"leds": 8}"#);
        let config = GlowConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.leds, 8);
        assert_eq!(config.gamma, DEFAULT_GAMMA);
        assert_eq!(config.mode, BlendMode::Gamma);
        assert_eq!(config.gradient, default_gradient());
    }

    #[test]
    fn saved_config_loads_back() {
        let config = GlowConfig {
            gamma: 2.5,
            leds: 60,
            mode: BlendMode::Raw,
            gradient: vec!["102030".into(), "405060".into(), "708090".into()],
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""mode":"raw""#));
        let file = write_config(&json);
        assert_eq!(GlowConfig::load_from_path(file.path()).unwrap(), config);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let file = write_config(r#"{"mode": "linear"}"#);
        assert!(matches!(
            GlowConfig::load_from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glowmix.json");
        assert!(matches!(
            GlowConfig::load_from_path(&path),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn malformed_json() {
        let file = write_config("{ leds: ");
        assert!(matches!(
            GlowConfig::load_from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_gamma() {
        let file = write_config(r#"{"gamma": 0}"#);
        assert!(matches!(
            GlowConfig::load_from_path(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn rejects_bad_stop() {
        let config = GlowConfig {
            gradient: vec!["c83c4".into()],
            ..GlowConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn default_exponent_matches_shared_tables() {
        assert_eq!(GlowConfig::default().gamma_tables(), GammaTables::new());
    }
}
