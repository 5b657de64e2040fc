use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_LOG_FILTER, PASSAGE_FILL, PASSAGE_THICKNESS, ROOM_SIZE, ROOM_SPACING,
};
use crate::error::ConfigError;

/// Geometry used by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between orthogonally adjacent rooms, per unit of draw distance
    pub spacing: f32,
    /// Fraction of the room-to-room distance a passage spans
    pub passage_fill: f32,
    /// Width and depth of a passage marker
    pub passage_thickness: f32,
    /// Edge length of a room cube
    pub room_size: f32,
    /// Also lay out passages that lead from a placed room to an unvisited one
    pub unexplored_passages: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            spacing: ROOM_SPACING,
            passage_fill: PASSAGE_FILL,
            passage_thickness: PASSAGE_THICKNESS,
            room_size: ROOM_SIZE,
            unexplored_passages: false,
        }
    }
}

impl LayoutConfig {
    /// Rejects geometry the layout engine cannot draw sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spacing", self.spacing),
            ("passage_thickness", self.passage_thickness),
            ("room_size", self.room_size),
        ];
        if let Some((field, value)) = positive.iter().find(|(_, value)| !(value.is_finite() && *value > 0.0)) {
            return Err(ConfigError::Invalid(format!("layout.{field} must be positive, got {value}")));
        }
        if !(self.passage_fill > 0.0 && self.passage_fill <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "layout.passage_fill must be in (0, 1], got {}",
                self.passage_fill
            )));
        }
        Ok(())
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Layout geometry
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Builds the provider stack: defaults, then the optional TOML file, then `ROOMMAP_*` variables.
///
/// Nested keys use a double underscore, so `ROOMMAP_LAYOUT__SPACING=3` sets `layout.spacing`.
pub fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = path {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"))
}

pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config: Config = figment(path).extract()?;
    config.layout.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let config = LayoutConfig {
            spacing: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("spacing")));

        let config = LayoutConfig {
            passage_fill: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("passage_fill")));

        let config = LayoutConfig {
            room_size: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
