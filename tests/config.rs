use std::path::Path;

use figment::Jail;
use pretty_assertions::assert_eq;
use roommap::config::{load_config, Config, LayoutConfig};
use roommap::constants::{DEFAULT_LOG_FILTER, ROOM_SPACING};
use roommap::error::ConfigError;
use speculoos::prelude::*;

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.layout.spacing, ROOM_SPACING);
        Ok(())
    });
}

#[test]
fn test_env_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("ROOMMAP_LOG_FILTER", "roommap=trace");
        jail.set_env("ROOMMAP_LAYOUT__SPACING", "3");
        jail.set_env("ROOMMAP_LAYOUT__UNEXPLORED_PASSAGES", "true");

        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.log_filter, "roommap=trace");
        assert_eq!(config.layout.spacing, 3.0);
        assert!(config.layout.unexplored_passages);
        assert_eq!(config.layout.passage_fill, LayoutConfig::default().passage_fill);
        Ok(())
    });
}

#[test]
fn test_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "roommap.toml",
            r#"
                log_filter = "debug"

                [layout]
                spacing = 4.0
                passage_thickness = 0.5
            "#,
        )?;

        let config = load_config(Some(Path::new("roommap.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.layout.spacing, 4.0);
        assert_eq!(config.layout.passage_thickness, 0.5);
        assert_eq!(config.layout.room_size, LayoutConfig::default().room_size);
        Ok(())
    });
}

#[test]
fn test_env_beats_file() {
    Jail::expect_with(|jail| {
        jail.create_file("roommap.toml", "[layout]\nspacing = 4.0\n")?;
        jail.set_env("ROOMMAP_LAYOUT__SPACING", "5");

        let config = load_config(Some(Path::new("roommap.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(config.layout.spacing, 5.0);
        Ok(())
    });
}

#[test]
fn test_invalid_geometry_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ROOMMAP_LAYOUT__PASSAGE_FILL", "1.5");

        let result = load_config(None);
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("passage_fill")));
        Ok(())
    });
}

#[test]
fn test_wrong_type_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("ROOMMAP_LAYOUT__SPACING", "wide");

        let result = load_config(None);
        assert_that(&matches!(result, Err(ConfigError::Load(_)))).is_true();
        Ok(())
    });
}
