//! Engine configuration resource.
//!
//! Manages engine settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! tick_rate = 60
//! time_scale = 1.0
//!
//! [assets]
//! archetypes = ./assets/archetypes.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_ARCHETYPE_PATH: &str = "./assets/archetypes.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration resource.
///
/// Stores simulation timing and asset paths. Values missing from the file
/// keep their defaults, so an absent file is not an error for callers that
/// ignore the result.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    /// Fixed simulation ticks per second.
    pub tick_rate: u32,
    /// Multiplier applied to every tick's delta.
    pub time_scale: f32,
    /// Path to the archetype definitions file.
    pub archetype_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            time_scale: DEFAULT_TIME_SCALE,
            archetype_path: PathBuf::from(DEFAULT_ARCHETYPE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Fixed tick delta in seconds derived from the tick rate.
    pub fn tick_delta(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [simulation] section
        if let Some(tick_rate) = config.getuint("simulation", "tick_rate").ok().flatten() {
            self.tick_rate = tick_rate as u32;
        }
        if let Some(time_scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = time_scale as f32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "archetypes") {
            self.archetype_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: tick_rate={}, time_scale={}, archetypes={:?}",
            self.tick_rate, self.time_scale, self.archetype_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "tick_rate", Some(self.tick_rate.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        // [assets] section
        config.set(
            "assets",
            "archetypes",
            Some(self.archetype_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = EngineConfig::new();
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(config.time_scale, DEFAULT_TIME_SCALE);
        assert!((config.tick_delta() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = EngineConfig::with_path("/nonexistent/limelight.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(config.time_scale, DEFAULT_TIME_SCALE);
    }

    #[test]
    fn tick_delta_survives_zero_tick_rate() {
        let mut config = EngineConfig::new();
        config.tick_rate = 0;
        assert_eq!(config.tick_delta(), 1.0);
    }
}
