//! Engine configuration resource.
//!
//! Manages engine settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! timestep = 0.016
//! time_scale = 1.0
//!
//! [arena]
//! width = 640
//! height = 360
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_ARENA_WIDTH: f32 = 640.0;
const DEFAULT_ARENA_HEIGHT: f32 = 360.0;
const DEFAULT_CONFIG_PATH: &str = "./engine.ini";

/// Engine configuration resource.
///
/// Stores the fixed simulation timestep, the global time scale and the
/// demo arena bounds. Missing keys in the file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    /// Fixed simulation step in seconds.
    pub timestep: f32,
    /// Multiplier applied to every step (1.0 = real time).
    pub time_scale: f32,
    /// Arena width in world units.
    pub arena_width: f32,
    /// Arena height in world units.
    pub arena_height: f32,
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
        EngineConfig {
            timestep: DEFAULT_TIMESTEP,
            time_scale: DEFAULT_TIME_SCALE,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        EngineConfig {
            config_path: path.into(),
            ..Self::new()
        }
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
        if let Some(timestep) = config.getfloat("simulation", "timestep").ok().flatten() {
            self.timestep = timestep as f32;
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        // [arena] section
        if let Some(width) = config.getfloat("arena", "width").ok().flatten() {
            self.arena_width = width as f32;
        }
        if let Some(height) = config.getfloat("arena", "height").ok().flatten() {
            self.arena_height = height as f32;
        }

        info!(
            "Loaded config: timestep={}s, time_scale={}, arena {}x{}",
            self.timestep, self.time_scale, self.arena_width, self.arena_height
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "timestep", Some(self.timestep.to_string()));
        config.set(
            "simulation",
            "time_scale",
            Some(self.time_scale.to_string()),
        );

        // [arena] section
        config.set("arena", "width", Some(self.arena_width.to_string()));
        config.set("arena", "height", Some(self.arena_height.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Arena bounds as (width, height).
    pub fn arena_size(&self) -> (f32, f32) {
        (self.arena_width, self.arena_height)
    }
}
