//! Game configuration loaded from an external RON file.
//!
//! Only feel and presentation tunables live here. Gameplay constants stay
//! next to the code that uses them.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/config.ron";

/// Window settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wraith".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Spring/friction constants for the follow camera.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Fraction of the remaining distance requested per normalized frame
    pub follow_speed: f32,
    /// How quickly velocity blends toward the requested velocity (0..=1)
    pub acceleration: f32,
    /// Velocity cap in world units per normalized frame
    pub max_speed: f32,
    /// Per-frame velocity retention (0..1)
    pub friction: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_speed: 0.08,
            acceleration: 0.2,
            max_speed: 24.0,
            friction: 0.85,
        }
    }
}

/// Player feel settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerFeelConfig {
    /// Ticks of standing still before the blink idle plays
    pub idle_blink_threshold: u32,
}

impl Default for PlayerFeelConfig {
    fn default() -> Self {
        Self {
            idle_blink_threshold: 240,
        }
    }
}

/// Volume settings, each in 0.0..=1.0.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub master_volume: f32,
    pub sfx_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DebugConfig {
    pub show_hitboxes: bool,
}

/// Top-level config resource.
#[derive(Resource, Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub player: PlayerFeelConfig,
    pub audio: AudioConfig,
    pub debug: DebugConfig,
}

impl GameConfig {
    /// Load and sanitize a config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::NotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron(&contents, &display)
    }

    /// Parse config text. `origin` only labels errors.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })?;

        if config.window.width <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "window.width",
                value: config.window.width,
            });
        }
        if config.window.height <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "window.height",
                value: config.window.height,
            });
        }

        Ok(config.sanitized())
    }

    /// Load the default config file, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(ConfigError::NotFound(path)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values instead of rejecting the whole file.
    pub fn sanitized(mut self) -> Self {
        self.audio.master_volume = clamp_logged("audio.master_volume", self.audio.master_volume, 0.0, 1.0);
        self.audio.sfx_volume = clamp_logged("audio.sfx_volume", self.audio.sfx_volume, 0.0, 1.0);
        self.camera.follow_speed = clamp_logged("camera.follow_speed", self.camera.follow_speed, 0.001, 1.0);
        self.camera.acceleration = clamp_logged("camera.acceleration", self.camera.acceleration, 0.001, 1.0);
        self.camera.max_speed = clamp_logged("camera.max_speed", self.camera.max_speed, 1.0, 200.0);
        self.camera.friction = clamp_logged("camera.friction", self.camera.friction, 0.0, 0.999);
        self
    }

    /// Effective multiplier for sound effects.
    pub fn effects_volume(&self) -> f32 {
        self.audio.master_volume * self.audio.sfx_volume
    }
}

fn clamp_logged(field: &str, value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        warn!("{} is NaN, using {}", field, min);
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} = {} out of range, clamped to {}", field, value, clamped);
    }
    clamped
}
