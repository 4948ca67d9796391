//! Scene configuration with JSON file support.
//!
//! Every tunable constant of the walk-through (window, camera, tree layout,
//! clouds, lighting, texture files) lives here. All sub-structs use
//! `#[serde(default)]` so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::layout::CloudDescriptor;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub layout: LayoutConfig,
    pub clouds: CloudConfig,
    pub lighting: LightingConfig,
    pub textures: TextureConfig,
}

impl SceneConfig {
    /// Load and validate a JSON config file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the camera, clouds or renderer cannot work with.
    /// Tree layout parameters are checked by the generator itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        if !(self.window.near > 0.0 && self.window.far > self.window.near) {
            return invalid(format!(
                "clip planes need 0 < near < far, got near={} far={}",
                self.window.near, self.window.far
            ));
        }
        if !(self.window.fov_y_degrees > 0.0 && self.window.fov_y_degrees < 180.0) {
            return invalid(format!("fov_y_degrees out of range: {}", self.window.fov_y_degrees));
        }
        if !(self.camera.pitch_min <= self.camera.pitch_max) {
            return invalid(format!(
                "pitch bounds inverted: min={} max={}",
                self.camera.pitch_min, self.camera.pitch_max
            ));
        }
        if !(self.camera.pitch_min > -90.0 && self.camera.pitch_max < 90.0) {
            return invalid("pitch bounds must stay strictly inside (-90, 90)".to_string());
        }
        if !(self.camera.mouse_sensitivity > 0.0) {
            return invalid(format!(
                "mouse_sensitivity must be positive, got {}",
                self.camera.mouse_sensitivity
            ));
        }
        if !self.camera.movement_speed.is_finite() {
            return invalid("movement_speed must be finite".to_string());
        }
        if !(self.clouds.period > 0.0 && self.clouds.period.is_finite()) {
            return invalid(format!("cloud period must be positive, got {}", self.clouds.period));
        }
        if !self.clouds.speed.is_finite() {
            return invalid("cloud speed must be finite".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Sky color
    pub clear_color: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Escena Azteca Diurna 3D".to_string(),
            width: 1280,
            height: 720,
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 400.0,
            clear_color: [0.53, 0.81, 0.98],
        }
    }
}

/// How keyboard movement relates to frame time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    /// `movement_speed` units every frame; speed depends on frame rate.
    #[default]
    PerFrame,
    /// `movement_speed` units per second of frame time.
    PerSecond,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    pub movement_speed: f32,
    pub movement_mode: MovementMode,
    /// Degrees per pointer pixel
    pub mouse_sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Seed of the virtual cursor used while the pointer is locked
    pub initial_pointer: [f32; 2],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 8.0],
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 0.3,
            movement_mode: MovementMode::PerFrame,
            mouse_sensitivity: 0.1,
            pitch_min: -89.0,
            pitch_max: 89.0,
            initial_pointer: [400.0, 300.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub tree_count: usize,
    /// Trees are sampled from `[-area_limit, area_limit]` on both axes
    pub area_limit: f32,
    pub safe_zone_radius: f32,
    /// (x, z) of the ball court
    pub court_center: [f32; 2],
    pub court_safe_radius: f32,
    pub max_attempts: u64,
    /// Fixed seed for a reproducible layout; random when absent
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tree_count: 150,
            area_limit: 60.0,
            safe_zone_radius: 10.0,
            court_center: [30.0, 0.0],
            court_safe_radius: 10.0,
            max_attempts: 1_000_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// World units per second along +Z
    pub speed: f32,
    pub period: f32,
    pub clouds: Vec<CloudDescriptor>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            period: 120.0,
            clouds: vec![
                CloudDescriptor::new(-40.0, 35.0, -10.0, 30.0, 30.0),
                CloudDescriptor::new(20.0, 32.0, -30.0, 25.0, 25.0),
                CloudDescriptor::new(-10.0, 38.0, 40.0, 40.0, 40.0),
                CloudDescriptor::new(50.0, 30.0, 5.0, 28.0, 28.0),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    /// Direction towards the light
    pub direction: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: [0.3, 0.3, 0.4],
            diffuse: [1.0, 1.0, 1.0],
            direction: [0.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    pub directory: PathBuf,
    pub stone: String,
    pub wood: String,
    pub leaves: String,
    pub grass: String,
    pub ball: String,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("imagenes"),
            stone: "piedra.jpg".to_string(),
            wood: "madera.jpg".to_string(),
            leaves: "hojas.jpg".to_string(),
            grass: "pasto.jpg".to_string(),
            ball: "pelota.jpg".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "camera": { "movement_speed": 0.5 } }"#).unwrap();
        assert_eq!(config.camera.movement_speed, 0.5);
        assert_eq!(config.camera.yaw, -90.0);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn movement_mode_uses_snake_case() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "camera": { "movement_mode": "per_second" } }"#).unwrap();
        assert_eq!(config.camera.movement_mode, MovementMode::PerSecond);
    }

    #[test]
    fn inverted_pitch_bounds_rejected() {
        let mut config = SceneConfig::default();
        config.camera.pitch_min = 10.0;
        config.camera.pitch_max = -10.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_period_rejected() {
        let mut config = SceneConfig::default();
        config.clouds.period = 0.0;
        assert!(config.validate().is_err());
    }
}
