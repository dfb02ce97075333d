//! Runtime configuration.
//!
//! Everything is optional: a missing file, section or key falls back to the
//! defaults below, which reproduce the stock mountain flyover.
//!
//! ```toml
//! [window]
//! width = 1280
//! height = 720
//!
//! [camera]
//! fov_deg = 75.0
//!
//! [mesh]
//! path = "assets/valley.obj"
//! spin = [0.0, 0.0, 0.1]
//! ```

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::colors::Color;
use crate::error::ConfigError;
use crate::light::DayCycle;
use crate::math::vec3::Vec3;
use crate::shading::TerrainPalette;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub mesh: MeshConfig,
    pub lighting: LightingConfig,
    pub terrain: TerrainConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "painter3d".to_string(),
            width: 640,
            height: 480,
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Horizontal field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Units per second.
    pub move_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, -17.5, -15.0],
            target: [1.0, -17.5, -15.0],
            up: [0.0, 0.0, 1.0],
            move_speed: 8.0,
            turn_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    pub path: PathBuf,
    pub translation: [f32; 3],
    /// Radians per second around X, Y and Z.
    pub spin: [f32; 3],
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("mountains.obj"),
            translation: [0.0; 3],
            spin: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub direction: [f32; 3],
    /// Radians per second.
    pub cycle_rate: f32,
    pub midday: [f32; 3],
    pub day: Color,
    pub night: Color,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            direction: [0.0, 0.0, -1.0],
            cycle_rate: 0.25,
            midday: [0.0, 0.0, -1.0],
            day: Color::rgb(135, 206, 235),
            night: Color::rgb(0, 0, 49),
        }
    }
}

impl LightingConfig {
    pub fn day_cycle(&self) -> DayCycle {
        DayCycle {
            midday: Vec3::from(self.midday).normalize(),
            day: self.day,
            night: self.night,
            ..DayCycle::new(Vec3::from(self.direction), self.cycle_rate)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub grass: Color,
    pub mountain: Color,
    pub snow: Color,
    pub mountain_above: f32,
    pub snow_above: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        let palette = TerrainPalette::default();
        Self {
            grass: palette.grass,
            mountain: palette.mountain,
            snow: palette.snow,
            mountain_above: palette.mountain_above,
            snow_above: palette.snow_above,
        }
    }
}

impl TerrainConfig {
    pub fn palette(&self) -> TerrainPalette {
        TerrainPalette {
            grass: self.grass,
            mountain: self.mountain,
            snow: self.snow,
            mountain_above: self.mountain_above,
            snow_above: self.snow_above,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub wireframe: bool,
    pub fill: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wireframe: false,
            fill: true,
        }
    }
}
