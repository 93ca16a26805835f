//! Scene configuration.
//!
//! Every default reproduces the tuned look of the scene; a YAML file may
//! override any subset of fields.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`SceneConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Rates that shape the per-frame animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Convergence speed of the camera rig toward its parallax target, per second.
    pub smoothing_rate: f32,
    /// Section rotation in radians per second of elapsed time.
    pub rotation_rate: f32,
    /// Scale from normalized cursor offset to rig target offset.
    pub parallax_amount: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smoothing_rate: 4.0,
            rotation_rate: 0.25,
            parallax_amount: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance of the camera from the rig origin along +Z.
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            near: 0.1,
            far: 100.0,
            distance: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub color: Color,
    pub intensity: f32,
    /// Position of a directional light; it shines from here toward the origin.
    pub direction: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
            direction: [1.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Top-level scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Vertical distance between consecutive sections, in world units.
    pub section_spacing: f32,
    pub tuning: Tuning,
    pub material_color: Color,
    pub background: Color,
    pub gradient_path: String,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub window: WindowConfig,
    pub max_pixel_ratio: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            section_spacing: 3.5,
            tuning: Tuning::default(),
            material_color: Color::rgb(0x44, 0x0D, 0x0F),
            background: Color::rgb(0x1E, 0x1A, 0x20),
            gradient_path: "assets/textures/gradients/3.png".into(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            window: WindowConfig::default(),
            max_pixel_ratio: 2.0,
        }
    }
}

impl SceneConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&data)?;
        tracing::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {v}")))
            }
        };
        let non_negative = |name: &str, v: f32| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {v}"
                )))
            }
        };

        positive("section_spacing", self.section_spacing)?;
        non_negative("tuning.smoothing_rate", self.tuning.smoothing_rate)?;
        non_negative("tuning.rotation_rate", self.tuning.rotation_rate)?;
        non_negative("tuning.parallax_amount", self.tuning.parallax_amount)?;
        non_negative("light.intensity", self.light.intensity)?;
        positive("max_pixel_ratio", self.max_pixel_ratio)?;
        positive("camera.near", self.camera.near)?;
        positive("camera.distance", self.camera.distance)?;
        positive("camera.far", self.camera.far)?;

        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {}",
                self.camera.fov_degrees
            )));
        }
        if self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid(format!(
                "camera.far ({}) must exceed camera.near ({})",
                self.camera.far, self.camera.near
            )));
        }
        if !self.light.direction.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "light.direction must be finite, got {:?}",
                self.light.direction
            )));
        }
        if self.light.direction == [0.0; 3] {
            return Err(ConfigError::Invalid("light.direction must be non-zero".into()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        Ok(())
    }
}
