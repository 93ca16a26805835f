use glam::Vec3;
use scrollstory_common::{Color, LightConfig};

/// Light arriving from `position` toward the origin, equally everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn from_config(config: &LightConfig) -> Self {
        Self {
            color: config.color,
            intensity: config.intensity,
            position: Vec3::from_array(config.direction),
        }
    }

    /// Unit vector pointing from a lit surface toward the light.
    pub fn to_light(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }

    /// Linear RGB radiance, color times intensity.
    pub fn radiance(&self) -> [f32; 3] {
        self.color.to_linear().map(|c| c * self.intensity)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::from_config(&LightConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_comes_from_upper_right() {
        let light = DirectionalLight::default();
        let dir = light.to_light();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!(dir.abs_diff_eq(expected, 1e-6));
        assert_eq!(light.radiance(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn intensity_scales_radiance() {
        let light = DirectionalLight {
            intensity: 0.5,
            ..DirectionalLight::default()
        };
        assert_eq!(light.radiance(), [0.5, 0.5, 0.5]);
    }
}
