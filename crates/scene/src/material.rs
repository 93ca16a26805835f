use scrollstory_assets::GradientRamp;
use scrollstory_common::Color;

/// Index of a material in the scene's material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub usize);

/// How a material responds to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Diffuse term quantized through the gradient ramp.
    Toon,
    /// Flat color, used when no gradient ramp could be loaded.
    Unlit,
}

/// Cel-shaded material: a base color and an optional gradient ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct ToonMaterial {
    pub color: Color,
    gradient: Option<GradientRamp>,
}

impl ToonMaterial {
    pub fn new(color: Color, gradient: Option<GradientRamp>) -> Self {
        Self { color, gradient }
    }

    pub fn unlit(color: Color) -> Self {
        Self::new(color, None)
    }

    pub fn shading(&self) -> Shading {
        if self.gradient.is_some() {
            Shading::Toon
        } else {
            Shading::Unlit
        }
    }

    pub fn gradient(&self) -> Option<&GradientRamp> {
        self.gradient.as_ref()
    }
}
