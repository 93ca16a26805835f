//! Gradient ramp assets for toon shading.
//!
//! A ramp is a small image read left to right: the diffuse term picks one
//! texel with nearest filtering, so lighting falls into hard bands.
//!
//! # Layout
//! Ramps ship under `assets/textures/gradients/`. Only the first row is used.

use std::path::Path;

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("gradient image is empty")]
    Empty,
}

/// RGBA8 gradient ramp, kept in the sRGB encoding it was authored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientRamp {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl GradientRamp {
    /// A one-row grey ramp with one texel per level.
    pub fn from_levels(levels: &[u8]) -> Result<Self, AssetError> {
        let texels = levels.iter().flat_map(|&l| [l, l, l, 255]).collect();
        Self::from_rgba8(levels.len() as u32, 1, texels)
    }

    /// A single grey texel.
    pub fn solid(level: u8) -> Self {
        Self {
            width: 1,
            height: 1,
            texels: vec![level, level, level, 255],
        }
    }

    pub fn from_rgba8(width: u32, height: u32, texels: Vec<u8>) -> Result<Self, AssetError> {
        if width == 0 || height == 0 || texels.len() != (width * height * 4) as usize {
            return Err(AssetError::Empty);
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        Self::from_rgba8(width, height, image.into_raw())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path.as_ref())?;
        let ramp = Self::decode(&bytes)?;
        tracing::info!(
            "loaded gradient ramp {} ({}x{})",
            path.as_ref().display(),
            ramp.width,
            ramp.height
        );
        Ok(ramp)
    }

    /// Load a ramp, or report why not and return `None` so the caller can
    /// fall back to unshaded rendering.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Option<Self> {
        match Self::load(path.as_ref()) {
            Ok(ramp) => Some(ramp),
            Err(e) => {
                tracing::warn!(
                    "gradient ramp {} unavailable, using unshaded material: {e}",
                    path.as_ref().display()
                );
                None
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Nearest-filtered lookup of the red channel at `t` in `[0, 1]` along
    /// the first row. Mirrors what the shader samples.
    pub fn sample(&self, t: f32) -> u8 {
        let t = t.clamp(0.0, 1.0);
        let x = ((t * self.width as f32) as u32).min(self.width - 1);
        self.texels[(x * 4) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn levels_become_grey_texels() {
        let ramp = GradientRamp::from_levels(&[0, 128, 255]).unwrap();
        assert_eq!(ramp.width(), 3);
        assert_eq!(ramp.height(), 1);
        assert_eq!(&ramp.texels()[4..8], &[128, 128, 128, 255]);
    }

    #[test]
    fn empty_levels_are_rejected() {
        assert!(matches!(
            GradientRamp::from_levels(&[]),
            Err(AssetError::Empty)
        ));
        assert_eq!(GradientRamp::solid(255).sample(0.7), 255);
    }

    #[test]
    fn sampling_is_banded() {
        let ramp = GradientRamp::from_levels(&[0, 128, 255]).unwrap();
        assert_eq!(ramp.sample(0.0), 0);
        assert_eq!(ramp.sample(0.3), 0);
        assert_eq!(ramp.sample(0.4), 128);
        assert_eq!(ramp.sample(0.6), 128);
        assert_eq!(ramp.sample(0.7), 255);
        assert_eq!(ramp.sample(1.0), 255);
        assert_eq!(ramp.sample(-4.0), 0);
    }

    #[test]
    fn rgba_size_mismatch_is_rejected() {
        assert!(matches!(
            GradientRamp::from_rgba8(2, 1, vec![0; 4]),
            Err(AssetError::Empty)
        ));
        assert!(GradientRamp::from_rgba8(1, 1, vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn decode_png_from_disk() {
        let mut png = Vec::new();
        let img = image::RgbaImage::from_fn(3, 1, |x, _| {
            let l = [0u8, 128, 255][x as usize];
            image::Rgba([l, l, l, 255])
        });
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&png).unwrap();

        let ramp = GradientRamp::load(tmp.path()).unwrap();
        assert_eq!(ramp, GradientRamp::from_levels(&[0, 128, 255]).unwrap());
    }

    #[test]
    fn shipped_ramp_has_three_bands() {
        let ramp = GradientRamp::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../assets/textures/gradients/3.png"
        ))
        .unwrap();
        assert_eq!(ramp, GradientRamp::from_levels(&[0, 128, 255]).unwrap());
    }

    #[test]
    fn missing_file_falls_back() {
        assert!(GradientRamp::load_or_fallback("/nonexistent/ramp.png").is_none());
        assert!(matches!(
            GradientRamp::load("/nonexistent/ramp.png"),
            Err(AssetError::Io(_))
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            GradientRamp::decode(b"not an image"),
            Err(AssetError::Decode(_))
        ));
    }
}
