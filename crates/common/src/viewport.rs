use glam::Vec2;
use serde::Serialize;

/// Drawable area in physical pixels. Both dimensions are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("viewport dimensions must be non-zero, got {width}x{height}")]
    ZeroSized { width: u32, height: u32 },
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroSized { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a pointer position in viewport pixels to `[-0.5, 0.5]` on each
    /// axis, with `(0, 0)` at the viewport center.
    pub fn normalize_pointer(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x / self.width as f64 - 0.5) as f32,
            (y / self.height as f64 - 0.5) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Viewport::new(0, 720),
            Err(ViewportError::ZeroSized {
                width: 0,
                height: 720
            })
        );
        assert!(Viewport::new(1280, 0).is_err());
    }

    #[test]
    fn aspect_is_width_over_height() {
        let vp = Viewport::new(1600, 800).unwrap();
        assert_eq!(vp.aspect(), 2.0);
    }

    #[test]
    fn pointer_normalization_corners_and_center() {
        let vp = Viewport::new(1280, 720).unwrap();
        assert_eq!(vp.normalize_pointer(0.0, 0.0), Vec2::new(-0.5, -0.5));
        assert_eq!(vp.normalize_pointer(1280.0, 720.0), Vec2::new(0.5, 0.5));
        assert_eq!(vp.normalize_pointer(640.0, 360.0), Vec2::ZERO);
    }
}
