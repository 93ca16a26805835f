use glam::{Mat4, Vec2, Vec3};
use scrollstory_common::{CameraConfig, Viewport};

/// Perspective camera looking down -Z, positioned relative to its rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Position local to the rig.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig, viewport: Viewport) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.distance),
            fov_degrees: config.fov_degrees,
            aspect: viewport.aspect(),
            near: config.near,
            far: config.far,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 6.0),
            fov_degrees: 35.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Parent transform of the camera. Parallax moves the rig; scroll moves the
/// camera inside it, so the two never fight over one position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraRig {
    pub position: Vec3,
    pub camera: PerspectiveCamera,
}

impl CameraRig {
    pub fn new(camera: PerspectiveCamera) -> Self {
        Self {
            position: Vec3::ZERO,
            camera,
        }
    }

    pub fn set_rig_offset(&mut self, offset: Vec2) {
        self.position.x = offset.x;
        self.position.y = offset.y;
    }

    pub fn set_camera_y(&mut self, y: f32) {
        self.camera.position.y = y;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        self.position + self.camera.position
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera() {
        let rig = CameraRig::default();
        assert_eq!(rig.eye(), Vec3::new(0.0, 0.0, 6.0));
        let vp = rig.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn eye_combines_rig_and_camera() {
        let mut rig = CameraRig::default();
        rig.set_rig_offset(Vec2::new(0.25, -0.1));
        rig.set_camera_y(-3.5);
        assert!(rig.eye().abs_diff_eq(Vec3::new(0.25, -3.6, 6.0), 1e-6));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut rig = CameraRig::default();
        rig.set_viewport(Viewport::new(1000, 500).unwrap());
        assert_eq!(rig.camera.aspect, 2.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let rig = CameraRig::default();
        let clip = rig.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn from_config_uses_viewport_aspect() {
        let camera = PerspectiveCamera::from_config(
            &CameraConfig::default(),
            Viewport::new(1280, 720).unwrap(),
        );
        assert_eq!(camera.fov_degrees, 35.0);
        assert_eq!(camera.position.z, 6.0);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
