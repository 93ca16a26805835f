use glam::Vec3;
use scrollstory_assets::GradientRamp;
use scrollstory_common::{Color, SceneConfig, Transform, Viewport};
use scrollstory_kernel::FrameOutput;

use crate::camera::{CameraRig, PerspectiveCamera};
use crate::geometry::GeometryKind;
use crate::light::DirectionalLight;
use crate::material::{MaterialHandle, ToonMaterial};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("no material for handle {0:?}")]
    UnknownMaterial(MaterialHandle),
}

/// One scroll section: a mesh at a fixed layout offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub geometry: GeometryKind,
    pub material: MaterialHandle,
    pub transform: Transform,
}

/// The whole scene: sections, their shared material, one light and the
/// camera rig.
#[derive(Debug, Clone)]
pub struct Scene {
    sections: Vec<Section>,
    materials: Vec<ToonMaterial>,
    light: DirectionalLight,
    rig: CameraRig,
    background: Color,
}

impl Scene {
    /// Build the storytelling layout: ring, cone and knot stacked downward,
    /// `section_spacing` apart, all sharing one material.
    pub fn from_config(
        config: &SceneConfig,
        viewport: Viewport,
        gradient: Option<GradientRamp>,
    ) -> Self {
        let shared = MaterialHandle(0);
        let materials = vec![ToonMaterial::new(config.material_color, gradient)];

        let sections = GeometryKind::SECTIONS
            .iter()
            .enumerate()
            .map(|(index, &geometry)| Section {
                geometry,
                material: shared,
                transform: Transform::from_position(Vec3::new(
                    0.0,
                    -(config.section_spacing * index as f32),
                    0.0,
                )),
            })
            .collect();

        Self {
            sections,
            materials,
            light: DirectionalLight::from_config(&config.light),
            rig: CameraRig::new(PerspectiveCamera::from_config(&config.camera, viewport)),
            background: config.background,
        }
    }

    /// Write one frame's derived values into the scene objects.
    pub fn apply_frame(&mut self, frame: &FrameOutput) {
        self.rig.set_rig_offset(frame.rig);
        self.rig.set_camera_y(frame.camera_y);
        let rotation = frame.section_rotation;
        for section in &mut self.sections {
            section.transform.set_euler_xyz(rotation.x, rotation.y, 0.0);
        }
    }

    /// Recompute the camera projection for an accepted viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.rig.set_viewport(viewport);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn material(&self, handle: MaterialHandle) -> Result<&ToonMaterial, SceneError> {
        self.materials
            .get(handle.0)
            .ok_or(SceneError::UnknownMaterial(handle))
    }

    /// The material of a section.
    pub fn section_material(&self, section: &Section) -> Result<&ToonMaterial, SceneError> {
        self.material(section.material)
    }

    pub fn materials(&self) -> &[ToonMaterial] {
        &self.materials
    }

    pub fn set_material_color(
        &mut self,
        handle: MaterialHandle,
        color: Color,
    ) -> Result<(), SceneError> {
        let material = self
            .materials
            .get_mut(handle.0)
            .ok_or(SceneError::UnknownMaterial(handle))?;
        if material.color != color {
            tracing::debug!(%color, "material color changed");
            material.color = color;
        }
        Ok(())
    }

    /// Handle of the material every section shares.
    pub fn shared_material(&self) -> MaterialHandle {
        MaterialHandle(0)
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{EulerRot, Quat, Vec2};

    fn scene() -> Scene {
        Scene::from_config(
            &SceneConfig::default(),
            Viewport::new(1280, 720).unwrap(),
            None,
        )
    }

    fn frame(elapsed: f32) -> FrameOutput {
        FrameOutput {
            elapsed,
            delta: 0.016,
            camera_y: -1.75,
            rig: Vec2::new(0.1, -0.2),
            section_rotation: Vec2::splat(elapsed * 0.25),
        }
    }

    #[test]
    fn sections_are_stacked_by_spacing() {
        let scene = scene();
        let ys: Vec<f32> = scene
            .sections()
            .iter()
            .map(|s| s.transform.position.y)
            .collect();
        assert_eq!(ys, vec![0.0, -3.5, -7.0]);
        let kinds: Vec<_> = scene.sections().iter().map(|s| s.geometry).collect();
        assert_eq!(kinds, GeometryKind::SECTIONS.to_vec());
    }

    #[test]
    fn apply_frame_rotates_all_sections_in_lockstep() {
        let mut scene = scene();
        scene.apply_frame(&frame(2.0));
        let expected = Quat::from_euler(EulerRot::XYZ, 0.5, 0.5, 0.0);
        for section in scene.sections() {
            assert!(section.transform.rotation.abs_diff_eq(expected, 1e-6));
        }
        // positions are layout, not animation
        assert_eq!(scene.sections()[1].transform.position.y, -3.5);
    }

    #[test]
    fn apply_frame_moves_rig_and_camera_separately() {
        let mut scene = scene();
        scene.apply_frame(&frame(1.0));
        assert_eq!(scene.rig().position, Vec3::new(0.1, -0.2, 0.0));
        assert_eq!(scene.rig().camera.position, Vec3::new(0.0, -1.75, 6.0));
    }

    #[test]
    fn color_change_reaches_every_section() {
        let mut scene = scene();
        let red = Color::rgb(255, 0, 0);
        let handle = scene.shared_material();
        scene.set_material_color(handle, red).unwrap();
        for section in scene.sections() {
            assert_eq!(scene.section_material(section).unwrap().color, red);
        }
        assert_eq!(scene.materials().len(), 1);
    }

    #[test]
    fn unknown_material_is_an_error() {
        let mut scene = scene();
        let err = scene
            .set_material_color(MaterialHandle(7), Color::BLACK)
            .unwrap_err();
        assert_eq!(err, SceneError::UnknownMaterial(MaterialHandle(7)));
    }

    #[test]
    fn resize_propagates_to_camera_aspect() {
        let mut scene = scene();
        scene.resize(Viewport::new(900, 300).unwrap());
        assert_eq!(scene.rig().camera.aspect, 3.0);
    }

    #[test]
    fn missing_gradient_yields_unlit_material() {
        use crate::material::Shading;
        let scene = scene();
        let handle = scene.shared_material();
        assert_eq!(scene.material(handle).unwrap().shading(), Shading::Unlit);
    }
}
