use glam::EulerRot;
use scrollstory_scene::{Scene, Shading};
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene, including its camera rig, and produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene.
    fn render(&self, scene: &Scene) -> Self::Output;
}

/// Text renderer for headless runs.
///
/// Produces a human-readable description of what a frame would draw.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene) -> String {
        let mut out = String::new();
        let rig = scene.rig();
        let eye = rig.eye();
        let light = scene.light().to_light();

        let _ = writeln!(out, "=== Scene (sections={}) ===", scene.sections().len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.3}, {:.3}, {:.3}) rig=({:.3}, {:.3}) fov={:.0} aspect={:.2}",
            eye.x,
            eye.y,
            eye.z,
            rig.position.x,
            rig.position.y,
            rig.camera.fov_degrees,
            rig.camera.aspect
        );
        let _ = writeln!(
            out,
            "Light: to=({:.2}, {:.2}, {:.2}) color={} intensity={:.2}",
            light.x,
            light.y,
            light.z,
            scene.light().color,
            scene.light().intensity
        );

        for section in scene.sections() {
            let p = section.transform.position;
            let (rx, ry, _) = section.transform.rotation.to_euler(EulerRot::XYZ);
            let material = match scene.section_material(section) {
                Ok(m) => {
                    let shading = match m.shading() {
                        Shading::Toon => "toon",
                        Shading::Unlit => "unlit",
                    };
                    format!("{} {shading}", m.color)
                }
                Err(e) => format!("<{e}>"),
            };
            let _ = writeln!(
                out,
                "  [{}] pos=({:.2}, {:.2}, {:.2}) rot=({:.3}, {:.3}) material={}",
                section.geometry.name(),
                p.x,
                p.y,
                p.z,
                rx,
                ry,
                material
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use scrollstory_common::{Color, SceneConfig, Viewport};
    use scrollstory_kernel::FrameOutput;

    fn scene() -> Scene {
        Scene::from_config(
            &SceneConfig::default(),
            Viewport::new(1280, 720).unwrap(),
            None,
        )
    }

    #[test]
    fn lists_every_section() {
        let output = DebugTextRenderer::new().render(&scene());
        assert!(output.contains("sections=3"));
        assert!(output.contains("[ring] pos=(0.00, "));
        assert!(output.contains("[cone] pos=(0.00, -3.50, 0.00)"));
        assert!(output.contains("[knot] pos=(0.00, -7.00, 0.00)"));
        assert!(output.contains("#440D0F unlit"));
    }

    #[test]
    fn reflects_applied_frame() {
        let mut scene = scene();
        scene.apply_frame(&FrameOutput {
            elapsed: 2.0,
            delta: 0.1,
            camera_y: -3.5,
            rig: Vec2::new(0.25, 0.0),
            section_rotation: Vec2::splat(0.5),
        });
        let output = DebugTextRenderer::new().render(&scene);
        assert!(output.contains("eye=(0.250, -3.500, 6.000)"));
        assert!(output.contains("rot=(0.500, 0.500)"));
    }

    #[test]
    fn shows_color_changes() {
        let mut scene = scene();
        let handle = scene.shared_material();
        scene
            .set_material_color(handle, Color::rgb(0, 0xFF, 0))
            .unwrap();
        let output = DebugTextRenderer::new().render(&scene);
        assert_eq!(output.matches("#00FF00").count(), 3);
    }
}
