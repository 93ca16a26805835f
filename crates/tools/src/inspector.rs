use glam::Vec2;
use scrollstory_common::Color;
use scrollstory_kernel::FrameOutput;
use scrollstory_scene::{Scene, Shading};

/// Scene inspector for developer tooling.
///
/// Read-only queries against the scene and the last frame, for the debug
/// panel and headless output.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the scene after `frame` was applied.
    pub fn summary(scene: &Scene, frame: Option<&FrameOutput>) -> SceneSummary {
        let material = scene.material(scene.shared_material()).ok();
        SceneSummary {
            sections: scene.sections().len(),
            elapsed: frame.map_or(0.0, |f| f.elapsed),
            delta: frame.map_or(0.0, |f| f.delta),
            camera_y: scene.rig().camera.position.y,
            rig: scene.rig().position.truncate(),
            material_color: material.map(|m| m.color),
            shading: material.map(|m| m.shading()),
        }
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSummary {
    pub sections: usize,
    pub elapsed: f32,
    pub delta: f32,
    pub camera_y: f32,
    pub rig: Vec2,
    pub material_color: Option<Color>,
    pub shading: Option<Shading>,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let color = self
            .material_color
            .map_or_else(|| "-".to_string(), |c| c.to_hex());
        write!(
            f,
            "Scene: t={:.3}s dt={:.4}s camera_y={:.3} rig=({:.3}, {:.3}) sections={} color={}",
            self.elapsed, self.delta, self.camera_y, self.rig.x, self.rig.y, self.sections, color
        )
    }
}
