use scrollstory_common::Color;
use scrollstory_kernel::FrameOutput;
use scrollstory_scene::{Scene, SceneError};

use crate::inspector::SceneInspector;

/// Debug panel exposing the shared material color.
///
/// Edits go straight into the scene's shared material, so every section
/// changes together.
#[derive(Debug, Clone)]
pub struct DebugPanel {
    color: [u8; 3],
    visible: bool,
}

impl DebugPanel {
    pub fn new(initial: Color) -> Self {
        Self {
            color: initial.to_array(),
            visible: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn color(&self) -> Color {
        Color::from_array(self.color)
    }

    /// Set the color parameter and push it into the shared material.
    pub fn set_color(&mut self, scene: &mut Scene, color: Color) -> Result<(), SceneError> {
        self.color = color.to_array();
        scene.set_material_color(scene.shared_material(), color)
    }

    pub fn show(&mut self, ctx: &egui::Context, scene: &mut Scene, frame: Option<&FrameOutput>) {
        if !self.visible {
            return;
        }

        let summary = SceneInspector::summary(scene, frame);

        egui::Window::new("Debug")
            .default_width(240.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("materialColor");
                    let mut rgb = self.color;
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        if let Err(e) = self.set_color(scene, Color::from_array(rgb)) {
                            tracing::error!("failed to update material color: {e}");
                        }
                    }
                });
                ui.separator();
                ui.label(format!(
                    "t: {:.2}s  dt: {:.1}ms",
                    summary.elapsed,
                    summary.delta * 1000.0
                ));
                ui.label(format!("Camera y: {:.3}", summary.camera_y));
                ui.label(format!(
                    "Rig: ({:.3}, {:.3})",
                    summary.rig.x, summary.rig.y
                ));
                if let Some(shading) = summary.shading {
                    ui.label(format!("Shading: {shading:?}"));
                }
                ui.separator();
                ui.small("F1: Toggle panel | Wheel/PgUp/PgDn: Scroll");
            });
    }
}
