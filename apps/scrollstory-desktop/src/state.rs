use egui::Context as EguiContext;
use scrollstory_assets::GradientRamp;
use scrollstory_common::{SceneConfig, Viewport};
use scrollstory_input::{InputEvent, InputState};
use scrollstory_kernel::{Clock, FrameOutput, FrameUpdater};
use scrollstory_scene::Scene;
use scrollstory_tools::DebugPanel;
use winit::keyboard::KeyCode;

/// Pixels scrolled per wheel line or arrow key press.
pub const LINE_HEIGHT: f32 = 40.0;

/// Everything the window drives, minus the GPU.
pub struct AppState {
    pub scene: Scene,
    input: InputState,
    updater: FrameUpdater,
    /// Started by the first tick, so window and GPU setup do not count.
    clock: Option<Clock>,
    panel: DebugPanel,
    last_frame: Option<FrameOutput>,
}

impl AppState {
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        let gradient = GradientRamp::load_or_fallback(&config.gradient_path);
        let scene = Scene::from_config(config, viewport, gradient);
        let input = InputState::new(viewport, scene.sections().len());

        Self {
            scene,
            input,
            updater: FrameUpdater::new(config.tuning, config.section_spacing),
            clock: None,
            panel: DebugPanel::new(config.material_color),
            last_frame: None,
        }
    }

    /// Feed one host event into the input state. Returns `false` when the
    /// event was rejected and nothing changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.apply(event) {
            Ok(()) => {
                if let InputEvent::Resized { .. } = event {
                    self.scene.resize(self.input.viewport());
                }
                true
            }
            Err(e) => {
                tracing::warn!("ignoring input event: {e}");
                false
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        let page = self.input.viewport().height() as f32;
        let event = match key {
            KeyCode::F1 => {
                self.panel.toggle();
                return;
            }
            KeyCode::PageDown | KeyCode::Space => InputEvent::ScrolledBy(page),
            KeyCode::PageUp => InputEvent::ScrolledBy(-page),
            KeyCode::ArrowDown => InputEvent::ScrolledBy(LINE_HEIGHT),
            KeyCode::ArrowUp => InputEvent::ScrolledBy(-LINE_HEIGHT),
            KeyCode::Home => InputEvent::ScrolledTo(0.0),
            KeyCode::End => InputEvent::ScrolledTo(self.input.max_scroll()),
            _ => return,
        };
        self.handle_input(event);
    }

    /// Advance one frame at the clock's current time.
    pub fn tick(&mut self) -> FrameOutput {
        let elapsed = self.clock.get_or_insert_with(Clock::start).elapsed();
        self.tick_at(elapsed)
    }

    pub fn tick_at(&mut self, elapsed: f32) -> FrameOutput {
        let frame = self.updater.tick(elapsed, &self.input.snapshot());
        self.scene.apply_frame(&frame);
        self.last_frame = Some(frame);
        frame
    }

    pub fn viewport(&self) -> Viewport {
        self.input.viewport()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.input.scroll_offset()
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext) {
        self.panel
            .show(ctx, &mut self.scene, self.last_frame.as_ref());
    }
}
