use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scrollstory_assets::GradientRamp;
use scrollstory_common::{Color, SceneConfig, Viewport};
use scrollstory_input::{InputEvent, InputState};
use scrollstory_kernel::{FixedStep, FrameOutput, FrameUpdater};
use scrollstory_render::{DebugTextRenderer, Renderer};
use scrollstory_scene::Scene;
use scrollstory_tools::{DebugPanel, SceneInspector};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrollstory-cli", about = "Headless scrollstory tool")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene config (YAML); built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the frame loop at a fixed rate and print each frame
    Simulate(SimulateArgs),
    /// Print the effective config as YAML
    Config,
}

#[derive(Args, Debug, Clone)]
struct SimulateArgs {
    /// Number of frames to run
    #[arg(short, long, default_value = "10")]
    frames: u64,
    /// Frames per second of the fixed-step clock
    #[arg(long, default_value = "60")]
    fps: f32,
    /// Scroll offset in pixels
    #[arg(short, long, default_value = "0")]
    scroll: f32,
    /// Pointer x in viewport pixels (defaults to the center)
    #[arg(long)]
    cursor_x: Option<f64>,
    /// Pointer y in viewport pixels (defaults to the center)
    #[arg(long)]
    cursor_y: Option<f64>,
    /// Material color set through the debug panel before the run
    #[arg(long)]
    color: Option<Color>,
    /// Emit one JSON object per frame instead of text
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SceneConfig::default()),
    }
}

/// A headless run: the same pieces the desktop window drives, minus the GPU.
struct Simulation {
    scene: Scene,
    input: InputState,
    updater: FrameUpdater,
    panel: DebugPanel,
}

impl Simulation {
    fn new(config: &SceneConfig) -> anyhow::Result<Self> {
        let viewport = Viewport::new(config.window.width, config.window.height)?;
        let gradient = GradientRamp::load_or_fallback(&config.gradient_path);
        let scene = Scene::from_config(config, viewport, gradient);
        let input = InputState::new(viewport, scene.sections().len());
        Ok(Self {
            scene,
            input,
            updater: FrameUpdater::new(config.tuning, config.section_spacing),
            panel: DebugPanel::new(config.material_color),
        })
    }

    fn prepare(&mut self, args: &SimulateArgs) -> anyhow::Result<()> {
        let viewport = self.input.viewport();
        self.input.apply(InputEvent::ScrolledTo(args.scroll))?;
        self.input.apply(InputEvent::PointerMoved {
            x: args.cursor_x.unwrap_or(viewport.width() as f64 / 2.0),
            y: args.cursor_y.unwrap_or(viewport.height() as f64 / 2.0),
        })?;
        if let Some(color) = args.color {
            self.panel.set_color(&mut self.scene, color)?;
        }
        Ok(())
    }

    fn run(
        &mut self,
        args: &SimulateArgs,
        mut on_frame: impl FnMut(&Scene, &FrameOutput),
    ) -> anyhow::Result<()> {
        for elapsed in FixedStep::new(args.fps, args.frames)? {
            let frame = self.updater.tick(elapsed, &self.input.snapshot());
            self.scene.apply_frame(&frame);
            on_frame(&self.scene, &frame);
        }
        Ok(())
    }
}

fn simulate(config: &SceneConfig, args: &SimulateArgs) -> anyhow::Result<()> {
    let mut sim = Simulation::new(config)?;
    sim.prepare(args)?;
    tracing::debug!(
        scroll = sim.input.scroll_offset(),
        cursor = ?sim.input.cursor(),
        "simulating {} frames at {} fps",
        args.frames,
        args.fps
    );

    if args.json {
        let mut failure = None;
        sim.run(args, |_, frame| {
            if failure.is_some() {
                return;
            }
            match serde_json::to_string(frame) {
                Ok(line) => println!("{line}"),
                Err(e) => failure = Some(e),
            }
        })?;
        if let Some(e) = failure {
            return Err(e).context("serializing frame");
        }
    } else {
        sim.run(args, |scene, frame| {
            println!("{}", SceneInspector::summary(scene, Some(frame)));
        })?;
        print!("{}", DebugTextRenderer::new().render(&sim.scene));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("scrollstory-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", scrollstory_render::crate_info());
            println!("tools: {}", scrollstory_tools::crate_info());
            let config = load_config(cli.config.as_deref())?;
            println!(
                "scene: {} sections, spacing {}",
                scrollstory_scene::GeometryKind::SECTIONS.len(),
                config.section_spacing
            );
        }
        Commands::Simulate(args) => {
            let config = load_config(cli.config.as_deref())?;
            simulate(&config, &args)?;
        }
        Commands::Config => {
            let config = load_config(cli.config.as_deref())?;
            print!("{}", config.to_yaml_string()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn config() -> SceneConfig {
        SceneConfig {
            gradient_path: "/nonexistent/ramp.png".into(),
            ..SceneConfig::default()
        }
    }

    fn args(extra: &[&str]) -> SimulateArgs {
        let mut argv = vec!["scrollstory-cli", "simulate"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Simulate(args) => args,
            _ => panic!("expected simulate"),
        }
    }

    fn collect(config: &SceneConfig, args: &SimulateArgs) -> (Simulation, Vec<FrameOutput>) {
        let mut sim = Simulation::new(config).unwrap();
        sim.prepare(args).unwrap();
        let mut frames = Vec::new();
        sim.run(args, |_, frame| frames.push(*frame)).unwrap();
        (sim, frames)
    }

    #[test]
    fn simulate_defaults() {
        let args = args(&[]);
        assert_eq!(args.frames, 10);
        assert_eq!(args.fps, 60.0);
        assert!(!args.json);
        assert!(args.color.is_none());
    }

    #[test]
    fn centered_pointer_keeps_rig_still() {
        let (_, frames) = collect(&config(), &args(&["--frames", "5"]));
        assert_eq!(frames.len(), 5);
        for frame in &frames {
            assert_eq!(frame.rig, Vec2::ZERO);
            assert_eq!(frame.camera_y, 0.0);
        }
    }

    #[test]
    fn scroll_one_page_moves_camera_one_section() {
        let (sim, frames) = collect(&config(), &args(&["--scroll", "720", "--frames", "2"]));
        assert_eq!(frames[1].camera_y, -3.5);
        assert_eq!(sim.scene.rig().camera.position.y, -3.5);
    }

    #[test]
    fn rotation_follows_elapsed() {
        let (_, frames) = collect(&config(), &args(&["--fps", "10", "--frames", "3"]));
        let last = frames[2];
        assert!((last.elapsed - 0.3).abs() < 1e-6);
        assert!((last.section_rotation.x - 0.075).abs() < 1e-6);
        assert_eq!(last.section_rotation.x, last.section_rotation.y);
    }

    #[test]
    fn color_flag_reaches_shared_material() {
        let (sim, _) = collect(&config(), &args(&["--color", "#00FF00", "--frames", "1"]));
        for section in sim.scene.sections() {
            assert_eq!(
                sim.scene.section_material(section).unwrap().color,
                Color::rgb(0, 255, 0)
            );
        }
    }

    #[test]
    fn frames_serialize_to_json() {
        let (_, frames) = collect(&config(), &args(&["--frames", "1"]));
        let line = serde_json::to_string(&frames[0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("camera_y").is_some());
        assert!(value.get("section_rotation").is_some());
    }

    #[test]
    fn zero_fps_is_an_error() {
        let mut sim = Simulation::new(&config()).unwrap();
        let mut frames = 0;
        let result = sim.run(&args(&["--fps", "0"]), |_, _| frames += 1);
        assert!(result.is_err());
        assert_eq!(frames, 0);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["scrollstory-cli", "config", "--config", "scene.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("scene.yaml")));
    }
}
