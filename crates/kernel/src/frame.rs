use glam::Vec2;
use scrollstory_common::{Tuning, Viewport};
use serde::Serialize;

/// Everything the updater reads from the host for one frame.
///
/// Input handlers write the latest values into their own state; the host
/// copies them into a `FrameInput` at the top of each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameInput {
    /// Vertical scroll offset in pixels.
    pub scroll_offset: f32,
    /// Pointer position normalized to `[-0.5, 0.5]` on each axis.
    pub cursor: Vec2,
    pub viewport: Viewport,
}

impl FrameInput {
    pub fn new(scroll_offset: f32, cursor: Vec2, viewport: Viewport) -> Self {
        Self {
            scroll_offset,
            cursor,
            viewport,
        }
    }
}

/// State carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FrameState {
    pub previous_elapsed: f32,
    /// Camera rig position in the XY plane.
    pub rig: Vec2,
}

/// Values one tick produces for the scene adapter to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameOutput {
    pub elapsed: f32,
    pub delta: f32,
    /// Camera `y` local to the rig.
    pub camera_y: f32,
    pub rig: Vec2,
    /// Euler `x`/`y` rotation shared by every section mesh.
    pub section_rotation: Vec2,
}

/// Camera travel for a scroll offset: one viewport height of scroll moves
/// the camera down by exactly one section.
pub fn camera_offset(scroll_offset: f32, viewport_height: f32, section_spacing: f32) -> f32 {
    -(scroll_offset / viewport_height) * section_spacing
}

/// Rig target for a normalized cursor. The vertical axis is inverted so the
/// scene leans away from the pointer.
pub fn parallax_target(cursor: Vec2, parallax_amount: f32) -> Vec2 {
    Vec2::new(cursor.x * parallax_amount, -cursor.y * parallax_amount)
}

/// One step of the exponential approach of `current` toward `target`.
pub fn smooth_toward(current: Vec2, target: Vec2, rate: f32, delta: f32) -> Vec2 {
    current + (target - current) * rate * delta
}

pub fn section_rotation(elapsed: f32, rotation_rate: f32) -> Vec2 {
    Vec2::splat(elapsed * rotation_rate)
}

impl FrameState {
    /// Pure tick: derive this frame's output and the state for the next one.
    ///
    /// A timestamp earlier than the previous one yields a zero delta, so the
    /// rig holds still instead of moving away from its target.
    pub fn advance(
        &self,
        elapsed: f32,
        input: &FrameInput,
        tuning: &Tuning,
        section_spacing: f32,
    ) -> (FrameState, FrameOutput) {
        let delta = (elapsed - self.previous_elapsed).max(0.0);

        let camera_y = camera_offset(
            input.scroll_offset,
            input.viewport.height() as f32,
            section_spacing,
        );
        let target = parallax_target(input.cursor, tuning.parallax_amount);
        let rig = smooth_toward(self.rig, target, tuning.smoothing_rate, delta);

        let next = FrameState {
            previous_elapsed: elapsed,
            rig,
        };
        let output = FrameOutput {
            elapsed,
            delta,
            camera_y,
            rig,
            section_rotation: section_rotation(elapsed, tuning.rotation_rate),
        };
        (next, output)
    }
}

/// Owns the frame state between ticks.
#[derive(Debug, Clone)]
pub struct FrameUpdater {
    tuning: Tuning,
    section_spacing: f32,
    state: FrameState,
}

impl FrameUpdater {
    pub fn new(tuning: Tuning, section_spacing: f32) -> Self {
        Self {
            tuning,
            section_spacing,
            state: FrameState::default(),
        }
    }

    pub fn tick(&mut self, elapsed: f32, input: &FrameInput) -> FrameOutput {
        let (next, output) = self
            .state
            .advance(elapsed, input, &self.tuning, self.section_spacing);
        self.state = next;
        tracing::trace!(
            elapsed,
            delta = output.delta,
            camera_y = output.camera_y,
            "frame advanced"
        );
        output
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn section_spacing(&self) -> f32 {
        self.section_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn viewport() -> Viewport {
        Viewport::new(1280, 720).unwrap()
    }

    fn input(scroll: f32, cursor: Vec2) -> FrameInput {
        FrameInput::new(scroll, cursor, viewport())
    }

    #[test]
    fn rotation_is_idempotent_for_a_timestamp() {
        let tuning = Tuning::default();
        let state = FrameState::default();
        let (_, first) = state.advance(3.0, &input(0.0, Vec2::ZERO), &tuning, 3.5);
        for _ in 0..5 {
            let (_, again) = state.advance(3.0, &input(0.0, Vec2::ZERO), &tuning, 3.5);
            assert_eq!(again.section_rotation, first.section_rotation);
        }
        assert_eq!(first.section_rotation, Vec2::new(0.75, 0.75));
    }

    #[test]
    fn rotation_ignores_frame_history() {
        let mut stepped = FrameUpdater::new(Tuning::default(), 3.5);
        for i in 1..=10 {
            stepped.tick(i as f32 * 0.4, &input(0.0, Vec2::ZERO));
        }
        let mut direct = FrameUpdater::new(Tuning::default(), 3.5);
        let a = stepped.tick(4.4, &input(0.0, Vec2::ZERO));
        let b = direct.tick(4.4, &input(0.0, Vec2::ZERO));
        assert_eq!(a.section_rotation, b.section_rotation);
        assert!((a.section_rotation.x - 1.1).abs() < EPS);
    }

    #[test]
    fn scroll_of_one_viewport_moves_one_section() {
        assert_eq!(camera_offset(720.0, 720.0, 5.0), -5.0);
        assert_eq!(camera_offset(0.0, 720.0, 5.0), 0.0);
        assert!((camera_offset(360.0, 720.0, 3.5) + 1.75).abs() < EPS);

        let mut updater = FrameUpdater::new(Tuning::default(), 5.0);
        let out = updater.tick(0.016, &input(720.0, Vec2::ZERO));
        assert_eq!(out.camera_y, -5.0);
    }

    #[test]
    fn parallax_target_inverts_vertical_axis() {
        let target = parallax_target(Vec2::new(0.5, 0.5), 0.5);
        assert_eq!(target, Vec2::new(0.25, -0.25));
        assert_eq!(parallax_target(Vec2::ZERO, 0.5), Vec2::ZERO);
    }

    #[test]
    fn rig_converges_monotonically_without_overshoot() {
        let mut updater = FrameUpdater::new(Tuning::default(), 3.5);
        let cursor = Vec2::new(0.5, -0.5);
        let target = parallax_target(cursor, 0.5);
        let dt = 1.0 / 60.0;

        let mut previous_distance = target.distance(updater.state().rig);
        for frame in 1..=120 {
            let out = updater.tick(frame as f32 * dt, &input(0.0, cursor));
            let distance = target.distance(out.rig);
            assert!(distance < previous_distance, "frame {frame}: {distance}");
            // approaching from the origin, never crosses the target
            assert!(out.rig.x <= target.x + EPS);
            assert!(out.rig.y <= target.y + EPS);
            previous_distance = distance;
        }
        assert!(previous_distance < 1e-3);
    }

    #[test]
    fn smoothing_step_decays_by_rate_times_delta() {
        let next = smooth_toward(Vec2::ZERO, Vec2::new(1.0, -1.0), 4.0, 0.1);
        assert!((next.x - 0.4).abs() < EPS);
        assert!((next.y + 0.4).abs() < EPS);
    }

    #[test]
    fn delta_is_difference_of_consecutive_samples() {
        let mut updater = FrameUpdater::new(Tuning::default(), 3.5);
        let first = updater.tick(0.5, &input(0.0, Vec2::ZERO));
        assert_eq!(first.delta, 0.5);
        let second = updater.tick(0.75, &input(0.0, Vec2::ZERO));
        assert_eq!(second.delta, 0.25);
        assert_eq!(updater.state().previous_elapsed, 0.75);
    }

    #[test]
    fn backwards_timestamp_holds_rig_still() {
        let mut updater = FrameUpdater::new(Tuning::default(), 3.5);
        let cursor = Vec2::new(0.4, 0.0);
        let before = updater.tick(1.0, &input(0.0, cursor)).rig;
        let after = updater.tick(0.5, &input(0.0, cursor));
        assert_eq!(after.delta, 0.0);
        assert_eq!(after.rig, before);
    }

    #[test]
    fn custom_tuning_is_respected() {
        let tuning = Tuning {
            smoothing_rate: 0.0,
            rotation_rate: 1.0,
            parallax_amount: 1.0,
        };
        let mut updater = FrameUpdater::new(tuning, 2.0);
        let out = updater.tick(2.0, &input(360.0, Vec2::new(0.5, 0.5)));
        assert_eq!(out.rig, Vec2::ZERO);
        assert_eq!(out.section_rotation, Vec2::splat(2.0));
        assert_eq!(out.camera_y, -1.0);
    }
}
