/// Fixed-rate timestamp source for hosts without a display refresh, such as
/// the headless CLI and tests.
///
/// Yields the elapsed time of each successive frame: `dt, 2 * dt, ...`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StepError {
    #[error("frame rate must be finite and positive, got {0}")]
    InvalidRate(f32),
}

#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    frame: u64,
    remaining: u64,
}

impl FixedStep {
    pub fn new(fps: f32, frames: u64) -> Result<Self, StepError> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(StepError::InvalidRate(fps));
        }
        Ok(Self {
            dt: 1.0 / fps,
            frame: 0,
            remaining: frames,
        })
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl Iterator for FixedStep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.frame += 1;
        // multiply rather than accumulate so long runs do not drift
        Some(self.frame as f32 * self.dt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FixedStep {}
