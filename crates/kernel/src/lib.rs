//! Frame Updater: advances the animated scene state by exactly one frame.
//!
//! # Invariants
//! - Section rotation is a pure function of elapsed time.
//! - Rig position is an exponential approach and depends on frame history.
//! - A tick reads one `FrameInput` snapshot; nothing changes it mid-tick.

pub mod clock;
pub mod driver;
pub mod frame;

pub use clock::Clock;
pub use driver::{FixedStep, StepError};
pub use frame::{
    FrameInput, FrameOutput, FrameState, FrameUpdater, camera_offset, parallax_target,
    section_rotation, smooth_toward,
};
