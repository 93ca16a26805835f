//! Input handling: host events in, one `FrameInput` snapshot per frame out.
//!
//! # Invariants
//! - Each event writes one value and returns; nothing here reads frame state.
//! - A rejected event leaves the input state untouched.

pub mod event;
pub mod state;

pub use event::InputEvent;
pub use state::{InputError, InputState};
