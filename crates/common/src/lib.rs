//! Shared types for the scrollstory scene.
//!
//! # Invariants
//! - A `Viewport` never has a zero dimension.
//! - Every `SceneConfig` default reproduces the tuned visual behavior.

pub mod color;
pub mod config;
pub mod types;
pub mod viewport;

pub use color::{Color, ColorParseError};
pub use config::{CameraConfig, ConfigError, LightConfig, SceneConfig, Tuning, WindowConfig};
pub use types::Transform;
pub use viewport::{Viewport, ViewportError};
