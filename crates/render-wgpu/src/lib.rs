//! wgpu render backend for the scrollstory scene.
//!
//! Draws the section meshes with one toon material: the diffuse term is
//! banded through a gradient ramp sampled with nearest filtering.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Every section is drawn every frame.
//! - Without a gradient ramp, sections render as flat color.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
