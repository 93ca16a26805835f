//! Scene graph: three section meshes sharing one toon material, a
//! directional light, and a camera held by a parallax rig.
//!
//! # Invariants
//! - Sections are created once and never added or removed.
//! - All sections reference the same material instance.
//! - The scene only changes through `apply_frame`, `resize` and material edits.

pub mod camera;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;

pub use camera::{CameraRig, PerspectiveCamera};
pub use geometry::{GeometryKind, MeshData};
pub use light::DirectionalLight;
pub use material::{MaterialHandle, Shading, ToonMaterial};
pub use scene::{Scene, SceneError, Section};
