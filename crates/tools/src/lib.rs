//! Developer Tooling: scene inspector and the color debug panel.
//!
//! # Invariants
//! - The inspector is read-only.
//! - The panel edits the shared section material and nothing else.

pub mod inspector;
pub mod panel;

pub use inspector::{SceneInspector, SceneSummary};
pub use panel::DebugPanel;

pub fn crate_info() -> &'static str {
    "scrollstory-tools v0.1.0"
}
