//! Debug module - overlays and commands for inspecting viruses.

mod overlay;
mod plugin;

pub use overlay::{range_polygon, ToggleVirusDebug, VirusDebug, RANGE_VERTEX_COUNT};
pub use plugin::DebugPlugin;
