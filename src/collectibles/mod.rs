//! Collectibles module - items the player can pick up.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CollectiblePlugin;
pub use systems::{resolve_pickup, spawn_medicine};
