//! Player module - the entity viruses hunt and medicine is picked up by.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::player_movement;
pub use plugin::PlayerPlugin;
