//! Enemies module - virus entities, AI, and spawning.

mod ai;
mod components;
pub mod data;
mod error;
mod plugin;
mod spawning;

pub use ai::{apply_vaccine_events, attack_target, cooldown_duration, move_towards, virus_ai};
pub use components::*;
pub use data::VirusDefinition;
pub use error::{DataLoadError, VirusError};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_virus;
