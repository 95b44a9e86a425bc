//! Core game module - states, events, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod play_area;
mod plugin;
mod states;
mod vaccine;

pub use events::*;
pub use play_area::PlayArea;
pub use plugin::CorePlugin;
pub use states::*;
pub use vaccine::{track_vaccine_effect, VaccineEffect, VaccineSystems};
