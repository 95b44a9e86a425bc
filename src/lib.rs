//! Virus Hunt - a top-down 2D game slice in Bevy.
//!
//! Viruses lurk on the field and dash at the player when they come close.
//! Medicine drifts down from the top and reports to the event bus whether
//! it was picked up or missed. Vaccines slow every virus for a while.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, the event bus, vaccine effect lifetime
//! - **Player**: Top-down movement, camera
//! - **Collectibles**: Medicine pickup and miss detection
//! - **Enemies**: Virus definitions, spawning, attack state machine
//! - **Debug**: Toggleable virus overlay and debug commands

pub mod collectibles;
pub mod core;
pub mod debug;
pub mod enemies;
pub mod player;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct VirusHuntPlugin;

impl Plugin for VirusHuntPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Medicine
            .add_plugins(collectibles::CollectiblePlugin)

            // Viruses
            .add_plugins(enemies::EnemyPlugin)

            // Debug overlay
            .add_plugins(debug::DebugPlugin);
    }
}
