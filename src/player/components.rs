//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
///
/// Exactly one entity carries it. Systems that need the player position
/// query for it instead of holding a global reference.
#[derive(Component)]
pub struct Player;

/// Configuration for the player controller.
#[derive(Resource)]
pub struct PlayerConfig {
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
    /// Side length of the player sprite
    pub size: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 220.0,
            sprint_multiplier: 1.5,
            size: 24.0,
        }
    }
}
