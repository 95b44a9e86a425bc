//! Collectible plugin - medicine pickup and miss detection.

use bevy::prelude::*;

use super::components::MedicineSpawner;
use super::systems;
use crate::core::GameState;

/// Collectible plugin - spawns medicine and reports what happens to it.
pub struct CollectiblePlugin;

impl Plugin for CollectiblePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MedicineSpawner>().add_systems(
            Update,
            (
                systems::spawn_falling_medicine,
                systems::drift_collectibles,
                systems::resolve_medicine,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}
