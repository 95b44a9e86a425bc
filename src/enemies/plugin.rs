//! Enemy plugin - registers all virus systems.

use bevy::prelude::*;

use super::ai;
use super::data::load_virus_definition;
use super::spawning::spawn_initial_viruses;
use crate::core::{GameState, VaccineSystems};

/// Enemy plugin - handles virus definitions, spawning, and AI.
///
/// Viruses have no physics step, so nothing is registered in FixedUpdate.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, load_virus_definition)
            .add_systems(OnEnter(GameState::InGame), spawn_initial_viruses)
            // Vaccine changes apply before this frame's movement
            .add_systems(
                Update,
                (ai::apply_vaccine_events, ai::virus_ai)
                    .chain()
                    .in_set(VaccineSystems::Apply)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
