//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::play_area::PlayArea;
use super::states::*;
use super::vaccine::{track_vaccine_effect, VaccineEffect, VaccineSystems};

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Paused)
/// - The event bus (medicine and vaccine notifications)
/// - The vaccine effect timer and its system ordering
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<MedicineCollected>()
            .add_event::<MedicineMissed>()
            .add_event::<VaccineCollected>()
            .add_event::<VaccineEffectEnd>()

            .init_resource::<PlayArea>()
            .init_resource::<VaccineEffect>()

            // Definitions are read at Startup, so gameplay can begin right away
            .add_systems(OnEnter(GameState::Loading), transition_to_game)

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame).or(in_state(GameState::Paused)))
            )

            .configure_sets(
                Update,
                (
                    VaccineSystems::Input,
                    VaccineSystems::Track,
                    VaccineSystems::Apply,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                track_vaccine_effect
                    .in_set(VaccineSystems::Track)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

fn transition_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}
