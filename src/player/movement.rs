//! Top-down player movement and camera setup.

use bevy::prelude::*;

use super::components::*;
use crate::core::{GameState, PlayArea};

/// Set up player systems.
pub fn setup_movement_systems(app: &mut App) {
    app
        .init_resource::<PlayerConfig>()
        .add_systems(Startup, spawn_camera)
        .add_systems(OnEnter(GameState::InGame), spawn_player)
        .add_systems(
            Update,
            player_movement.run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the player in the middle of the play area (once).
fn spawn_player(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    existing: Query<(), With<Player>>,
) {
    // OnEnter(InGame) also fires when unpausing
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.85, 0.85, 0.95),
            custom_size: Some(Vec2::splat(config.size)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));

    info!("Player spawned");
}

/// Read WASD/arrow input into a normalized direction.
fn input_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;

    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }

    direction.normalize_or_zero()
}

/// Move the player and keep them inside the play area.
pub fn player_movement(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    area: Res<PlayArea>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = player_query.get_single_mut() else {
        return;
    };

    let direction = input_direction(&keyboard);
    if direction == Vec2::ZERO {
        return;
    }

    let mut speed = config.move_speed;
    if keyboard.pressed(KeyCode::ShiftLeft) {
        speed *= config.sprint_multiplier;
    }

    let next = transform.translation.truncate() + direction * speed * time.delta_secs();
    let clamped = next.clamp(area.min, area.max);
    transform.translation.x = clamped.x;
    transform.translation.y = clamped.y;
}
