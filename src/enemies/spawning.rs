//! Virus spawning.

use bevy::prelude::*;
use rand::Rng;

use super::components::Virus;
use super::data::VirusDefinition;
use crate::core::PlayArea;

/// Viruses never spawn closer than this to the middle of the field.
const SAFE_SPAWN_RADIUS: f32 = 260.0;

/// Spawn a single virus from its definition.
pub fn spawn_virus(commands: &mut Commands, definition: &VirusDefinition, position: Vec2) -> Entity {
    let entity = commands
        .spawn((
            Virus::default(),
            definition.to_stats(),
            definition.to_speed_modifier(),
            Sprite {
                color: Color::srgb(0.75, 0.2, 0.3),
                custom_size: Some(Vec2::splat(definition.radius * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            Name::new(definition.name.clone()),
        ))
        .id();

    info!("Spawned {} at ({:.0}, {:.0})", definition.name, position.x, position.y);
    entity
}

/// Pick a random point inside the play area, away from the player's start.
pub fn random_spawn_point(rng: &mut impl Rng, area: &PlayArea) -> Vec2 {
    loop {
        let point = Vec2::new(
            rng.gen_range(area.min.x..=area.max.x),
            rng.gen_range(area.min.y..=area.max.y),
        );
        if point.length() >= SAFE_SPAWN_RADIUS || area.size().min_element() < SAFE_SPAWN_RADIUS * 2.0 {
            return point;
        }
    }
}

/// Scatter the starting viruses when gameplay begins.
pub fn spawn_initial_viruses(
    mut commands: Commands,
    definition: Res<VirusDefinition>,
    area: Res<PlayArea>,
    existing: Query<(), With<Virus>>,
) {
    // OnEnter(InGame) also fires when unpausing
    if !existing.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();
    for _ in 0..definition.spawn_count {
        let position = random_spawn_point(&mut rng, &area);
        spawn_virus(&mut commands, &definition, position);
    }
}
