//! Collectible systems: drifting, pickup, and spawning.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use crate::core::{MedicineCollected, MedicineMissed, PlayArea};
use crate::player::Player;

/// Decide whether a collectible at `position` leaves play this frame.
///
/// Being picked up wins over drifting out on the same frame.
pub fn resolve_pickup(
    position: Vec2,
    collectible: &Collectible,
    player: Option<Vec2>,
    area: &PlayArea,
) -> Option<PickupOutcome> {
    if player.is_some_and(|p| p.distance(position) <= collectible.pickup_radius) {
        return Some(PickupOutcome::Collected);
    }
    if !area.contains(position) {
        return Some(PickupOutcome::Missed);
    }
    None
}

/// Move drifting collectibles.
pub fn drift_collectibles(time: Res<Time>, mut query: Query<(&mut Transform, &Drift)>) {
    for (mut transform, drift) in query.iter_mut() {
        transform.translation += (drift.0 * time.delta_secs()).extend(0.0);
    }
}

/// Report collected or missed medicine and remove it from play.
///
/// Each medicine is despawned in the same pass that reports it, so it can
/// only ever report once.
pub fn resolve_medicine(
    mut commands: Commands,
    area: Res<PlayArea>,
    player_query: Query<&Transform, With<Player>>,
    medicine_query: Query<(Entity, &Transform, &Collectible, &Medicine), Without<Player>>,
    mut collected: EventWriter<MedicineCollected>,
    mut missed: EventWriter<MedicineMissed>,
) {
    let player = player_query
        .get_single()
        .ok()
        .map(|transform| transform.translation.truncate());

    for (entity, transform, collectible, medicine) in medicine_query.iter() {
        let position = transform.translation.truncate();
        let Some(outcome) = resolve_pickup(position, collectible, player, &area) else {
            continue;
        };

        match outcome {
            PickupOutcome::Collected => {
                info!("Medicine collected");
                medicine.on_collected(&mut collected);
            }
            PickupOutcome::Missed => {
                info!("Medicine missed");
                medicine.on_missed(&mut missed);
            }
        }

        commands.entity(entity).despawn_recursive();
    }
}

/// Spawn a medicine at `position`.
pub fn spawn_medicine(commands: &mut Commands, position: Vec2, drift: Vec2) -> Entity {
    commands
        .spawn((
            Medicine,
            Collectible::default(),
            Drift(drift),
            Sprite {
                color: Color::srgb(0.3, 0.85, 0.45),
                custom_size: Some(Vec2::splat(14.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.2)),
            Name::new("Medicine"),
        ))
        .id()
}

/// Drop new medicine from the top edge on the spawner interval.
pub fn spawn_falling_medicine(
    mut commands: Commands,
    time: Res<Time>,
    area: Res<PlayArea>,
    mut spawner: ResMut<MedicineSpawner>,
) {
    spawner.timer.tick(time.delta());
    if !spawner.timer.just_finished() {
        return;
    }

    let mut rng = rand::thread_rng();
    let x = rng.gen_range(area.min.x..=area.max.x);
    let (slow, fast) = spawner.fall_speed;
    let speed = rng.gen_range(slow.min(fast)..=slow.max(fast));

    spawn_medicine(&mut commands, Vec2::new(x, area.max.y), Vec2::new(0.0, -speed));
    debug!("Spawned medicine at x = {:.0}", x);
}
