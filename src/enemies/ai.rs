//! Virus AI: detect, dash, rest.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{SpeedModifier, Virus, VirusStats};
use super::error::VirusError;
use crate::core::{VaccineCollected, VaccineEffectEnd};
use crate::player::Player;

/// Compute the point a virus dashes to when it attacks.
///
/// The angle comes from `acos`, so it only spans [0, π] and the vertical
/// offset is scaled by the horizontal one. The resulting point is not on the
/// line through the player. Existing tuning relies on this path, keep it.
pub fn attack_target(origin: Vec2, player: Vec2, overextend: f32) -> Result<Vec2, VirusError> {
    let difference = player - origin;
    let distance = difference.length();
    if distance == 0.0 {
        return Err(VirusError::DegenerateTrajectory);
    }

    // Rounding can push the ratio just past ±1
    let theta = (difference.x / distance).clamp(-1.0, 1.0).acos();

    let extended = distance + overextend;
    let x = theta.cos() * extended;
    let y = theta.sin() * x;

    Ok(origin + Vec2::new(x, y))
}

/// Step from `current` toward `target` by at most `max_delta`.
///
/// Lands exactly on `target` once it is within reach.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();

    if distance <= max_delta || distance == 0.0 {
        return target;
    }

    current + delta / distance * max_delta
}

/// Cooldown length for the modifier active when the attack lands.
///
/// Saturates at `Duration::MAX` for values too large to represent.
pub fn cooldown_duration(cooldown_ms: f32, modifier: f32) -> Duration {
    Duration::try_from_secs_f32((cooldown_ms * modifier).max(0.0) / 1000.0)
        .unwrap_or(Duration::MAX)
}

/// Run one tick of the virus state machine.
///
/// - Cooldown expiring returns the virus to Idle; it may attack next tick.
/// - Idle with the player in range picks an attack point.
/// - Attacking moves toward the point and starts the cooldown on arrival.
pub fn virus_ai(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Virus>)>,
    mut virus_query: Query<(&mut Transform, &mut Virus, &VirusStats, &SpeedModifier), Without<Player>>,
    mut reported_missing_player: Local<bool>,
) {
    if virus_query.is_empty() {
        return;
    }

    let player_pos = match player_query.get_single() {
        Ok(transform) => {
            *reported_missing_player = false;
            transform.translation.truncate()
        }
        Err(_) => {
            if !*reported_missing_player {
                error!("{}", VirusError::InvalidReference("player"));
                *reported_missing_player = true;
            }
            return;
        }
    };

    for (mut transform, mut virus, stats, modifier) in virus_query.iter_mut() {
        if virus.tick_cooldown(time.delta()) {
            debug!("Virus cooldown over");
            continue;
        }

        let position = transform.translation.truncate();
        let player_in_range = position.distance(player_pos) <= stats.detection_range;

        if !virus.is_cooling_down() && player_in_range && virus.target().is_none() {
            let started = attack_target(position, player_pos, stats.overextend)
                .and_then(|target| virus.begin_attack(target).map(|_| target));
            match started {
                Ok(target) => debug!("Virus attacking toward {:?}", target),
                Err(e) if e.is_defect() => error!("{}", e),
                Err(e) => debug!("{}", e),
            }
        } else if let Some(target) = virus.target() {
            let step = stats.speed * modifier.current() * time.delta_secs();
            let next = move_towards(position, target, step);
            transform.translation.x = next.x;
            transform.translation.y = next.y;

            if next == target {
                let cooldown = cooldown_duration(stats.cooldown_ms, modifier.current());
                virus.finish_attack(cooldown);
                debug!("Virus reached target, resting for {:?}", cooldown);
            }
        }
    }
}

/// Slow viruses while a vaccine is active and restore them when it ends.
///
/// Ends are applied before pickups so a vaccine collected on the expiry
/// frame keeps viruses slowed.
pub fn apply_vaccine_events(
    mut collected: EventReader<VaccineCollected>,
    mut ended: EventReader<VaccineEffectEnd>,
    mut virus_query: Query<&mut SpeedModifier, With<Virus>>,
) {
    let effect_ended = ended.read().count() > 0;
    let vaccine_collected = collected.read().count() > 0;

    if effect_ended {
        for mut modifier in virus_query.iter_mut() {
            modifier.restore();
        }
    }

    if vaccine_collected {
        for mut modifier in virus_query.iter_mut() {
            modifier.slow();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::VirusState;
    use bevy::time::TimePlugin;

    const TICK: Duration = Duration::from_millis(100);

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.distance(b) < 1e-4, "{a:?} != {b:?}");
    }

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
        app.insert_resource(Time::<()>::default());
        app.add_event::<VaccineCollected>();
        app.add_event::<VaccineEffectEnd>();
        app.add_systems(Update, (apply_vaccine_events, virus_ai).chain());
        app
    }

    fn spawn_player(app: &mut App, position: Vec2) -> Entity {
        app.world_mut()
            .spawn((Player, Transform::from_translation(position.extend(0.0))))
            .id()
    }

    fn spawn_virus(app: &mut App, position: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Virus::default(),
                VirusStats {
                    speed: 4.0,
                    detection_range: 10.0,
                    overextend: 3.0,
                    cooldown_ms: 2000.0,
                },
                SpeedModifier::new(1.0),
                Transform::from_translation(position.extend(0.5)),
            ))
            .id()
    }

    fn step(app: &mut App) {
        app.world_mut().resource_mut::<Time>().advance_by(TICK);
        app.update();
    }

    fn virus_position(app: &App, entity: Entity) -> Vec2 {
        app.world().get::<Transform>(entity).unwrap().translation.truncate()
    }

    fn virus(app: &App, entity: Entity) -> &Virus {
        app.world().get::<Virus>(entity).unwrap()
    }

    /// Run ticks until the virus lands, checking it closes in every tick.
    fn run_until_landed(app: &mut App, entity: Entity) -> usize {
        let target = virus(app, entity).target().unwrap();
        let mut last_distance = virus_position(app, entity).distance(target);

        for ticks in 1..=200 {
            step(app);
            let v = virus(app, entity);
            assert!(!(v.is_cooling_down() && v.target().is_some()));

            if v.target().is_none() {
                assert_eq!(virus_position(app, entity), target);
                return ticks;
            }

            let distance = virus_position(app, entity).distance(target);
            assert!(distance < last_distance);
            last_distance = distance;
        }
        panic!("virus never reached its target");
    }

    #[test]
    fn target_follows_acos_formula() {
        // d = (3, 4), θ = acos(0.6): x = 0.6 * 8, y = 0.8 * x
        let target = attack_target(Vec2::ZERO, Vec2::new(3.0, 4.0), 3.0).unwrap();
        assert_close(target, Vec2::new(4.8, 3.84));
    }

    #[test]
    fn target_is_offset_from_origin() {
        let origin = Vec2::new(10.0, -2.0);
        let target = attack_target(origin, Vec2::new(7.0, -6.0), 3.0).unwrap();
        // d = (-3, -4): cos θ = -0.6, sin θ = 0.8, x = -4.8, y = -3.84
        assert_close(target, origin + Vec2::new(-4.8, -3.84));
        assert_ne!(target, origin);
    }

    #[test]
    fn player_on_top_is_degenerate() {
        let result = attack_target(Vec2::ONE, Vec2::ONE, 3.0);
        assert_eq!(result, Err(VirusError::DegenerateTrajectory));
    }

    #[test]
    fn move_towards_never_overshoots() {
        let target = Vec2::new(1.0, 0.0);
        assert_eq!(move_towards(Vec2::ZERO, target, 5.0), target);
        assert_close(move_towards(Vec2::ZERO, target, 0.25), Vec2::new(0.25, 0.0));
        assert_eq!(move_towards(target, target, 0.0), target);
    }

    #[test]
    fn cooldown_scales_with_modifier() {
        assert_eq!(cooldown_duration(2000.0, 1.0), Duration::from_secs(2));
        assert_eq!(cooldown_duration(2000.0, 0.5), Duration::from_secs(1));
        assert_eq!(cooldown_duration(-5.0, 1.0), Duration::ZERO);
    }

    #[test]
    fn huge_cooldown_saturates() {
        assert_eq!(cooldown_duration(f32::INFINITY, 1.0), Duration::MAX);
        assert_eq!(cooldown_duration(f32::MAX, 1.0), Duration::MAX);
        assert_eq!(cooldown_duration(f32::NAN, 1.0), Duration::ZERO);
    }

    #[test]
    fn player_in_range_starts_attack() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(3.0, 4.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        step(&mut app);

        let v = virus(&app, entity);
        assert_eq!(v.state(), VirusState::Attacking);
        assert_close(v.target().unwrap(), Vec2::new(4.8, 3.84));
        // Picking a target does not move the virus
        assert_eq!(virus_position(&app, entity), Vec2::ZERO);

        step(&mut app);
        let moved = virus_position(&app, entity).length();
        assert!((moved - 0.4).abs() < 1e-4);
    }

    #[test]
    fn player_out_of_range_keeps_idle() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(10.5, 0.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        for _ in 0..5 {
            step(&mut app);
        }

        assert_eq!(virus(&app, entity).state(), VirusState::Idle);
        assert_eq!(virus_position(&app, entity), Vec2::ZERO);
    }

    #[test]
    fn player_on_range_edge_is_detected() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(10.0, 0.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        step(&mut app);
        assert_eq!(virus(&app, entity).state(), VirusState::Attacking);
    }

    #[test]
    fn landing_starts_cooldown_then_idles() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(3.0, 4.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        step(&mut app);
        run_until_landed(&mut app, entity);

        let v = virus(&app, entity);
        assert_eq!(v.state(), VirusState::Cooldown);
        assert_eq!(v.cooldown_remaining(), Some(Duration::from_secs(2)));

        // 1.9s later the player is still in range but the virus rests
        for _ in 0..19 {
            step(&mut app);
            let v = virus(&app, entity);
            assert!(v.is_cooling_down());
            assert_eq!(v.target(), None);
        }

        step(&mut app);
        let v = virus(&app, entity);
        assert_eq!(v.state(), VirusState::Idle);

        // Next tick is free to attack again
        step(&mut app);
        assert_eq!(virus(&app, entity).state(), VirusState::Attacking);
    }

    #[test]
    fn vaccine_slows_movement_and_shortens_cooldown() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(3.0, 4.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        app.world_mut().send_event(VaccineCollected { stacks: 1 });
        step(&mut app);
        assert_eq!(app.world().get::<SpeedModifier>(entity).unwrap().current(), 0.5);

        step(&mut app);
        let moved = virus_position(&app, entity).length();
        assert!((moved - 0.2).abs() < 1e-4);

        run_until_landed(&mut app, entity);
        assert_eq!(
            virus(&app, entity).cooldown_remaining(),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn vaccine_during_cooldown_keeps_landing_length() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(3.0, 4.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        step(&mut app);
        run_until_landed(&mut app, entity);

        app.world_mut().send_event(VaccineCollected { stacks: 1 });
        for _ in 0..19 {
            step(&mut app);
            assert!(virus(&app, entity).is_cooling_down());
        }
        assert_eq!(app.world().get::<SpeedModifier>(entity).unwrap().current(), 0.5);

        step(&mut app);
        assert_eq!(virus(&app, entity).state(), VirusState::Idle);
    }

    #[test]
    fn vaccine_ending_during_cooldown_keeps_landing_length() {
        let mut app = setup_app();
        spawn_player(&mut app, Vec2::new(3.0, 4.0));
        let entity = spawn_virus(&mut app, Vec2::ZERO);

        app.world_mut().send_event(VaccineCollected { stacks: 1 });
        step(&mut app);
        run_until_landed(&mut app, entity);

        app.world_mut().send_event(VaccineEffectEnd);
        for _ in 0..9 {
            step(&mut app);
            assert!(virus(&app, entity).is_cooling_down());
        }
        assert_eq!(app.world().get::<SpeedModifier>(entity).unwrap().current(), 1.0);

        step(&mut app);
        assert_eq!(virus(&app, entity).state(), VirusState::Idle);
    }

    #[test]
    fn repeated_vaccines_do_not_compound() {
        let mut app = setup_app();
        let entity = spawn_virus(&mut app, Vec2::ZERO);
        spawn_player(&mut app, Vec2::new(50.0, 0.0));

        app.world_mut().send_event(VaccineCollected { stacks: 1 });
        step(&mut app);
        app.world_mut().send_event(VaccineCollected { stacks: 1 });
        step(&mut app);
        assert_eq!(app.world().get::<SpeedModifier>(entity).unwrap().current(), 0.5);

        app.world_mut().send_event(VaccineEffectEnd);
        step(&mut app);
        assert_eq!(app.world().get::<SpeedModifier>(entity).unwrap().current(), 1.0);
    }

    #[test]
    fn vaccine_on_expiry_frame_keeps_slow() {
        let mut app = setup_app();
        let entity = spawn_virus(&mut app, Vec2::ZERO);
        spawn_player(&mut app, Vec2::new(50.0, 0.0));

        app.world_mut().send_event(VaccineEffectEnd);
        app.world_mut().send_event(VaccineCollected { stacks: 2 });
        step(&mut app);
        assert_eq!(app.world().get::<SpeedModifier>(entity).unwrap().current(), 0.5);
    }

    #[test]
    fn missing_player_leaves_viruses_untouched() {
        let mut app = setup_app();
        let entity = spawn_virus(&mut app, Vec2::ZERO);
        app.world_mut()
            .get_mut::<Virus>(entity)
            .unwrap()
            .begin_attack(Vec2::new(5.0, 0.0))
            .unwrap();

        step(&mut app);
        step(&mut app);

        assert_eq!(virus_position(&app, entity), Vec2::ZERO);
        assert_eq!(virus(&app, entity).state(), VirusState::Attacking);
    }
}
