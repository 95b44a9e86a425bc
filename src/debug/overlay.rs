//! Virus debug overlay.
//!
//! Attacking viruses get a red line to their target. Idle viruses get a
//! green outline of their detection range, cyan while a vaccine slows them.
//! Viruses in cooldown draw nothing.

use bevy::color::palettes::css::{AQUA, LIME, RED};
use bevy::color::Srgba;
use bevy::prelude::*;

use crate::core::VaccineCollected;
use crate::enemies::{SpeedModifier, Virus, VirusState, VirusStats};

/// Number of segments in the detection range outline.
pub const RANGE_VERTEX_COUNT: usize = 50;

/// Whether the overlay is drawn.
#[derive(Resource, Default, Debug)]
pub struct VirusDebug {
    pub enabled: bool,
}

/// Debug command: flip the virus overlay.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleVirusDebug;

/// Closed polygon approximating a circle. The last point repeats the first.
pub fn range_polygon(center: Vec2, radius: f32, vertex_count: usize) -> Vec<Vec2> {
    let step = std::f32::consts::TAU / vertex_count as f32;
    let mut points: Vec<Vec2> = (0..vertex_count)
        .map(|i| {
            let theta = step * i as f32;
            center + Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();

    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

pub fn range_color(modifier: &SpeedModifier) -> Srgba {
    if modifier.is_slowed() {
        AQUA
    } else {
        LIME
    }
}

/// Map debug keys to commands. F3 toggles the overlay, F4 hands out a vaccine.
pub fn debug_key_bindings(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut toggles: EventWriter<ToggleVirusDebug>,
    mut vaccines: EventWriter<VaccineCollected>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        toggles.send(ToggleVirusDebug);
    }
    if keyboard.just_pressed(KeyCode::F4) {
        vaccines.send(VaccineCollected { stacks: 1 });
    }
}

pub fn apply_debug_toggle(mut events: EventReader<ToggleVirusDebug>, mut debug: ResMut<VirusDebug>) {
    for _ in events.read() {
        debug.enabled = !debug.enabled;
        let state = if debug.enabled { "on" } else { "off" };
        info!("Virus debug overlay {}", state);
    }
}

pub fn draw_virus_debug(
    debug: Res<VirusDebug>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &Virus, &VirusStats, &SpeedModifier)>,
) {
    if !debug.enabled {
        return;
    }

    for (transform, virus, stats, modifier) in query.iter() {
        let position = transform.translation.truncate();
        match (virus.state(), virus.target()) {
            (VirusState::Attacking, Some(target)) => gizmos.line_2d(position, target, RED),
            (VirusState::Idle, _) => gizmos.linestrip_2d(
                range_polygon(position, stats.detection_range, RANGE_VERTEX_COUNT),
                range_color(modifier),
            ),
            _ => {}
        }
    }
}
