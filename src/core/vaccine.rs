//! Lifetime of the vaccine effect.
//!
//! The event bus owns how long a vaccine lasts. Viruses only hear about the
//! start (`VaccineCollected`) and the end (`VaccineEffectEnd`).

use bevy::prelude::*;

use super::events::{VaccineCollected, VaccineEffectEnd};

/// Frame ordering for vaccine handling.
///
/// Debug input first, then the effect timer, then the viruses, so an expiry
/// and a pickup on the same frame reach the viruses together.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaccineSystems {
    /// Anything that hands out vaccines
    Input,
    /// `track_vaccine_effect`
    Track,
    /// Systems reacting to vaccine events
    Apply,
}

/// Running vaccine effect, if any.
#[derive(Resource)]
pub struct VaccineEffect {
    /// Seconds one vaccine stack lasts
    pub duration_per_stack: f32,
    timer: Option<Timer>,
}

impl Default for VaccineEffect {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl VaccineEffect {
    pub fn new(duration_per_stack: f32) -> Self {
        Self {
            duration_per_stack,
            timer: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// (Re)start the effect. Zero stacks still count as one.
    pub fn start(&mut self, stacks: u32) {
        let seconds = self.duration_per_stack.max(0.0) * stacks.max(1) as f32;
        self.timer = Some(Timer::from_seconds(seconds, TimerMode::Once));
    }

    /// Advance the effect. Returns true on the frame it expires.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if timer.finished() {
            self.timer = None;
            return true;
        }
        false
    }
}

/// Tick the running effect, then start a new one for any vaccine picked up
/// this frame.
///
/// Expiry is checked first so a vaccine collected on the expiry frame keeps
/// the effect running.
pub fn track_vaccine_effect(
    time: Res<Time>,
    mut effect: ResMut<VaccineEffect>,
    mut collected: EventReader<VaccineCollected>,
    mut ended: EventWriter<VaccineEffectEnd>,
) {
    if effect.tick(time.delta()) {
        info!("Vaccine effect ended");
        ended.send(VaccineEffectEnd);
    }

    for event in collected.read() {
        if effect.is_active() {
            info!("Vaccine refreshed ({} stack(s))", event.stacks);
        } else {
            info!("Vaccine collected ({} stack(s))", event.stacks);
        }
        effect.start(event.stacks);
    }
}
