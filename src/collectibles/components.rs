//! Collectible components.

use bevy::prelude::*;

use crate::core::{MedicineCollected, MedicineMissed};

/// Anything the player can pick up.
#[derive(Component, Clone, Copy, Debug)]
pub struct Collectible {
    /// Player must come this close to pick it up
    pub pickup_radius: f32,
}

impl Default for Collectible {
    fn default() -> Self {
        Self { pickup_radius: 20.0 }
    }
}

/// Constant velocity for collectibles floating across the field.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Drift(pub Vec2);

/// What ended a collectible's time in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    Collected,
    Missed,
}

/// Medicine pickup. Only reports to the event bus, holds no state.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Medicine;

impl Medicine {
    pub fn on_collected(&self, events: &mut EventWriter<MedicineCollected>) {
        events.send(MedicineCollected);
    }

    pub fn on_missed(&self, events: &mut EventWriter<MedicineMissed>) {
        events.send(MedicineMissed);
    }
}

/// Spawns medicine at the top of the field on a fixed interval.
#[derive(Resource)]
pub struct MedicineSpawner {
    pub timer: Timer,
    /// Downward speed range in units per second
    pub fall_speed: (f32, f32),
}

impl Default for MedicineSpawner {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(3.0, TimerMode::Repeating),
            fall_speed: (40.0, 90.0),
        }
    }
}
