//! Global events used for cross-system communication.
//!
//! This is the game's event bus. Collectibles report what happened to them
//! here, and enemies subscribe to the vaccine notifications instead of
//! reaching for a global event system.

use bevy::prelude::*;

/// Sent when the player picks up a medicine.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicineCollected;

/// Sent when a medicine leaves play without being picked up.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicineMissed;

/// Sent when the player collects a vaccine.
///
/// Starts (or restarts) the vaccine effect. Viruses slow down while the
/// effect is active.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineCollected {
    /// How many vaccine stacks were picked up at once
    pub stacks: u32,
}

/// Sent once when the vaccine effect wears off.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineEffectEnd;
