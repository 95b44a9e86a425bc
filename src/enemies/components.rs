//! Virus components.

use std::time::Duration;

use bevy::prelude::*;

use super::error::VirusError;

/// A virus and its attack state.
///
/// Holds at most one target and at most one running cooldown, never both.
#[derive(Component, Default, Debug)]
pub struct Virus {
    target: Option<Vec2>,
    cooldown: Option<Timer>,
}

/// Derived state of a virus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirusState {
    /// Waiting for the player to come within detection range.
    Idle,
    /// Dashing toward the attack point.
    Attacking,
    /// Resting after an attack.
    Cooldown,
}

impl Virus {
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_some()
    }

    pub fn state(&self) -> VirusState {
        match (self.target, &self.cooldown) {
            (Some(_), _) => VirusState::Attacking,
            (None, Some(_)) => VirusState::Cooldown,
            (None, None) => VirusState::Idle,
        }
    }

    /// Lock onto an attack point.
    pub fn begin_attack(&mut self, target: Vec2) -> Result<(), VirusError> {
        if self.is_cooling_down() {
            return Err(VirusError::InvalidState {
                reason: "virus is cooling down",
            });
        }
        if self.target.is_some() {
            return Err(VirusError::InvalidState {
                reason: "virus already has a target",
            });
        }

        self.target = Some(target);
        Ok(())
    }

    /// Drop the target and start resting for `cooldown`.
    pub fn finish_attack(&mut self, cooldown: Duration) {
        self.target = None;
        self.cooldown = Some(Timer::new(cooldown, TimerMode::Once));
    }

    /// Advance the cooldown. Returns true on the tick it expires.
    pub fn tick_cooldown(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.cooldown.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if timer.finished() {
            self.cooldown = None;
            return true;
        }
        false
    }

    /// Time left before the virus may attack again.
    pub fn cooldown_remaining(&self) -> Option<Duration> {
        self.cooldown.as_ref().map(Timer::remaining)
    }
}

/// Virus stats loaded from the RON definition.
#[derive(Component, Clone, Debug)]
pub struct VirusStats {
    /// Movement speed in units per second
    pub speed: f32,
    pub detection_range: f32,
    /// How far past the player the attack point lies
    pub overextend: f32,
    /// Rest period after an attack, in milliseconds
    pub cooldown_ms: f32,
}

impl Default for VirusStats {
    fn default() -> Self {
        Self {
            speed: 4.0,
            detection_range: 10.0,
            overextend: 3.0,
            cooldown_ms: 2000.0,
        }
    }
}

/// Multiplier applied to virus speed and cooldown length.
///
/// `current` is always either `original` or exactly half of it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SpeedModifier {
    current: f32,
    original: f32,
}

impl Default for SpeedModifier {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SpeedModifier {
    pub fn new(original: f32) -> Self {
        Self {
            current: original,
            original,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn original(&self) -> f32 {
        self.original
    }

    /// Halve relative to the original value, so repeats don't compound.
    pub fn slow(&mut self) {
        self.current = self.original * 0.5;
    }

    pub fn restore(&mut self) {
        self.current = self.original;
    }

    pub fn is_slowed(&self) -> bool {
        self.current != self.original
    }
}
