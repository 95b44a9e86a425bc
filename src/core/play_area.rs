//! Bounds of the playable field.

use bevy::prelude::*;

/// Axis-aligned rectangle that counts as "in play".
///
/// Collectibles that drift outside of it are considered missed.
#[derive(Resource, Clone, Copy, Debug)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            min: Vec2::new(-640.0, -360.0),
            max: Vec2::new(640.0, 360.0),
        }
    }
}

impl PlayArea {
    /// Inclusive containment check.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
