//! Virus definition loading from RON.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::components::{SpeedModifier, VirusStats};
use super::error::DataLoadError;

const VIRUS_DEFINITION_PATH: &str = "assets/data/enemies/virus.ron";

/// Virus definition loaded from assets/data/enemies/virus.ron.
#[derive(Resource, Deserialize, Clone, Debug, PartialEq)]
pub struct VirusDefinition {
    pub name: String,
    pub speed: f32,
    pub detection_range: f32,
    pub overextend: f32,
    pub cooldown_ms: f32,
    #[serde(default = "default_speed_modifier")]
    pub speed_modifier: f32,
    /// Sprite radius
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// How many viruses to place when the game starts
    #[serde(default = "default_spawn_count")]
    pub spawn_count: u32,
}

fn default_speed_modifier() -> f32 {
    1.0
}

fn default_radius() -> f32 {
    12.0
}

fn default_spawn_count() -> u32 {
    3
}

impl Default for VirusDefinition {
    fn default() -> Self {
        Self {
            name: "Virus".to_string(),
            speed: 4.0,
            detection_range: 10.0,
            overextend: 3.0,
            cooldown_ms: 2000.0,
            speed_modifier: default_speed_modifier(),
            radius: default_radius(),
            spawn_count: default_spawn_count(),
        }
    }
}

impl VirusDefinition {
    /// Convert to VirusStats component.
    pub fn to_stats(&self) -> VirusStats {
        VirusStats {
            speed: self.speed,
            detection_range: self.detection_range,
            overextend: self.overextend,
            cooldown_ms: self.cooldown_ms,
        }
    }

    pub fn to_speed_modifier(&self) -> SpeedModifier {
        SpeedModifier::new(self.speed_modifier)
    }

    pub fn from_ron(contents: &str, path: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, DataLoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron(&contents, &display)
    }

    /// Load the definition, falling back to defaults on any failure.
    pub fn load() -> Self {
        match Self::from_file(Path::new(VIRUS_DEFINITION_PATH)) {
            Ok(definition) => {
                info!("Loaded virus definition: {}", definition.name);
                definition
            }
            Err(e @ DataLoadError::FileNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// System to load the virus definition at startup.
pub fn load_virus_definition(mut commands: Commands) {
    commands.insert_resource(VirusDefinition::load());
}
