//! Virus Hunt - Entry Point
//!
//! Controls:
//! - WASD / arrows: Move
//! - Shift: Sprint
//! - Escape: Pause/Unpause
//! - F3: Toggle virus debug overlay
//! - F4: Grant a vaccine

use bevy::prelude::*;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.06, 0.07, 0.09)))
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Virus Hunt".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(virus_hunt::VirusHuntPlugin)

        .run();
}
