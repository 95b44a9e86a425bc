//! Debug plugin - developer toggles and overlays.

use bevy::prelude::*;

use super::overlay::*;
use crate::core::VaccineSystems;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VirusDebug>()
            .add_event::<ToggleVirusDebug>()
            .add_systems(
                Update,
                (
                    debug_key_bindings.in_set(VaccineSystems::Input),
                    apply_debug_toggle,
                    draw_virus_debug.after(VaccineSystems::Apply),
                )
                    .chain(),
            );
    }
}
