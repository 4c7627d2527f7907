pub mod material;
mod setup;
mod update;

use bevy::prelude::*;

pub use setup::setup_display;
pub use update::{advance_time, debug_readout_system, user_input_system};

/// Marker for the quad carrying the warp material.
#[derive(Component)]
pub struct WarpQuad;

#[derive(Resource)]
pub struct SettingsState {
    /// When set, log the CPU evaluator's view of the warp every frame so the
    /// GPU output can be cross-checked.
    pub debug_readout: bool,
}
