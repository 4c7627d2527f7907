use super::material::NoiseWarpMaterial;
use super::SettingsState;
use bevy::prelude::*;
use log::debug;

const INTENSITY_STEP: f32 = 0.01;
const SCALE_STEP: f32 = 0.5;
const SPEED_STEP: f32 = 0.1;

/// Drives the material clock. The shader scrolls its noise domain along U at
/// `speed` domain units per second of this value; the module does not own a
/// clock, bevy's `Time` is the source.
pub fn advance_time(mut warp_materials: ResMut<Assets<NoiseWarpMaterial>>, run_time: Res<Time>) {
    for (_, material) in warp_materials.iter_mut() {
        material.params.time = run_time.elapsed_secs();
    }
}

/// Live parameter tuning:
/// up/down      warp intensity
/// left/right   noise scale
/// [ / ]        scroll speed
/// d            toggle the CPU cross-check readout
pub fn user_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut warp_materials: ResMut<Assets<NoiseWarpMaterial>>,
    mut settings: ResMut<SettingsState>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyD) {
        settings.debug_readout = !settings.debug_readout;
        debug!("debug readout: {}", settings.debug_readout);
    }

    let mut intensity_delta = 0.0;
    let mut scale_delta = 0.0;
    let mut speed_delta = 0.0;
    if keyboard_input.just_pressed(KeyCode::ArrowUp) {
        intensity_delta += INTENSITY_STEP;
    }
    if keyboard_input.just_pressed(KeyCode::ArrowDown) {
        intensity_delta -= INTENSITY_STEP;
    }
    if keyboard_input.just_pressed(KeyCode::ArrowRight) {
        scale_delta += SCALE_STEP;
    }
    if keyboard_input.just_pressed(KeyCode::ArrowLeft) {
        scale_delta -= SCALE_STEP;
    }
    if keyboard_input.just_pressed(KeyCode::BracketRight) {
        speed_delta += SPEED_STEP;
    }
    if keyboard_input.just_pressed(KeyCode::BracketLeft) {
        speed_delta -= SPEED_STEP;
    }
    if intensity_delta == 0.0 && scale_delta == 0.0 && speed_delta == 0.0 {
        // don't touch the assets, mutable access alone re-uploads them
        return;
    }

    for (_, material) in warp_materials.iter_mut() {
        material.set_intensity(material.params.intensity + intensity_delta);
        material.set_scale(material.params.scale + scale_delta);
        material.set_speed(material.params.speed + speed_delta);
        debug!(
            "warp parameters: intensity {} scale {} speed {}",
            material.params.intensity, material.params.scale, material.params.speed
        );
    }
}

/// Runs the CPU reference evaluator at the quad center and logs the result.
/// Useful to sanity-check what the fragment shader should be producing for
/// the currently bound parameters.
pub fn debug_readout_system(
    settings: Res<SettingsState>,
    warp_materials: Res<Assets<NoiseWarpMaterial>>,
) {
    if !settings.debug_readout {
        return;
    }
    for (_, material) in warp_materials.iter() {
        let params = material.field_parameters();
        let sample = uvwarp_field::evaluate(Vec2::splat(0.5), material.params.time, &params);
        debug!(
            "center warp: uv ({:.4}, {:.4}) tint {:?} opacity {}",
            sample.uv.x, sample.uv.y, sample.tint, sample.opacity
        );
    }
}
