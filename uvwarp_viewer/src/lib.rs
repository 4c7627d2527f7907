use anyhow::Result;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::sprite::Material2dPlugin;

pub mod display_system;

const FPS: u64 = 60;

pub fn close_on_esc(
    mut commands: Commands,
    windows: Query<Entity, With<Window>>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        for window in &windows {
            commands.entity(window).despawn();
        }
    }
}

pub fn frame_limiter_to_system(fps: u64) -> impl FnMut() {
    move || {
        use std::{thread, time};
        thread::sleep(time::Duration::from_millis((1000 / fps).saturating_sub(5)));
    }
}

pub fn main_fun() -> Result<()> {
    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Uvwarp".to_string(),
                ..default()
            }),
            ..default()
        }),
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin,
        Material2dPlugin::<display_system::material::NoiseWarpMaterial>::default(),
    ))
    .insert_resource(display_system::SettingsState {
        debug_readout: false,
    })
    .add_systems(Startup, display_system::setup_display)
    .add_systems(
        Update,
        (
            close_on_esc,
            frame_limiter_to_system(FPS),
            display_system::advance_time,
            display_system::user_input_system,
            display_system::debug_readout_system.after(display_system::advance_time),
        ),
    );
    app.run();

    Ok(())
}
