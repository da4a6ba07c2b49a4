//! Start-up for the cube_solver, with window, plugins, and resources.

use bevy::{prelude::*, window::*};

use cube_core::constants::animation_constants::TICK_RATE_HZ;

use cube_solver::utils::systems_logic::SystemsLogicPlugin;

/// Entry point for the application
fn main() {
    let window = Some(Window {
        title: "Cube Solver".into(),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: window,
                ..default()
            }),
            SystemsLogicPlugin,
        ))
        // Overwritten by `tick_rate_hz` from cube.toml at start-up
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .run();
}
