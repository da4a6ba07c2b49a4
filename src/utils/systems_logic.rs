//! Systems logic: start-up, the fixed-tick engine and per-frame input.

use crate::utils::cube_functions::{
    advance_moves, keyboard_moves, pointer_moves, poll_solve, start_solve, update_status,
};
use crate::utils::objects::{CubeEngine, CubeStatus, SolveTask};
use crate::utils::setup::{load_settings, setup};
use bevy::prelude::*;

// Plugin for managing all the cube systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.init_resource::<CubeStatus>()
            .init_resource::<SolveTask>()
            .add_systems(Startup, (load_settings, setup).chain())
            // Animation and commits run on the fixed clock
            .add_systems(FixedUpdate, advance_moves.run_if(engine_ready))
            .add_systems(
                Update,
                (
                    (keyboard_moves, pointer_moves, start_solve, poll_solve).chain(),
                    update_status,
                )
                    .chain()
                    .run_if(engine_ready),
            );
    }
}

// Bevy needs a function for systems
fn engine_ready(engine: Option<Res<CubeEngine>>) -> bool {
    engine.is_some()
}
