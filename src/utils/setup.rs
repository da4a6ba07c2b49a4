use bevy::prelude::*;

use cube_core::constants::cube_constants::CUBIE_COUNT;
use cube_core::face::slot_position;
use cube_core::{CubeConfig, CubeState};

use crate::utils::bevy_renderer::to_bevy;
use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z,
};
use crate::utils::constants::cubie_constants::{CUBIE_LIGHTNESS, CUBIE_SATURATION, CUBIE_SIZE};
use crate::utils::constants::ui_constants::{STATUS_FONT_SIZE, STATUS_MARGIN_PX};
use crate::utils::objects::{CubeEngine, CubeSettings, Cubie, ScrambleGen, StatusText};

/// Reads `cube.toml` and applies the fixed tick rate. A broken file falls back to the defaults.
pub fn load_settings(mut commands: Commands, mut fixed_time: ResMut<Time<Fixed>>) {
    let config = match CubeConfig::load() {
        Ok(config) => config,
        Err(error) => {
            warn!("ignoring cube.toml: {error}");
            CubeConfig::default()
        }
    };
    fixed_time.set_timestep_hz(config.tick_rate_hz);
    info!(
        "move duration {:.2}s, tick rate {}Hz, seed {}",
        config.move_duration_secs, config.tick_rate_hz, config.seed
    );

    commands.insert_resource(ScrambleGen::from_seed(config.seed));
    commands.insert_resource(CubeSettings(config));
}

/// Systems
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<CubeSettings>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        // Start at fixed position looking at the origin
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Light
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0, // Bevy 0.17.0 uses a 0-100 scale here
        affects_lightmapped_meshes: true,
    });

    let state = match settings.0.initial_state() {
        Ok(state) => state,
        Err(error) => {
            warn!("ignoring initial layout: {error}");
            CubeState::identity()
        }
    };

    // One cuboid per cubie, named after its id, on the slot the state gives it.
    let mesh = meshes.add(Cuboid::new(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE));
    for (slot, id) in state.as_slice().iter().enumerate() {
        let hue = id.index() as f32 * 360.0 / CUBIE_COUNT as f32;
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsl(hue, CUBIE_SATURATION, CUBIE_LIGHTNESS),
                ..default()
            })),
            Transform::from_translation(to_bevy(slot_position(slot))),
            Name::new(format!("{id}_Cubie")),
            Cubie,
        ));
    }

    // Status text
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: STATUS_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(STATUS_MARGIN_PX),
            left: Val::Px(STATUS_MARGIN_PX),
            ..default()
        },
        StatusText,
    ));

    commands.insert_resource(CubeEngine::new(&settings.0, state));

    info!("Cube ready: F B U D L R to turn (Shift inverse, Ctrl half), S scramble, Enter solve, Esc clear");
}
