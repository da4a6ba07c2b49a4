//! Cube systems: advancing the engine, user moves, solving and the status text.
use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, block_on, futures_lite::future};
use bevy::window::PrimaryWindow;

use cube_core::resolver::cubie_of;
use cube_core::{Face, Move, PlayOutcome, SolveError, Solver, TurnKind};

use crate::utils::bevy_renderer::{BevyCubeRenderer, CubieQuery, pick_cubie};
use crate::utils::objects::{CubeEngine, CubeSettings, CubeStatus, ScrambleGen, SolveTask, StatusText};

/// Advances the move in flight by one fixed tick and starts the next one.
pub fn advance_moves(
    time: Res<Time>,
    mut engine: ResMut<CubeEngine>,
    mut status: ResMut<CubeStatus>,
    mut cubies: CubieQuery,
) {
    let mut renderer = BevyCubeRenderer::new(&mut cubies);
    match engine.sequencer.tick(time.delta(), &mut renderer) {
        Ok(events) => status.record(&events),
        Err(error) => {
            error!("move engine stopped: {error}");
            engine.sequencer.clear(&mut renderer);
            status.message = Some(error.to_string());
        }
    }
}

/// Face turns, scramble and clear from the keyboard.
pub fn keyboard_moves(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<CubeSettings>,
    mut engine: ResMut<CubeEngine>,
    mut scramble_gen: ResMut<ScrambleGen>,
    mut status: ResMut<CubeStatus>,
    mut cubies: CubieQuery,
) {
    let mut renderer = BevyCubeRenderer::new(&mut cubies);

    if keyboard.just_pressed(KeyCode::Escape) {
        if let Some(mv) = engine.sequencer.clear(&mut renderer) {
            info!("cancelled {mv}");
        }
        status.message = None;
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyS) {
        let scramble = scramble_gen.scrambler.scramble(settings.0.scramble_length);
        info!("scramble: {}", format_moves(&scramble));
        engine.sequencer.enqueue(scramble);
        let events = engine.sequencer.play_next(&mut renderer);
        status.record(&events);
        return;
    }

    let Some(face) = pressed_face(&keyboard) else {
        return;
    };
    let kind = if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
        TurnKind::Half
    } else if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        TurnKind::Inverse
    } else {
        TurnKind::Quarter
    };
    play_single(Move::new(face, kind), &mut engine, &mut status, &mut renderer);
}

fn pressed_face(keyboard: &ButtonInput<KeyCode>) -> Option<Face> {
    [
        (KeyCode::KeyF, Face::Front),
        (KeyCode::KeyB, Face::Back),
        (KeyCode::KeyU, Face::Up),
        (KeyCode::KeyD, Face::Bottom),
        (KeyCode::KeyR, Face::Right),
        (KeyCode::KeyL, Face::Left),
    ]
    .into_iter()
    .find_map(|(key, face)| keyboard.just_pressed(key).then_some(face))
}

/// Mouse click or tap on a face center turns that face clockwise.
pub fn pointer_moves(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut engine: ResMut<CubeEngine>,
    mut status: ResMut<CubeStatus>,
    mut cubies: CubieQuery,
) {
    let clicked = mouse
        .just_pressed(MouseButton::Left)
        .then(|| windows.single().ok()?.cursor_position())
        .flatten();
    let tapped = touches.iter_just_released().next().map(|touch| touch.position());
    let Some(position) = clicked.or(tapped) else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(entity) = pick_cubie(camera, camera_transform, position, &cubies) else {
        return;
    };

    let mut renderer = BevyCubeRenderer::new(&mut cubies);
    let Some(cubie) = cubie_of(&renderer, entity) else {
        return;
    };
    let slot = match engine.sequencer.state().lock() {
        Ok(state) => state.slot_of(cubie),
        Err(error) => {
            error!("{error}");
            return;
        }
    };
    let Some(face) = slot.and_then(Face::centered_at) else {
        debug!("cubie {cubie} is not a face center");
        return;
    };
    play_single(Move::new(face, TurnKind::Quarter), &mut engine, &mut status, &mut renderer);
}

fn play_single(
    mv: Move,
    engine: &mut CubeEngine,
    status: &mut CubeStatus,
    renderer: &mut BevyCubeRenderer,
) {
    match engine.sequencer.play_single(mv, renderer) {
        Ok(PlayOutcome::Started(mv)) => debug!("playing {mv}"),
        Ok(PlayOutcome::Skipped(mv)) => debug!("skipped {mv}, no cubies loaded"),
        Ok(PlayOutcome::Rejected(mv)) => info!("{mv} ignored, a move is still playing"),
        Err(error) => {
            warn!("cannot play {mv}: {error}");
            status.message = Some(error.to_string());
        }
    }
}

/// Starts the external solver on the async compute pool (Enter).
pub fn start_solve(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<CubeSettings>,
    engine: Res<CubeEngine>,
    mut solve_task: ResMut<SolveTask>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) || solve_task.0.is_some() {
        return;
    }

    let shared = engine.shared_state();
    let solver = settings.0.solver();
    let facelets = settings.0.facelets();
    let task = AsyncComputeTaskPool::get().spawn(async move {
        let snapshot = shared
            .snapshot()
            .map_err(|error| SolveError::Unavailable(error.to_string()))?;
        debug!("solving from {snapshot}");
        let facelets = facelets.map_err(|error| SolveError::InvalidFacelets(error.to_string()))?;
        solver.solve(&facelets)
    });
    info!("solver started");
    solve_task.0 = Some(task);
}

/// Enqueues the solver's plan once its task finishes.
pub fn poll_solve(
    mut solve_task: ResMut<SolveTask>,
    mut engine: ResMut<CubeEngine>,
    mut status: ResMut<CubeStatus>,
    mut cubies: CubieQuery,
) {
    let Some(task) = solve_task.0.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(task)) else {
        return;
    };
    solve_task.0 = None;

    match result {
        Ok(plan) => {
            info!("solution ({} moves): {}", plan.len(), format_moves(&plan));
            engine.sequencer.enqueue(plan);
            let events = engine
                .sequencer
                .play_next(&mut BevyCubeRenderer::new(&mut cubies));
            status.record(&events);
        }
        Err(error) => {
            warn!("solver failed: {error}");
            status.message = Some(error.to_string());
        }
    }
}

/// Refreshes the status text.
pub fn update_status(
    engine: Res<CubeEngine>,
    status: Res<CubeStatus>,
    solve_task: Res<SolveTask>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    let sequencer = &engine.sequencer;
    let solved = sequencer
        .state()
        .snapshot()
        .map(|state| state.is_solved())
        .unwrap_or(false);

    let mut lines = vec![
        match sequencer.current() {
            Some(mv) => format!("Playing {mv} | {} queued", sequencer.pending()),
            None => format!("Idle | {} queued", sequencer.pending()),
        },
        format!(
            "Last move: {} | Moves: {} | {}",
            status.last_committed.map_or("-".to_string(), |mv| mv.to_string()),
            sequencer.committed_moves(),
            if solved { "Solved" } else { "Scrambled" }
        ),
        "F B U D L R: turn (Shift inverse, Ctrl half) | S: scramble | Enter: solve | Esc: clear"
            .to_string(),
    ];
    if solve_task.0.is_some() {
        lines.push("Solving...".to_string());
    }
    if let Some(message) = &status.message {
        lines.push(message.clone());
    }
    text.0 = lines.join("\n");
}

fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(|mv| mv.token()).collect::<Vec<_>>().join(" ")
}
