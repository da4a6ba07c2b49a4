// This file defines the resources and components used by the cube application.
use bevy::prelude::*;
use bevy::tasks::Task;

use cube_core::{
    CubeConfig, CubeState, Move, MoveSequencer, Scrambler, SequencerEvent, SharedCubeState,
    SolveError,
};

/// A component that marks an entity as one of the 27 cubies.
#[derive(Component)]
pub struct Cubie;

/// A component that marks the status text.
#[derive(Component)]
pub struct StatusText;

/// The loaded `cube.toml`, or the defaults.
#[derive(Resource, Clone, Default)]
pub struct CubeSettings(pub CubeConfig);

/// A resource owning the move engine.
#[derive(Resource)]
pub struct CubeEngine {
    pub sequencer: MoveSequencer<Entity>,
}

impl CubeEngine {
    pub fn new(settings: &CubeConfig, state: CubeState) -> Self {
        Self {
            sequencer: MoveSequencer::new(SharedCubeState::new(state), settings.move_duration()),
        }
    }

    pub fn shared_state(&self) -> SharedCubeState {
        self.sequencer.state().clone()
    }
}

/// A resource for scramble generation.
#[derive(Resource)]
pub struct ScrambleGen {
    pub scrambler: Scrambler,
}

impl ScrambleGen {
    // Creates a new `ScrambleGen` from a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            scrambler: Scrambler::from_seed(seed),
        }
    }
}

/// The solver task running on the async compute pool, if any.
#[derive(Resource, Default)]
pub struct SolveTask(pub Option<Task<Result<Vec<Move>, SolveError>>>);

/// What the status text shows besides the engine state.
#[derive(Resource, Default)]
pub struct CubeStatus {
    pub last_committed: Option<Move>,
    pub message: Option<String>,
}

impl CubeStatus {
    /// Log sequencer events and keep the last committed move.
    ///
    /// An abort message stays until Escape clears it.
    pub fn record(&mut self, events: &[SequencerEvent]) {
        for event in events {
            match event {
                SequencerEvent::Started(mv) => debug!("playing {mv}"),
                SequencerEvent::Skipped(mv) => debug!("skipped {mv}, no cubies loaded"),
                SequencerEvent::Committed(mv) => self.last_committed = Some(*mv),
                SequencerEvent::Drained => debug!("move queue drained"),
                SequencerEvent::Aborted(mv, error) => {
                    warn!("move {mv} aborted: {error}");
                    self.message = Some(format!("{mv} aborted: {error}"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{EngineError, Face};

    #[test]
    fn abort_message_survives_a_drain() {
        let mut status = CubeStatus::default();
        let error = EngineError::InconsistentGeometry { face: Face::Up, found: 8 };
        status.record(&[
            SequencerEvent::Committed(Move::F),
            SequencerEvent::Aborted(Move::U, error),
            SequencerEvent::Drained,
        ]);
        assert_eq!(status.last_committed, Some(Move::F));
        assert!(status.message.as_deref().is_some_and(|m| m.starts_with("U aborted")));
    }
}
