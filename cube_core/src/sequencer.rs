//! Single-consumer FIFO of moves, played one at a time.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::EngineError;
use crate::executor::{MoveExecutor, Started, TickResult};
use crate::moves::Move;
use crate::renderer::CubeRenderer;
use crate::resolver::entities_on_face;
use crate::state::SharedCubeState;

/// What happened to the move queue during one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    Started(Move),
    /// The face had no entities; the move was dropped without a commit.
    Skipped(Move),
    Committed(Move),
    /// The move could not start; the rest of the queue was dropped with it.
    Aborted(Move, EngineError),
    /// The last queued move was committed and the sequencer is idle.
    Drained,
}

/// Result of an ad-hoc move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Started(Move),
    Skipped(Move),
    /// Another move is animating; the request was ignored.
    Rejected(Move),
}

pub struct MoveSequencer<E> {
    queue: VecDeque<Move>,
    executor: MoveExecutor<E>,
    state: SharedCubeState,
    committed: usize,
}

impl<E: Copy + Eq + Hash + Debug> MoveSequencer<E> {
    pub fn new(state: SharedCubeState, move_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            executor: MoveExecutor::new(move_duration),
            state,
            committed: 0,
        }
    }

    pub fn state(&self) -> &SharedCubeState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.executor.is_ticking()
    }

    pub fn current(&self) -> Option<Move> {
        self.executor.current()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn committed_moves(&self) -> usize {
        self.committed
    }

    /// Append moves; playback starts with `play_next`.
    pub fn enqueue<I: IntoIterator<Item = Move>>(&mut self, moves: I) {
        self.queue.extend(moves);
        debug!("{} moves pending", self.queue.len());
    }

    /// Start the head of the queue unless a move is already animating.
    pub fn play_next<R: CubeRenderer<Entity = E>>(
        &mut self,
        renderer: &mut R,
    ) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        self.advance(renderer, &mut events);
        events
    }

    /// Play one move outside the queue; rejected while another move animates.
    pub fn play_single<R: CubeRenderer<Entity = E>>(
        &mut self,
        mv: Move,
        renderer: &mut R,
    ) -> Result<PlayOutcome, EngineError> {
        if self.is_playing() {
            debug!("{mv} rejected, {:?} is animating", self.current());
            return Ok(PlayOutcome::Rejected(mv));
        }
        Ok(match self.start(mv, renderer)? {
            Started::Animating(mv) => PlayOutcome::Started(mv),
            Started::NoOp(mv) => PlayOutcome::Skipped(mv),
        })
    }

    /// Per-frame hook: advance the animation, commit, then start the next move.
    ///
    /// An idle sequencer stays idle; queued moves only start from `play_next`.
    pub fn tick<R: CubeRenderer<Entity = E>>(
        &mut self,
        delta: Duration,
        renderer: &mut R,
    ) -> Result<Vec<SequencerEvent>, EngineError> {
        let mut events = Vec::new();
        if let TickResult::Completed(mv) = self.executor.tick(delta, renderer, &self.state)? {
            self.committed += 1;
            events.push(SequencerEvent::Committed(mv));
            let aborted = self.advance(renderer, &mut events);
            if !aborted && !self.is_playing() {
                info!("move queue drained after {} moves", self.committed);
                events.push(SequencerEvent::Drained);
            }
        }
        Ok(events)
    }

    /// Cancel the move in flight and drop everything queued.
    pub fn clear<R: CubeRenderer<Entity = E>>(&mut self, renderer: &mut R) -> Option<Move> {
        let dropped = self.queue.len();
        self.queue.clear();
        let cancelled = self.executor.cancel(renderer);
        info!("cleared {dropped} queued moves, cancelled {cancelled:?}");
        cancelled
    }

    /// Start queued moves until one animates. Returns whether a move aborted.
    fn advance<R: CubeRenderer<Entity = E>>(
        &mut self,
        renderer: &mut R,
        events: &mut Vec<SequencerEvent>,
    ) -> bool {
        while !self.is_playing() {
            let Some(mv) = self.queue.pop_front() else {
                return false;
            };
            match self.start(mv, renderer) {
                Ok(Started::Animating(mv)) => events.push(SequencerEvent::Started(mv)),
                Ok(Started::NoOp(mv)) => events.push(SequencerEvent::Skipped(mv)),
                Err(error) => {
                    // A plan missing one move no longer leads where it was meant to.
                    let dropped = self.queue.len();
                    self.queue.clear();
                    warn!("aborted {mv}: {error}, dropped {dropped} queued moves");
                    events.push(SequencerEvent::Aborted(mv, error));
                    return true;
                }
            }
        }
        false
    }

    fn start<R: CubeRenderer<Entity = E>>(
        &mut self,
        mv: Move,
        renderer: &mut R,
    ) -> Result<Started, EngineError> {
        let entities = {
            let state = self.state.lock()?;
            entities_on_face(&state, &*renderer, mv.face())?
        };
        self.executor.start(mv, entities, &*renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::CubieId;
    use crate::renderer::MemoryRenderer;
    use crate::state::CubeState;

    const TICK: Duration = Duration::from_millis(50);

    fn sequencer() -> (MoveSequencer<u32>, MemoryRenderer) {
        let state = SharedCubeState::new(CubeState::identity());
        let renderer = MemoryRenderer::cube(&CubeState::identity());
        (MoveSequencer::new(state, Duration::from_millis(200)), renderer)
    }

    fn drain(sequencer: &mut MoveSequencer<u32>, renderer: &mut MemoryRenderer) -> Vec<SequencerEvent> {
        let mut events = sequencer.play_next(renderer);
        while sequencer.is_playing() {
            events.extend(sequencer.tick(TICK, renderer).unwrap());
        }
        events
    }

    #[test]
    fn enqueue_does_not_start_playback() {
        let (mut sequencer, mut renderer) = sequencer();
        sequencer.enqueue([Move::F, Move::U]);
        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.pending(), 2);
        assert!(sequencer.tick(TICK, &mut renderer).unwrap().is_empty());
    }

    #[test]
    fn plays_moves_in_fifo_order() {
        let (mut sequencer, mut renderer) = sequencer();
        sequencer.enqueue([Move::F, Move::U, Move::B]);

        let events = drain(&mut sequencer, &mut renderer);
        assert_eq!(
            events,
            vec![
                SequencerEvent::Started(Move::F),
                SequencerEvent::Committed(Move::F),
                SequencerEvent::Started(Move::U),
                SequencerEvent::Committed(Move::U),
                SequencerEvent::Started(Move::B),
                SequencerEvent::Committed(Move::B),
                SequencerEvent::Drained,
            ]
        );

        let mut expected = CubeState::identity();
        expected.apply_moves(&[Move::F, Move::U, Move::B]).unwrap();
        assert_eq!(sequencer.state().snapshot().unwrap(), expected);
        assert_eq!(sequencer.committed_moves(), 3);
    }

    #[test]
    fn state_reflects_exactly_the_committed_prefix() {
        let (mut sequencer, mut renderer) = sequencer();
        let plan = [Move::R, Move::U2, Move::FPrime, Move::L];
        sequencer.enqueue(plan);
        sequencer.play_next(&mut renderer);

        let mut committed = 0;
        while sequencer.is_playing() {
            let mut expected = CubeState::identity();
            expected.apply_moves(&plan[..committed]).unwrap();
            assert_eq!(sequencer.state().snapshot().unwrap(), expected);
            assert_eq!(sequencer.current(), Some(plan[committed]));

            for event in sequencer.tick(TICK, &mut renderer).unwrap() {
                if let SequencerEvent::Committed(_) = event {
                    committed += 1;
                }
            }
        }
        assert_eq!(committed, plan.len());
    }

    #[test]
    fn single_moves_are_rejected_while_playing() {
        let (mut sequencer, mut renderer) = sequencer();
        assert_eq!(
            sequencer.play_single(Move::R, &mut renderer),
            Ok(PlayOutcome::Started(Move::R))
        );
        assert_eq!(
            sequencer.play_single(Move::L, &mut renderer),
            Ok(PlayOutcome::Rejected(Move::L))
        );
        while sequencer.is_playing() {
            sequencer.tick(TICK, &mut renderer).unwrap();
        }

        let mut expected = CubeState::identity();
        expected.apply_move(Move::R).unwrap();
        assert_eq!(sequencer.state().snapshot().unwrap(), expected);
    }

    #[test]
    fn queue_resumes_after_a_single_move() {
        let (mut sequencer, mut renderer) = sequencer();
        sequencer.play_single(Move::D, &mut renderer).unwrap();
        sequencer.enqueue([Move::DPrime]);

        let mut events = Vec::new();
        while sequencer.is_playing() {
            events.extend(sequencer.tick(TICK, &mut renderer).unwrap());
        }
        assert!(events.contains(&SequencerEvent::Started(Move::DPrime)));
        assert!(sequencer.state().snapshot().unwrap().is_solved());
    }

    #[test]
    fn empty_model_skips_without_stalling() {
        let state = SharedCubeState::new(CubeState::identity());
        let mut renderer = MemoryRenderer::new();
        let mut sequencer = MoveSequencer::new(state, Duration::from_millis(200));
        sequencer.enqueue([Move::F, Move::B]);

        assert_eq!(
            sequencer.play_next(&mut renderer),
            vec![SequencerEvent::Skipped(Move::F), SequencerEvent::Skipped(Move::B)]
        );
        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.pending(), 0);
        assert!(sequencer.state().snapshot().unwrap().is_solved());
    }

    fn respawn_cubie(renderer: &mut MemoryRenderer, cubie: CubieId) {
        let state = CubeState::identity();
        let slot = state.slot_of(cubie).unwrap();
        renderer.spawn(
            Some(format!("{cubie}_Cubie")),
            glam::Mat4::from_translation(crate::face::slot_position(slot)),
        );
    }

    #[test]
    fn broken_geometry_aborts_and_drops_the_queue() {
        let (mut sequencer, mut renderer) = sequencer();
        let entity = renderer.entity_of(CubieId(10)).unwrap();
        renderer.despawn(entity);
        sequencer.enqueue([Move::U, Move::F, Move::R]);

        let events = sequencer.play_next(&mut renderer);
        assert!(matches!(
            events.as_slice(),
            [SequencerEvent::Aborted(Move::U, EngineError::InconsistentGeometry { found: 8, .. })]
        ));
        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.pending(), 0);
        assert!(sequencer.state().snapshot().unwrap().is_solved());
    }

    #[test]
    fn single_move_after_an_abort_does_not_resume_the_old_plan() {
        let (mut sequencer, mut renderer) = sequencer();
        let entity = renderer.entity_of(CubieId(10)).unwrap();
        renderer.despawn(entity);
        sequencer.enqueue([Move::U, Move::F, Move::R]);
        sequencer.play_next(&mut renderer);
        for _ in 0..10 {
            assert!(sequencer.tick(TICK, &mut renderer).unwrap().is_empty());
        }

        respawn_cubie(&mut renderer, CubieId(10));
        assert_eq!(
            sequencer.play_single(Move::D, &mut renderer),
            Ok(PlayOutcome::Started(Move::D))
        );
        let mut events = Vec::new();
        while sequencer.is_playing() {
            events.extend(sequencer.tick(TICK, &mut renderer).unwrap());
        }
        assert_eq!(
            events,
            vec![SequencerEvent::Committed(Move::D), SequencerEvent::Drained]
        );

        let mut expected = CubeState::identity();
        expected.apply_move(Move::D).unwrap();
        assert_eq!(sequencer.state().snapshot().unwrap(), expected);
    }

    #[test]
    fn aborting_the_last_move_is_not_a_drain() {
        let (mut sequencer, mut renderer) = sequencer();
        sequencer.play_single(Move::F, &mut renderer).unwrap();
        let entity = renderer.entity_of(CubieId(10)).unwrap();
        renderer.despawn(entity);
        sequencer.enqueue([Move::U]);

        let mut events = Vec::new();
        while sequencer.is_playing() {
            events.extend(sequencer.tick(TICK, &mut renderer).unwrap());
        }
        assert!(matches!(
            events.as_slice(),
            [
                SequencerEvent::Committed(Move::F),
                SequencerEvent::Aborted(Move::U, EngineError::InconsistentGeometry { found: 8, .. }),
            ]
        ));
    }

    #[test]
    fn clear_cancels_without_committing() {
        let (mut sequencer, mut renderer) = sequencer();
        sequencer.enqueue([Move::F, Move::R]);
        sequencer.play_next(&mut renderer);
        sequencer.tick(TICK, &mut renderer).unwrap();

        assert_eq!(sequencer.clear(&mut renderer), Some(Move::F));
        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.pending(), 0);
        assert!(sequencer.state().snapshot().unwrap().is_solved());
    }
}
