//! Animates one move at a time and commits its permutation on completion.
//!
//! The executor is polled once per host tick: `Idle -> Ticking -> Idle`. The
//! permutation commit is the only way out of `Ticking` besides `cancel`.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use glam::Mat4;
use log::{debug, info};

use crate::error::EngineError;
use crate::moves::Move;
use crate::renderer::CubeRenderer;
use crate::resolver::FaceEntities;
use crate::state::SharedCubeState;

/// Outcome of starting a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Started {
    Animating(Move),
    /// Nothing to animate on the face; nothing is committed.
    NoOp(Move),
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickResult {
    Idle,
    Animating { mv: Move, progress: f32 },
    /// The animation reached its target and the permutation is committed.
    Completed(Move),
}

/// Entities of the moving face and their transforms when the move started.
#[derive(Clone, Debug)]
struct RotatingSnapshot<E> {
    mv: Move,
    start: Vec<(E, Mat4)>,
    elapsed: Duration,
    applied_degrees: f32,
}

#[derive(Clone, Debug)]
pub struct MoveExecutor<E> {
    duration: Duration,
    active: Option<RotatingSnapshot<E>>,
}

impl<E: Copy + Eq + Hash + Debug> MoveExecutor<E> {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<Move> {
        self.active.as_ref().map(|active| active.mv)
    }

    /// Capture the snapshot of `entities` and begin animating `mv`.
    pub fn start<R: CubeRenderer<Entity = E>>(
        &mut self,
        mv: Move,
        entities: FaceEntities<E>,
        renderer: &R,
    ) -> Result<Started, EngineError> {
        if let Some(active) = &self.active {
            return Err(EngineError::MoveInFlight(active.mv));
        }
        if entities.is_empty() {
            debug!("{mv}: no entities on {:?}, nothing to animate", entities.face);
            return Ok(Started::NoOp(mv));
        }

        let start = entities
            .entities
            .into_iter()
            .filter_map(|entity| Some((entity, renderer.transform(entity)?)))
            .collect();
        self.active = Some(RotatingSnapshot {
            mv,
            start,
            elapsed: Duration::ZERO,
            applied_degrees: 0.0,
        });
        Ok(Started::Animating(mv))
    }

    /// Advance the animation by `delta`; commit to `state` when it completes.
    pub fn tick<R: CubeRenderer<Entity = E>>(
        &mut self,
        delta: Duration,
        renderer: &mut R,
        state: &SharedCubeState,
    ) -> Result<TickResult, EngineError> {
        let duration = self.duration;
        let Some(active) = self.active.as_mut() else {
            return Ok(TickResult::Idle);
        };

        active.elapsed += delta;
        let progress = if duration.is_zero() {
            1.0
        } else {
            (active.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };

        if progress < 1.0 {
            let angle = active.mv.angle_degrees() * progress;
            let step = Mat4::from_axis_angle(
                active.mv.axis(),
                (angle - active.applied_degrees).to_radians(),
            );
            for (entity, _) in &active.start {
                if let Some(current) = renderer.transform(*entity) {
                    renderer.set_transform(*entity, step * current);
                }
            }
            active.applied_degrees = angle;
            return Ok(TickResult::Animating {
                mv: active.mv,
                progress,
            });
        }

        let Some(finished) = self.active.take() else {
            return Ok(TickResult::Idle);
        };
        let mv = finished.mv;
        let end = Mat4::from_axis_angle(mv.axis(), mv.angle_degrees().to_radians());
        for (entity, start) in &finished.start {
            renderer.set_transform(*entity, end * *start);
        }
        state.commit(mv)?;
        info!("committed {mv}");
        Ok(TickResult::Completed(mv))
    }

    /// Abandon the move in flight, restoring the snapshot. Nothing is committed.
    pub fn cancel<R: CubeRenderer<Entity = E>>(&mut self, renderer: &mut R) -> Option<Move> {
        let cancelled = self.active.take()?;
        for (entity, start) in &cancelled.start {
            renderer.set_transform(*entity, *start);
        }
        Some(cancelled.mv)
    }
}
