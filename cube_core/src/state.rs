//! Logical cube state: which cubie occupies which slot.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::constants::cube_constants::{CUBIE_COUNT, FACELET_COUNT};
use crate::error::EngineError;
use crate::face::{CubieId, Face};
use crate::facelet;
use crate::moves::Move;

/// Permutation of the 27 cubie identifiers over the 27 slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    slots: [CubieId; CUBIE_COUNT],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::identity()
    }
}

impl CubeState {
    /// Slot `i` holds cubie `i`.
    pub fn identity() -> Self {
        Self {
            slots: std::array::from_fn(|slot| CubieId(slot as u8)),
        }
    }

    /// Start from a model-specific layout, which must be a permutation of `0..27`.
    pub fn from_layout(layout: &[usize]) -> Result<Self, EngineError> {
        if layout.len() != CUBIE_COUNT {
            return Err(EngineError::InvalidLayout(format!(
                "expected {CUBIE_COUNT} slots, got {}",
                layout.len()
            )));
        }
        let mut slots = [CubieId(0); CUBIE_COUNT];
        for (slot, id) in layout.iter().enumerate() {
            slots[slot] = CubieId::new(*id).ok_or_else(|| {
                EngineError::InvalidLayout(format!("cubie {id} at slot {slot} is out of range"))
            })?;
        }
        let state = Self { slots };
        if !state.is_permutation() {
            return Err(EngineError::InvalidLayout(
                "cubie identifiers repeat".to_string(),
            ));
        }
        Ok(state)
    }

    pub fn cubie_at(&self, slot: usize) -> Result<CubieId, EngineError> {
        self.slots
            .get(slot)
            .copied()
            .ok_or(EngineError::SlotOutOfRange(slot))
    }

    pub fn slot_of(&self, cubie: CubieId) -> Option<usize> {
        self.slots.iter().position(|id| *id == cubie)
    }

    /// Cubies currently occupying `slots`, in the same order.
    pub fn faces_of(&self, slots: &[usize]) -> Result<Vec<CubieId>, EngineError> {
        slots.iter().map(|slot| self.cubie_at(*slot)).collect()
    }

    /// The face's current arrangement in canonical order.
    pub fn facelets(&self, face: Face) -> [CubieId; FACELET_COUNT] {
        face.slots().map(|slot| self.slots[slot])
    }

    /// The face's arrangement after `mv`, without touching the state.
    pub fn rotated_facelets(&self, mv: Move) -> [CubieId; FACELET_COUNT] {
        facelet::rotate(&self.facelets(mv.face()), mv.direction(), mv.turn_count())
    }

    /// Overwrite the face's 9 slots with `rotated`, read in canonical order.
    pub fn apply_permutation(&mut self, face: Face, rotated: &[CubieId]) -> Result<(), EngineError> {
        if rotated.len() != FACELET_COUNT {
            return Err(EngineError::FaceletCount(rotated.len()));
        }
        let mut before = self.facelets(face).to_vec();
        let mut after = rotated.to_vec();
        before.sort_unstable();
        after.sort_unstable();
        if before != after {
            return Err(EngineError::InconsistentGeometry {
                face,
                found: after.iter().filter(|id| before.contains(id)).count(),
            });
        }
        for (slot, id) in face.slots().into_iter().zip(rotated) {
            self.slots[slot] = *id;
        }
        Ok(())
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<(), EngineError> {
        let rotated = self.rotated_facelets(mv);
        debug!("{mv}: {:?} -> {:?}", self.facelets(mv.face()), rotated);
        self.apply_permutation(mv.face(), &rotated)
    }

    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<(), EngineError> {
        moves.iter().try_for_each(|mv| self.apply_move(*mv))
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; CUBIE_COUNT];
        self.slots.iter().all(|id| {
            let index = id.index();
            index < CUBIE_COUNT && !std::mem::replace(&mut seen[index], true)
        })
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::identity()
    }

    pub fn as_slice(&self) -> &[CubieId] {
        &self.slots
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (layer, cubies) in self.slots.chunks(FACELET_COUNT).enumerate() {
            if layer > 0 {
                write!(f, " | ")?;
            }
            for (index, id) in cubies.iter().enumerate() {
                if index > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{id:>2}")?;
            }
        }
        Ok(())
    }
}

/// Cube state shared with worker contexts. Every access holds the lock.
#[derive(Clone, Debug, Default)]
pub struct SharedCubeState(Arc<Mutex<CubeState>>);

impl SharedCubeState {
    pub fn new(state: CubeState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, CubeState>, EngineError> {
        self.0.lock().map_err(|_| EngineError::StatePoisoned)
    }

    pub fn snapshot(&self) -> Result<CubeState, EngineError> {
        Ok(self.lock()?.clone())
    }

    /// Rotate and commit `mv` inside a single lock scope.
    pub fn commit(&self, mv: Move) -> Result<(), EngineError> {
        self.lock()?.apply_move(mv)
    }
}
