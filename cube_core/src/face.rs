//! Fixed assignment of the 27 cubie slots to spatial positions and faces.
//!
//! Slot `s = layer * 9 + row * 3 + col`, with layer 0 at the front, row 0 at
//! the top and col 0 on the left. The center of slot `s` sits at
//! `(col - 1, 1 - row, 1 - layer)` cubie units, +Y up and +Z facing the viewer
//! of the front face.

use std::fmt::{Display, Formatter, Result as FmtResult};

use glam::Vec3;

use crate::constants::cube_constants::{CUBIE_COUNT, CUBIE_PITCH, FACELET_COUNT};

/// Stable identifier of one physical cubie, in `0..27`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);

impl CubieId {
    pub fn new(id: usize) -> Option<Self> {
        (id < CUBIE_COUNT).then_some(Self(id as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for CubieId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Up,
    Bottom,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    /// The face's 9 slots in its canonical row-major order.
    pub const fn slots(self) -> [usize; FACELET_COUNT] {
        match self {
            Face::Front => [0, 1, 2, 3, 4, 5, 6, 7, 8],
            Face::Back => [18, 19, 20, 21, 22, 23, 24, 25, 26],
            Face::Up => [0, 1, 2, 9, 10, 11, 18, 19, 20],
            Face::Bottom => [6, 7, 8, 15, 16, 17, 24, 25, 26],
            Face::Right => [2, 5, 8, 11, 14, 17, 20, 23, 26],
            Face::Left => [0, 3, 6, 9, 12, 15, 18, 21, 24],
        }
    }

    pub const fn center_slot(self) -> usize {
        self.slots()[FACELET_COUNT / 2]
    }

    pub fn outward_normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::Z,
            Face::Back => Vec3::NEG_Z,
            Face::Up => Vec3::Y,
            Face::Bottom => Vec3::NEG_Y,
            Face::Right => Vec3::X,
            Face::Left => Vec3::NEG_X,
        }
    }

    /// Face whose center cubie occupies `slot`, if any.
    pub fn centered_at(slot: usize) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.center_slot() == slot)
    }

    /// Singmaster letter of the face.
    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Bottom => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }
}

/// Center of `slot` in model space.
pub fn slot_position(slot: usize) -> Vec3 {
    let layer = (slot / 9) as f32;
    let row = ((slot % 9) / 3) as f32;
    let col = (slot % 3) as f32;
    Vec3::new(col - 1.0, 1.0 - row, 1.0 - layer) * CUBIE_PITCH
}

/// Slot whose center is closest to `position`, if it lies within half a pitch of one.
pub fn slot_at(position: Vec3) -> Option<usize> {
    let grid = position / CUBIE_PITCH;
    let col = grid.x + 1.0;
    let row = 1.0 - grid.y;
    let layer = 1.0 - grid.z;
    let cell = Vec3::new(col, row, layer).round();
    if (Vec3::new(col, row, layer) - cell).abs().max_element() >= 0.5
        || cell.min_element() < 0.0
        || cell.max_element() > 2.0
    {
        return None;
    }
    Some(cell.z as usize * 9 + cell.y as usize * 3 + cell.x as usize)
}
