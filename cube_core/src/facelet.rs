//! Rotation of a face's 3x3 arrangement.
//!
//! The arrangement is always read and written in the same row-major order.

use crate::constants::cube_constants::{FACELET_COUNT, FACE_SIDE};

/// Direction of a quarter turn applied to a face arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    AntiClockwise,
}

impl RotationDirection {
    pub fn reversed(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::AntiClockwise,
            RotationDirection::AntiClockwise => RotationDirection::Clockwise,
        }
    }
}

pub type FaceMatrix<T> = [[T; FACE_SIDE]; FACE_SIDE];

pub fn to_matrix<T: Copy>(flat: &[T; FACELET_COUNT]) -> FaceMatrix<T> {
    std::array::from_fn(|row| std::array::from_fn(|col| flat[row * FACE_SIDE + col]))
}

pub fn to_flat<T: Copy>(matrix: &FaceMatrix<T>) -> [T; FACELET_COUNT] {
    std::array::from_fn(|index| matrix[index / FACE_SIDE][index % FACE_SIDE])
}

/// `M'[c][n-1-r] = M[r][c]`
pub fn rotate_clockwise_once<T: Copy>(matrix: &FaceMatrix<T>) -> FaceMatrix<T> {
    let mut rotated = *matrix;
    for (row, values) in matrix.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            rotated[col][FACE_SIDE - 1 - row] = *value;
        }
    }
    rotated
}

/// `M'[n-1-c][r] = M[r][c]`
pub fn rotate_anti_clockwise_once<T: Copy>(matrix: &FaceMatrix<T>) -> FaceMatrix<T> {
    let mut rotated = *matrix;
    for (row, values) in matrix.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            rotated[FACE_SIDE - 1 - col][row] = *value;
        }
    }
    rotated
}

/// Rotate a flat arrangement by `turns` quarter turns in `direction`.
pub fn rotate<T: Copy>(
    flat: &[T; FACELET_COUNT],
    direction: RotationDirection,
    turns: u8,
) -> [T; FACELET_COUNT] {
    let mut matrix = to_matrix(flat);
    for _ in 0..turns {
        matrix = match direction {
            RotationDirection::Clockwise => rotate_clockwise_once(&matrix),
            RotationDirection::AntiClockwise => rotate_anti_clockwise_once(&matrix),
        };
    }
    to_flat(&matrix)
}
