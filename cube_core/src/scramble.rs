//! Seeded random scrambles.

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::moves::Move;

/// Reproducible scramble source.
#[derive(Clone, Debug)]
pub struct Scrambler {
    rng: ChaCha8Rng,
}

impl Scrambler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// `length` random moves, never turning the same face twice in a row.
    pub fn scramble(&mut self, length: usize) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(length);
        while moves.len() < length {
            let mv = Move::ALL[self.rng.random_range(0..Move::ALL.len())];
            if moves.last().is_some_and(|last| last.face() == mv.face()) {
                continue;
            }
            moves.push(mv);
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::invert_moves;
    use crate::state::CubeState;

    #[test]
    fn same_seed_same_scramble() {
        let first = Scrambler::from_seed(69).scramble(20);
        let second = Scrambler::from_seed(69).scramble(20);
        assert_eq!(first, second);
        assert_ne!(first, Scrambler::from_seed(70).scramble(20));
    }

    #[test]
    fn never_turns_a_face_twice_in_a_row() {
        let moves = Scrambler::from_seed(1).scramble(200);
        assert_eq!(moves.len(), 200);
        assert!(moves.windows(2).all(|pair| pair[0].face() != pair[1].face()));
    }

    #[test]
    fn inverse_scramble_solves_the_cube() {
        let moves = Scrambler::from_seed(7).scramble(25);
        let mut state = CubeState::identity();
        state.apply_moves(&moves).unwrap();
        assert!(!state.is_solved());
        state.apply_moves(&invert_moves(&moves)).unwrap();
        assert!(state.is_solved());
    }

    #[test]
    fn empty_scramble() {
        assert!(Scrambler::from_seed(0).scramble(0).is_empty());
    }
}
