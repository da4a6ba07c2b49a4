//! The 18 face turns and their parameters.
//!
//! A quarter move turns its face clockwise as seen from outside that face,
//! which is a positive rotation about the face's inward normal. The matrix
//! direction is the direction that quarter turn takes on the face's canonical
//! slot arrangement.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use glam::Vec3;

use crate::constants::cube_constants::QUARTER_TURN_DEGREES;
use crate::error::EngineError;
use crate::face::Face;
use crate::facelet::RotationDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    F,
    FPrime,
    F2,
    B,
    BPrime,
    B2,
    U,
    UPrime,
    U2,
    D,
    DPrime,
    D2,
    R,
    RPrime,
    R2,
    L,
    LPrime,
    L2,
}

/// Quarter or half turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnKind {
    Quarter,
    Inverse,
    Half,
}

impl Move {
    pub const ALL: [Move; 18] = [
        Move::F,
        Move::FPrime,
        Move::F2,
        Move::B,
        Move::BPrime,
        Move::B2,
        Move::U,
        Move::UPrime,
        Move::U2,
        Move::D,
        Move::DPrime,
        Move::D2,
        Move::R,
        Move::RPrime,
        Move::R2,
        Move::L,
        Move::LPrime,
        Move::L2,
    ];

    /// Build the move turning `face` by `kind`.
    pub fn new(face: Face, kind: TurnKind) -> Move {
        let index = Face::ALL
            .iter()
            .position(|candidate| *candidate == face)
            .unwrap_or_default();
        let offset = match kind {
            TurnKind::Quarter => 0,
            TurnKind::Inverse => 1,
            TurnKind::Half => 2,
        };
        Move::ALL[index * 3 + offset]
    }

    pub fn face(self) -> Face {
        match self {
            Move::F | Move::FPrime | Move::F2 => Face::Front,
            Move::B | Move::BPrime | Move::B2 => Face::Back,
            Move::U | Move::UPrime | Move::U2 => Face::Up,
            Move::D | Move::DPrime | Move::D2 => Face::Bottom,
            Move::R | Move::RPrime | Move::R2 => Face::Right,
            Move::L | Move::LPrime | Move::L2 => Face::Left,
        }
    }

    pub fn kind(self) -> TurnKind {
        match self {
            Move::F | Move::B | Move::U | Move::D | Move::R | Move::L => TurnKind::Quarter,
            Move::FPrime
            | Move::BPrime
            | Move::UPrime
            | Move::DPrime
            | Move::RPrime
            | Move::LPrime => TurnKind::Inverse,
            Move::F2 | Move::B2 | Move::U2 | Move::D2 | Move::R2 | Move::L2 => TurnKind::Half,
        }
    }

    pub fn turn_count(self) -> u8 {
        match self.kind() {
            TurnKind::Half => 2,
            TurnKind::Quarter | TurnKind::Inverse => 1,
        }
    }

    /// Direction of the move on the face's canonical arrangement.
    pub fn direction(self) -> RotationDirection {
        let quarter = quarter_direction(self.face());
        match self.kind() {
            TurnKind::Inverse => quarter.reversed(),
            TurnKind::Quarter | TurnKind::Half => quarter,
        }
    }

    /// Unit axis of the positive rotation animating the move.
    pub fn axis(self) -> Vec3 {
        let inward = -self.face().outward_normal();
        match self.kind() {
            TurnKind::Inverse => -inward,
            TurnKind::Quarter | TurnKind::Half => inward,
        }
    }

    pub fn angle_degrees(self) -> f32 {
        f32::from(self.turn_count()) * QUARTER_TURN_DEGREES
    }

    pub fn inverse(self) -> Move {
        match self.kind() {
            TurnKind::Quarter => Move::new(self.face(), TurnKind::Inverse),
            TurnKind::Inverse => Move::new(self.face(), TurnKind::Quarter),
            TurnKind::Half => self,
        }
    }

    pub fn token(self) -> String {
        let suffix = match self.kind() {
            TurnKind::Quarter => "",
            TurnKind::Inverse => "'",
            TurnKind::Half => "2",
        };
        format!("{}{}", self.face().letter(), suffix)
    }
}

fn quarter_direction(face: Face) -> RotationDirection {
    match face {
        Face::Front | Face::Bottom | Face::Left => RotationDirection::Clockwise,
        Face::Back | Face::Up | Face::Right => RotationDirection::AntiClockwise,
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.trim().chars();
        let face = match chars.next() {
            Some('F') => Face::Front,
            Some('B') => Face::Back,
            Some('U') => Face::Up,
            Some('D') => Face::Bottom,
            Some('R') => Face::Right,
            Some('L') => Face::Left,
            _ => return Err(EngineError::UnknownMoveToken(token.to_string())),
        };
        let kind = match chars.as_str() {
            "" | "1" => TurnKind::Quarter,
            "'" | "3" => TurnKind::Inverse,
            "2" | "2'" => TurnKind::Half,
            _ => return Err(EngineError::UnknownMoveToken(token.to_string())),
        };
        Ok(Move::new(face, kind))
    }
}

/// Parse a whitespace separated sequence such as `"R2 U' F"`.
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, EngineError> {
    sequence.split_whitespace().map(str::parse).collect()
}

/// Inverse of a sequence: reversed order, each move inverted.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_closed_and_consistent() {
        for mv in Move::ALL {
            assert_eq!(Move::new(mv.face(), mv.kind()), mv);
            assert_eq!(mv.token().parse::<Move>(), Ok(mv));
            assert_eq!(mv.inverse().inverse(), mv);
            assert_eq!(mv.inverse().face(), mv.face());
            assert!((mv.axis().length() - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn inverse_flips_axis_and_direction() {
        for mv in Move::ALL.into_iter().filter(|mv| mv.kind() == TurnKind::Quarter) {
            let inverse = mv.inverse();
            assert_eq!(inverse.axis(), -mv.axis());
            assert_eq!(inverse.direction(), mv.direction().reversed());
            assert_eq!(inverse.turn_count(), 1);
        }
    }

    #[test]
    fn half_turns_share_quarter_parameters() {
        for face in Face::ALL {
            let quarter = Move::new(face, TurnKind::Quarter);
            let half = Move::new(face, TurnKind::Half);
            assert_eq!(half.axis(), quarter.axis());
            assert_eq!(half.direction(), quarter.direction());
            assert_eq!(half.angle_degrees(), 180.0);
            assert_eq!(half.inverse(), half);
        }
    }

    #[test]
    fn front_turn_matches_reference_values() {
        assert_eq!(Move::F.axis(), Vec3::NEG_Z);
        assert_eq!(Move::F.direction(), RotationDirection::Clockwise);
        assert_eq!(Move::L.axis(), Vec3::X);
        assert_eq!(Move::LPrime.axis(), Vec3::NEG_X);
    }

    #[test]
    fn parses_sequences() {
        assert_eq!(
            parse_moves(" R2 U'  F "),
            Ok(vec![Move::R2, Move::UPrime, Move::F])
        );
        assert_eq!(
            parse_moves("F X"),
            Err(EngineError::UnknownMoveToken("X".to_string()))
        );
        assert!("F3'".parse::<Move>().is_err());
    }

    #[test]
    fn inverted_sequence_reverses_order() {
        assert_eq!(
            invert_moves(&[Move::F, Move::U2, Move::RPrime]),
            vec![Move::R, Move::U2, Move::FPrime]
        );
    }
}
