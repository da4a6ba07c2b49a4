//! Boundary to the external two-phase solver.
//!
//! The search itself lives outside this crate. This module validates the
//! facelet string handed to it and turns its text output back into moves.

use std::fmt::{Display, Formatter, Result as FmtResult};

use log::debug;

use crate::constants::solver_constants::{
    CENTER_INDICES, FACELET_STRING_LENGTH, FACE_ORDER, MAX_SOLUTION_DEPTH,
};
use crate::error::SolveError;
use crate::moves::Move;

/// A validated 54-character facelet string in URFDLB face order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facelets(String);

impl Facelets {
    pub fn parse(text: &str) -> Result<Self, SolveError> {
        let text = text.trim();
        let count = text.chars().count();
        if count != FACELET_STRING_LENGTH {
            return Err(SolveError::InvalidFacelets(format!(
                "expected {FACELET_STRING_LENGTH} facelets, got {count}"
            )));
        }

        let mut per_face = [0usize; 6];
        for (index, letter) in text.chars().enumerate() {
            let face = FACE_ORDER.iter().position(|f| *f == letter).ok_or_else(|| {
                SolveError::InvalidFacelets(format!("unexpected {letter:?} at index {index}"))
            })?;
            per_face[face] += 1;
        }
        if let Some(face) = per_face.iter().position(|n| *n != FACELET_STRING_LENGTH / 6) {
            return Err(SolveError::InvalidFacelets(format!(
                "{} appears {} times",
                FACE_ORDER[face], per_face[face]
            )));
        }

        let bytes = text.as_bytes();
        for (index, letter) in CENTER_INDICES.iter().zip(FACE_ORDER) {
            if bytes[*index] as char != letter {
                return Err(SolveError::InvalidFacelets(format!(
                    "center {index} is {:?}, expected {letter:?}",
                    bytes[*index] as char
                )));
            }
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_solved(&self) -> bool {
        self.0
            .as_bytes()
            .chunks(FACELET_STRING_LENGTH / 6)
            .all(|face| face.iter().all(|letter| *letter == face[4]))
    }
}

impl Display for Facelets {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// An external solver: facelets in, ordered plan out.
pub trait Solver: Send + Sync {
    fn solve(&self, facelets: &Facelets) -> Result<Vec<Move>, SolveError>;
}

/// Turn solver output such as `"R2 U' F . D (21f)"` or `"Error 8"` into moves.
pub fn parse_solution(text: &str) -> Result<Vec<Move>, SolveError> {
    let text = text.trim();
    if let Some(code) = text.strip_prefix("Error") {
        let code: u8 = code
            .trim()
            .parse()
            .map_err(|_| SolveError::Unavailable(text.to_string()))?;
        return Err(match code {
            7 | 8 => SolveError::NoSolutionWithinBound {
                max_depth: MAX_SOLUTION_DEPTH,
            },
            1..=6 => SolveError::InvalidCube { code },
            _ => SolveError::Unavailable(text.to_string()),
        });
    }

    let moves = text
        .split_whitespace()
        .filter(|token| *token != ".")
        .filter(|token| !(token.starts_with('(') && token.ends_with(')')))
        .map(|token| {
            token
                .parse::<Move>()
                .map_err(|_| SolveError::UnknownToken(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("solver returned {} moves", moves.len());
    Ok(moves)
}

/// Solver answering every request with the same text output.
#[derive(Clone, Debug)]
pub struct ScriptedSolver {
    output: String,
}

impl ScriptedSolver {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Solver for ScriptedSolver {
    fn solve(&self, facelets: &Facelets) -> Result<Vec<Move>, SolveError> {
        if facelets.is_solved() {
            return Ok(Vec::new());
        }
        parse_solution(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::solver_constants::{SAMPLE_FACELETS, SAMPLE_SOLUTION};

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn accepts_valid_facelets() {
        let facelets = Facelets::parse(SAMPLE_FACELETS).unwrap();
        assert_eq!(facelets.as_str(), SAMPLE_FACELETS);
        assert!(!facelets.is_solved());
        assert!(Facelets::parse(SOLVED).unwrap().is_solved());
    }

    #[test]
    fn rejects_malformed_facelets() {
        assert!(Facelets::parse(&SOLVED[1..]).is_err());
        assert!(Facelets::parse(&SOLVED.replacen('U', "X", 1)).is_err());
        // Ten U stickers and eight R stickers.
        assert!(Facelets::parse(&SOLVED.replacen('R', "U", 1)).is_err());
        // Right counts, swapped centers.
        let swapped: String = SOLVED
            .chars()
            .enumerate()
            .map(|(i, c)| match i {
                4 => 'R',
                13 => 'U',
                _ => c,
            })
            .collect();
        assert!(matches!(
            Facelets::parse(&swapped),
            Err(SolveError::InvalidFacelets(_))
        ));
    }

    #[test]
    fn parses_the_sample_solution() {
        let moves = parse_solution(SAMPLE_SOLUTION).unwrap();
        assert_eq!(moves.len(), MAX_SOLUTION_DEPTH);
        assert_eq!(&moves[..3], &[Move::R2, Move::U2, Move::B2]);
        assert_eq!(moves[5], Move::UPrime);
        assert_eq!(moves.last(), Some(&Move::RPrime));
    }

    #[test]
    fn skips_the_phase_separator() {
        assert_eq!(
            parse_solution("U F' . D2 (3f)"),
            Ok(vec![Move::U, Move::FPrime, Move::D2])
        );
        assert_eq!(parse_solution("   "), Ok(Vec::new()));
    }

    #[test]
    fn maps_solver_errors() {
        assert_eq!(
            parse_solution("Error 8"),
            Err(SolveError::NoSolutionWithinBound {
                max_depth: MAX_SOLUTION_DEPTH
            })
        );
        assert_eq!(parse_solution("Error 3"), Err(SolveError::InvalidCube { code: 3 }));
        assert!(matches!(parse_solution("Error x"), Err(SolveError::Unavailable(_))));
        assert_eq!(
            parse_solution("R Q2"),
            Err(SolveError::UnknownToken("Q2".to_string()))
        );
    }

    #[test]
    fn scripted_solver_skips_solved_cubes() {
        let solver = ScriptedSolver::new(SAMPLE_SOLUTION);
        assert!(solver.solve(&Facelets::parse(SOLVED).unwrap()).unwrap().is_empty());
        assert_eq!(
            solver
                .solve(&Facelets::parse(SAMPLE_FACELETS).unwrap())
                .unwrap()
                .len(),
            MAX_SOLUTION_DEPTH
        );
    }
}
