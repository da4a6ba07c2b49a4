//! Error types of the cube engine.

use crate::face::Face;
use crate::moves::Move;
use thiserror::Error;

/// Errors raised by the cube state, the entity resolver and the move engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The entities resolved for a face do not cover exactly 9 cubies.
    #[error("inconsistent cube geometry on {face:?}: {found} cubies resolved, expected 9")]
    InconsistentGeometry { face: Face, found: usize },

    /// A facelet arrangement did not hold exactly 9 cubies.
    #[error("expected 9 facelets, got {0}")]
    FaceletCount(usize),

    #[error("slot {0} is outside the cube")]
    SlotOutOfRange(usize),

    /// An initial layout is not a permutation of the 27 cubie identifiers.
    #[error("invalid cube layout: {0}")]
    InvalidLayout(String),

    #[error("unknown move token {0:?}")]
    UnknownMoveToken(String),

    /// A move was started while another one is still animating.
    #[error("move {0} is still animating")]
    MoveInFlight(Move),

    /// The cube state lock was poisoned by a panicking holder.
    #[error("cube state lock poisoned")]
    StatePoisoned,
}

/// Errors surfaced by the external solver boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The facelet string is malformed (length, alphabet, counts, centers).
    #[error("invalid facelet string: {0}")]
    InvalidFacelets(String),

    /// The solver rejected the cube as physically impossible.
    #[error("unsolvable cube (solver error {code})")]
    InvalidCube { code: u8 },

    #[error("no solution within {max_depth} moves")]
    NoSolutionWithinBound { max_depth: usize },

    #[error("solver returned unknown move token {0:?}")]
    UnknownToken(String),

    #[error("solver unavailable: {0}")]
    Unavailable(String),
}

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
