//! Logical state and move engine of a 3x3x3 Rubik's Cube.
//!
//! The cube is a permutation of 27 cubie identifiers over 27 fixed slots. A
//! move is animated on the renderer's entities one tick at a time and its
//! permutation is committed to the state only once the animation completes.
//!
//! ## Flow
//!
//! MoveSequencer::enqueue        // caller, any number of moves
//!   -> MoveSequencer::tick      // host, once per fixed tick
//!     -> entities_on_face       // reads CubeState before the move
//!     -> MoveExecutor::tick     // incremental transforms, then commit
//!
pub mod config;
pub mod constants;
pub mod error;
pub mod executor;
pub mod face;
pub mod facelet;
pub mod moves;
pub mod renderer;
pub mod resolver;
pub mod scramble;
pub mod sequencer;
pub mod solver;
pub mod state;

pub use glam;

pub use config::CubeConfig;
pub use error::{ConfigError, EngineError, SolveError};
pub use executor::{MoveExecutor, Started, TickResult};
pub use face::{CubieId, Face};
pub use moves::{Move, TurnKind};
pub use renderer::{CubeRenderer, MemoryRenderer};
pub use resolver::{entities_on_face, FaceEntities};
pub use scramble::Scrambler;
pub use sequencer::{MoveSequencer, PlayOutcome, SequencerEvent};
pub use solver::{Facelets, ScriptedSolver, Solver};
pub use state::{CubeState, SharedCubeState};
