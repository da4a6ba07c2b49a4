//! Runtime configuration, read from `cube.toml` on top of the built-in constants.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::animation_constants::{MOVE_DURATION_SECS, TICK_RATE_HZ};
use crate::constants::scramble_constants::{SCRAMBLE_LENGTH, SEED};
use crate::constants::solver_constants::{SAMPLE_FACELETS, SAMPLE_SOLUTION};
use crate::error::ConfigError;
use crate::solver::{Facelets, ScriptedSolver};
use crate::state::CubeState;

pub const CONFIG_FILE: &str = "cube.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub move_duration_secs: f32,
    pub tick_rate_hz: f64,
    pub seed: u64,
    pub scramble_length: usize,
    /// Facelet string handed to the solver.
    pub solver_facelets: String,
    /// Text the scripted solver answers with.
    pub solver_plan: String,
    /// Cubie id per slot when the model does not start solved.
    pub initial_layout: Option<Vec<usize>>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            move_duration_secs: MOVE_DURATION_SECS,
            tick_rate_hz: TICK_RATE_HZ,
            seed: SEED,
            scramble_length: SCRAMBLE_LENGTH,
            solver_facelets: SAMPLE_FACELETS.into(),
            solver_plan: SAMPLE_SOLUTION.into(),
            initial_layout: None,
        }
    }
}

impl CubeConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// `cube.toml` in the working directory, or the defaults when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(CONFIG_FILE).exists() {
            Self::from_path(CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.move_duration_secs.is_finite() || self.move_duration_secs < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "move_duration_secs must be a non-negative number, got {}",
                self.move_duration_secs
            )));
        }
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_rate_hz must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        Facelets::parse(&self.solver_facelets)
            .map_err(|error| ConfigError::Invalid(error.to_string()))?;
        self.initial_state()?;
        Ok(())
    }

    pub fn move_duration(&self) -> Duration {
        Duration::from_secs_f32(self.move_duration_secs)
    }

    pub fn initial_state(&self) -> Result<CubeState, ConfigError> {
        match &self.initial_layout {
            Some(layout) => CubeState::from_layout(layout)
                .map_err(|error| ConfigError::Invalid(error.to_string())),
            None => Ok(CubeState::identity()),
        }
    }

    pub fn facelets(&self) -> Result<Facelets, ConfigError> {
        Facelets::parse(&self.solver_facelets)
            .map_err(|error| ConfigError::Invalid(error.to_string()))
    }

    pub fn solver(&self) -> ScriptedSolver {
        ScriptedSolver::new(self.solver_plan.clone())
    }
}
