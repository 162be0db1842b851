//! Failure taxonomy for the engine
//!
//! Configuration problems are reported before a run starts; the only error
//! that can occur inside the loop is `CoincidentBodies`.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two distinct bodies at exactly zero separation
    CoincidentBodies { i: usize, j: usize },
    EmptySystem,
    LengthMismatch {
        positions: usize,
        velocities: usize,
        masses: usize,
    },
    /// Force evaluation given a different number of positions and masses
    MassCountMismatch { positions: usize, masses: usize },
    NonPositiveMass { index: usize, mass: f64 },
    NonPositiveTimeStep(f64),
    ZeroSteps,
    InvalidGravitationalConstant(f64),
    InvalidScenario(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { i, j } => {
                write!(f, "bodies {i} and {j} are at zero separation")
            }
            SimError::EmptySystem => write!(f, "system has no bodies"),
            SimError::LengthMismatch {
                positions,
                velocities,
                masses,
            } => write!(
                f,
                "length mismatch: {positions} positions, {velocities} velocities, {masses} masses"
            ),
            SimError::MassCountMismatch { positions, masses } => {
                write!(f, "{positions} positions but {masses} masses")
            }
            SimError::NonPositiveMass { index, mass } => {
                write!(f, "body {index} has non-positive mass {mass}")
            }
            SimError::NonPositiveTimeStep(dt) => write!(f, "time step must be positive, got {dt}"),
            SimError::ZeroSteps => write!(f, "number of steps must be at least 1"),
            SimError::InvalidGravitationalConstant(g) => {
                write!(f, "gravitational constant must be positive, got {g}")
            }
            SimError::InvalidScenario(msg) => write!(f, "invalid scenario: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
