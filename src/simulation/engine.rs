//! Runtime force-engine selection
//!
//! Maps the configured force summation onto one of the concrete engines in
//! [`crate::simulation::forces`]

use crate::configuration::config::ForceConfig;

use super::error::SimError;
use super::forces::{ForceEngine, NewtonianGravity, NewtonianGravityPairwise};
use super::states::NVec3;

#[derive(Debug, Clone, Copy)]
pub enum Engine {
    Direct(NewtonianGravity), // every ordered pair
    Pairwise(NewtonianGravityPairwise), // every unordered pair, applied to both sides
}

impl Engine {
    pub fn from_config(force: &ForceConfig, g: f64) -> Self {
        match force {
            ForceConfig::Direct => Engine::Direct(NewtonianGravity { g }),
            ForceConfig::Pairwise => Engine::Pairwise(NewtonianGravityPairwise { g }),
        }
    }
}

impl ForceEngine for Engine {
    fn compute_forces(&self, positions: &[NVec3], masses: &[f64]) -> Result<Vec<NVec3>, SimError> {
        match self {
            Engine::Direct(e) => e.compute_forces(positions, masses),
            Engine::Pairwise(e) => e.compute_forces(positions, masses),
        }
    }
}
