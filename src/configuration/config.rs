//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]       – force summation used by the engine (optional)
//! - [`ParametersConfig`]   – time step, step count and gravitational constant
//! - [`BodyConfig`]         – literal initial state for each body
//! - [`RandomBodiesConfig`] – seeded random initial state, instead of `bodies`
//! - [`ScenarioConfig`]     – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A four-body scenario matching these types:
//!
//! ```yaml
//! engine:
//!   force: "direct"         # or "pairwise"
//!
//! parameters:
//!   dt: 1.0e5               # fixed step size (s)
//!   num_steps: 1000         # number of steps
//!   G: 6.67430e-11          # optional, SI value by default
//!
//! bodies:
//!   - x: [ 1.0e11, 0.0, 0.0 ]
//!     v: [ 0.0, 1.0e3, 0.0 ]
//!     m: 1.0e30
//!   - x: [ -1.0e11, 0.0, 0.0 ]
//!     v: [ 0.0, -1.0e3, 0.0 ]
//!     m: 1.0e30
//! ```
//!
//! Randomly placed bodies use a `random` block instead of `bodies`:
//!
//! ```yaml
//! random:
//!   count: 100
//!   position_scale: 1.0e23  # components uniform in [0, scale)
//!   velocity_scale: 1.0e3
//!   mass: 1.0e30
//!   seed: 42
//! ```

use serde::Deserialize;

use crate::simulation::forces::G;

/// Force summation used by the engine
/// `force: "direct"` or `force: "pairwise"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForceConfig {
    #[default]
    #[serde(rename = "direct")] // every ordered pair summed independently
    Direct,

    #[serde(rename = "pairwise")] // each unordered pair once, applied to both bodies
    Pairwise,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub force: ForceConfig,
}

fn default_g() -> f64 {
    G
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub dt: f64,          // time step size (s)
    pub num_steps: usize, // number of steps
    #[serde(default = "default_g")]
    pub G: f64,           // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 3], // Initial position (m)
    pub v: [f64; 3], // Initial velocity (m/s)
    pub m: f64,      // Mass (kg)
}

/// Seeded random bodies, all with the same mass
#[derive(Deserialize, Debug, Clone)]
pub struct RandomBodiesConfig {
    pub count: usize,
    pub position_scale: f64,
    pub velocity_scale: f64,
    pub mass: f64,
    pub seed: u64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub random: Option<RandomBodiesConfig>,
}
