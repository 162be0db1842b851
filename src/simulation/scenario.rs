//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - force engine selection (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//!
//! Two presets reproduce the classic setups: four equal masses on the
//! corners of a square, and a cloud of random bodies on cosmological scales.

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::{BodyConfig, RandomBodiesConfig, ScenarioConfig};
use crate::configuration::config::ForceConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::runner::Simulation;
use crate::simulation::states::{Body, NVec3, System};

/// A validated scenario ready to be run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Map a [`ScenarioConfig`] to a runtime scenario.
    /// Exactly one of `bodies` / `random` must be given.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: literal list or seeded random cloud
        let bodies: Vec<Body> = match (cfg.bodies.is_empty(), &cfg.random) {
            (false, None) => cfg.bodies.iter().map(body_from_config).collect(),
            (true, Some(r)) => random_bodies_from_config(r),
            (false, Some(_)) => {
                return Err(SimError::InvalidScenario(
                    "both `bodies` and `random` are set".to_string(),
                ))
            }
            (true, None) => {
                return Err(SimError::InvalidScenario(
                    "one of `bodies` or `random` is required".to_string(),
                ))
            }
        };

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            num_steps: p_cfg.num_steps,
            g: p_cfg.G,
        };

        let engine = Engine::from_config(&cfg.engine.force, parameters.g);

        let scenario = Self {
            engine,
            parameters,
            system: System::from_bodies(&bodies),
        };
        scenario.validate()?;

        debug!(
            "built scenario: {} bodies, dt = {:e}, {} steps",
            scenario.system.len(),
            scenario.parameters.dt,
            scenario.parameters.num_steps
        );
        Ok(scenario)
    }

    /// Parse a YAML document and build the scenario from it
    pub fn from_yaml(s: &str) -> Result<Self, SimError> {
        let cfg: ScenarioConfig =
            serde_yaml::from_str(s).map_err(|e| SimError::InvalidScenario(e.to_string()))?;
        Self::build_scenario(cfg)
    }

    /// Four 1e30 kg bodies at (±1e11, 0, 0) and (0, ±1e11, 0) m, each moving
    /// at 1e3 m/s tangentially, dt = 1e5 s for 1000 steps
    pub fn four_body_square() -> Self {
        let bodies = [
            Body::new(NVec3::new(1e11, 0.0, 0.0), NVec3::new(0.0, 1e3, 0.0), 1e30),
            Body::new(NVec3::new(-1e11, 0.0, 0.0), NVec3::new(0.0, -1e3, 0.0), 1e30),
            Body::new(NVec3::new(0.0, 1e11, 0.0), NVec3::new(-1e3, 0.0, 0.0), 1e30),
            Body::new(NVec3::new(0.0, -1e11, 0.0), NVec3::new(1e3, 0.0, 0.0), 1e30),
        ];
        Self::with_direct_gravity(System::from_bodies(&bodies), Parameters::new(1e5, 1000))
    }

    /// 100 random 1e30 kg bodies in a (1e23 m)^3 box with velocities up to
    /// 1e3 m/s per component, dt = 1e14 s for 1000 steps
    pub fn cosmological(seed: u64) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let bodies = random_bodies(&mut rng, 100, 1e23, 1e3, 1e30);
        Self::with_direct_gravity(System::from_bodies(&bodies), Parameters::new(1e14, 1000))
    }

    fn with_direct_gravity(system: System, parameters: Parameters) -> Self {
        Self {
            engine: Engine::from_config(&ForceConfig::Direct, parameters.g),
            parameters,
            system,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.system.validate()?;
        self.parameters.validate()
    }

    /// Validate and set up a [`Simulation`] with the initial forces evaluated
    pub fn into_simulation(self) -> Result<Simulation<Engine>, SimError> {
        Simulation::new(self.system, self.parameters, self.engine)
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    Body::new(NVec3::from(bc.x), NVec3::from(bc.v), bc.m)
}

fn random_bodies_from_config(r: &RandomBodiesConfig) -> Vec<Body> {
    let mut rng = ChaChaRng::seed_from_u64(r.seed);
    random_bodies(&mut rng, r.count, r.position_scale, r.velocity_scale, r.mass)
}

/// `count` bodies with every position component uniform in
/// `[0, position_scale)`, every velocity component uniform in
/// `[0, velocity_scale)`, and the same `mass`
pub fn random_bodies<R: Rng>(
    rng: &mut R,
    count: usize,
    position_scale: f64,
    velocity_scale: f64,
    mass: f64,
) -> Vec<Body> {
    // All positions first, then all velocities
    let positions: Vec<NVec3> = (0..count).map(|_| unit_cube(rng) * position_scale).collect();
    let velocities: Vec<NVec3> = (0..count).map(|_| unit_cube(rng) * velocity_scale).collect();

    positions
        .into_iter()
        .zip(velocities)
        .map(|(x, v)| Body::new(x, v, mass))
        .collect()
}

fn unit_cube<R: Rng>(rng: &mut R) -> NVec3 {
    NVec3::new(rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>())
}
