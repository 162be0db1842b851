pub mod simulation;
pub mod configuration;
pub mod cosmology;
pub mod benchmark;

pub use simulation::states::{Body, System, Trajectory, NVec3};
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::forces::{compute_forces, ForceEngine, NewtonianGravity, NewtonianGravityPairwise, G};
pub use simulation::integrator::{verlet_step, StepState};
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy};
pub use simulation::runner::{run, Simulation};
pub use simulation::engine::Engine;
pub use simulation::scenario::{random_bodies, Scenario};

pub use configuration::config::{EngineConfig, ForceConfig, ParametersConfig, BodyConfig, RandomBodiesConfig, ScenarioConfig};

pub use cosmology::density::{background_density, critical_density, HUBBLE_CONSTANT};

pub use benchmark::benchmark::{bench_gravity, bench_verlet};
