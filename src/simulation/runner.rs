//! Stepping loop and trajectory recording
//!
//! [`Simulation`] owns the evolving state for the whole run. It computes the
//! initial forces once, then every call to [`Simulation::step`] replaces the
//! state with the integrator's output. [`Simulation::run`] performs exactly
//! `num_steps` steps and records a copy of the positions after each one.

use log::{debug, info};

use super::error::SimError;
use super::forces::ForceEngine;
use super::integrator::verlet_step;
use super::params::Parameters;
use super::states::{NVec3, System, Trajectory};

pub struct Simulation<F: ForceEngine> {
    system: System,
    forces: Vec<NVec3>,
    parameters: Parameters,
    engine: F,
    steps_taken: usize,
}

impl<F: ForceEngine> Simulation<F> {
    /// Validate the system and parameters, then evaluate the initial forces
    pub fn new(system: System, parameters: Parameters, engine: F) -> Result<Self, SimError> {
        system.validate()?;
        parameters.validate()?;
        let forces = engine.compute_forces(&system.positions, &system.masses)?;

        Ok(Self {
            system,
            forces,
            parameters,
            engine,
            steps_taken: 0,
        })
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Forces at the current positions
    pub fn forces(&self) -> &[NVec3] {
        &self.forces
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Simulated time since the start, in seconds
    pub fn time(&self) -> f64 {
        self.steps_taken as f64 * self.parameters.dt
    }

    /// Advance by one step and return the new positions.
    /// On error the state is left as it was before the call.
    pub fn step(&mut self) -> Result<&[NVec3], SimError> {
        let next = verlet_step(
            &self.engine,
            &self.system.positions,
            &self.system.velocities,
            &self.forces,
            &self.system.masses,
            self.parameters.dt,
        )?;

        self.system.positions = next.positions;
        self.system.velocities = next.velocities;
        self.forces = next.forces;
        self.steps_taken += 1;

        Ok(&self.system.positions)
    }

    /// Run `num_steps` steps, recording the positions after every step
    pub fn run(&mut self) -> Result<Trajectory, SimError> {
        let num_steps = self.parameters.num_steps;
        info!(
            "running {} steps for {} bodies (dt = {:e} s)",
            num_steps,
            self.system.len(),
            self.parameters.dt
        );

        let mut trajectory = Trajectory::with_capacity(num_steps);
        let report_every = (num_steps / 10).max(1);

        for step in 0..num_steps {
            let positions = self.step()?;
            trajectory.record(positions);

            if (step + 1) % report_every == 0 {
                debug!("step {}/{}", step + 1, num_steps);
            }
        }

        info!("finished after {} steps, t = {:e} s", self.steps_taken, self.time());
        Ok(trajectory)
    }

    pub fn into_system(self) -> System {
        self.system
    }
}

/// Build a [`Simulation`] and run it to completion
pub fn run<F: ForceEngine>(system: System, parameters: Parameters, engine: F) -> Result<Trajectory, SimError> {
    Simulation::new(system, parameters, engine)?.run()
}
