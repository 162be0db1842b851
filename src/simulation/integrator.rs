//! Fixed-step velocity-Verlet integrator
//!
//! One step takes the current positions, velocities and forces and returns
//! a fresh triple. Nothing is updated in place, so a step can be checked
//! on its own.

use super::error::SimError;
use super::forces::ForceEngine;
use super::states::NVec3;

/// State after one step: positions, velocities and the forces at the new
/// positions (the input forces of the next step)
#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    pub positions: Vec<NVec3>,
    pub velocities: Vec<NVec3>,
    pub forces: Vec<NVec3>,
}

/// Advance by one step of size `dt` using velocity-Verlet.
/// Uses one force evaluation per step: the incoming `forces` must be the
/// forces at `positions`.
pub fn verlet_step<F: ForceEngine + ?Sized>(
    engine: &F,
    positions: &[NVec3],
    velocities: &[NVec3],
    forces: &[NVec3],
    masses: &[f64],
    dt: f64,
) -> Result<StepState, SimError> {
    let n = masses.len();
    if positions.len() != n || velocities.len() != n || forces.len() != n {
        return Err(SimError::LengthMismatch {
            positions: positions.len(),
            velocities: velocities.len(),
            masses: n,
        });
    }

    let dt2 = dt * dt;

    // Drift: x_n+1 = x_n + v_n dt + 1/2 (F_n / m) dt^2
    let new_positions: Vec<NVec3> = (0..n)
        .map(|i| positions[i] + velocities[i] * dt + forces[i] * 0.5 / masses[i] * dt2)
        .collect();

    // F_n+1 from x_n+1
    let new_forces = engine.compute_forces(&new_positions, masses)?;

    // Kick with the averaged force: v_n+1 = v_n + 1/2 (F_n + F_n+1) / m dt
    let new_velocities: Vec<NVec3> = (0..n)
        .map(|i| velocities[i] + (forces[i] + new_forces[i]) * 0.5 / masses[i] * dt)
        .collect();

    Ok(StepState {
        positions: new_positions,
        velocities: new_velocities,
        forces: new_forces,
    })
}
