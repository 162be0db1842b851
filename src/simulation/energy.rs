//! Energy diagnostics
//!
//! Kinetic, potential and total energy of a body set. Used to watch the
//! integrator's long-term drift; not part of the stepping itself.

use super::error::SimError;
use super::states::{NVec3, System};

/// Sum of 1/2 m v^2 over all bodies
pub fn kinetic_energy(velocities: &[NVec3], masses: &[f64]) -> f64 {
    velocities
        .iter()
        .zip(masses.iter())
        .map(|(v, m)| 0.5 * m * v.norm_squared())
        .sum()
}

/// Sum of -G m_i m_j / d over unordered pairs (each pair counted once)
pub fn potential_energy(positions: &[NVec3], masses: &[f64], g: f64) -> Result<f64, SimError> {
    let n = masses.len().min(positions.len());
    let mut u = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (positions[j] - positions[i]).norm();
            if d == 0.0 {
                return Err(SimError::CoincidentBodies { i, j });
            }
            u -= g * masses[i] * masses[j] / d;
        }
    }
    Ok(u)
}

pub fn total_energy(system: &System, g: f64) -> Result<f64, SimError> {
    let u = potential_energy(&system.positions, &system.masses, g)?;
    Ok(kinetic_energy(&system.velocities, &system.masses) + u)
}
