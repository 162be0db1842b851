//! Force contributors for the n-body engine
//!
//! Defines the [`ForceEngine`] trait and two direct Newtonian gravity
//! engines: the ordered-pair reference sum and an unordered-pair variant
//! that applies each contribution to both bodies

use crate::simulation::states::NVec3;
use crate::simulation::error::SimError;

/// Gravitational constant in m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

/// Something that maps positions and masses to the net force on each body.
/// Implementations are pure: equal inputs give equal outputs.
pub trait ForceEngine {
    fn compute_forces(&self, positions: &[NVec3], masses: &[f64]) -> Result<Vec<NVec3>, SimError>;
}

/// Reference ordered-pair gravity using the SI constant [`G`]
pub fn compute_forces(positions: &[NVec3], masses: &[f64]) -> Result<Vec<NVec3>, SimError> {
    NewtonianGravity::default().compute_forces(positions, masses)
}

fn check_lengths(positions: &[NVec3], masses: &[f64]) -> Result<(), SimError> {
    if positions.len() != masses.len() {
        return Err(SimError::MassCountMismatch {
            positions: positions.len(),
            masses: masses.len(),
        });
    }
    Ok(())
}

/// 3D Newtonian gravity, direct n^2 sum over every ordered pair, no softening.
/// Body `i` sums the pull of every `j != i` on its own, so each pair is
/// evaluated twice.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: G }
    }
}

impl ForceEngine for NewtonianGravity {
    fn compute_forces(&self, positions: &[NVec3], masses: &[f64]) -> Result<Vec<NVec3>, SimError> {
        check_lengths(positions, masses)?;
        let n = masses.len();
        let mut out = vec![NVec3::zeros(); n];

        for i in 0..n {
            let xi = positions[i]; // position of body i
            let mi = masses[i]; // mass of body i

            for j in 0..n {
                if i == j {
                    continue;
                }

                // r points from i to j, so i is pulled along +r
                let r = positions[j] - xi;
                let d = r.norm();

                // Coincident bodies have no defined force
                if d == 0.0 {
                    return Err(SimError::CoincidentBodies { i, j });
                }

                // F = G * m_i * m_j / d^2
                let f = self.g * mi * masses[j] / (d * d);

                // F along the unit vector r / d
                out[i] += r * f / d;
            }
        }

        Ok(out)
    }
}

/// Same physics as [`NewtonianGravity`] but visits each unordered pair
/// (i, j) with i < j once and applies the contribution to both bodies.
/// Results agree with the ordered sum to rounding: only the mass product
/// `m_j * m_i` vs `m_i * m_j` can differ in the last bit.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravityPairwise {
    pub g: f64,
}

impl Default for NewtonianGravityPairwise {
    fn default() -> Self {
        Self { g: G }
    }
}

impl ForceEngine for NewtonianGravityPairwise {
    fn compute_forces(&self, positions: &[NVec3], masses: &[f64]) -> Result<Vec<NVec3>, SimError> {
        check_lengths(positions, masses)?;
        let n = masses.len();
        let mut out = vec![NVec3::zeros(); n];

        for i in 0..n {
            let xi = positions[i];
            let mi = masses[i];

            for j in (i + 1)..n {
                let r = positions[j] - xi;
                let d = r.norm();
                if d == 0.0 {
                    return Err(SimError::CoincidentBodies { i, j });
                }

                let f = self.g * mi * masses[j] / (d * d);
                let c = r * f / d;

                // i is pulled toward j, j toward i
                out[i] += c;
                out[j] -= c;
            }
        }

        Ok(out)
    }
}
