//! Background density of a flat matter + dark-energy universe
//!
//! Independent of the body dynamics: nothing in the simulation calls it.

use std::f64::consts::PI;

use crate::simulation::forces::G;

/// Metres per megaparsec
pub const MPC_IN_M: f64 = 3.086e22;

/// Hubble constant, 70 km/s/Mpc, in s^-1
pub const HUBBLE_CONSTANT: f64 = 70.0 * 1e3 / MPC_IN_M;

/// rho_crit = 3 H0^2 / (8 pi G), in kg/m^3
pub fn critical_density() -> f64 {
    3.0 * HUBBLE_CONSTANT * HUBBLE_CONSTANT / (8.0 * PI * G)
}

/// Total density at scale factor `a` (1 today): the matter term dilutes as
/// a^-3, the dark-energy term is constant. `a` must be positive.
pub fn background_density(a: f64, omega_m: f64, omega_lambda: f64) -> f64 {
    let rho_crit = critical_density();
    let rho_m = omega_m * rho_crit / (a * a * a);
    let rho_lambda = omega_lambda * rho_crit;
    rho_m + rho_lambda
}
