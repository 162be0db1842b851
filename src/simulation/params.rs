//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the fixed run settings:
//! - time step `dt` (s) and step count `num_steps`,
//! - gravitational constant `g` (defaults to SI `G`)

use super::error::SimError;
use super::forces::G;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub num_steps: usize, // number of steps
    pub g: f64, // gravitational constant
}

impl Parameters {
    pub fn new(dt: f64, num_steps: usize) -> Self {
        Self { dt, num_steps, g: G }
    }

    pub fn with_g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(SimError::NonPositiveTimeStep(self.dt));
        }
        if self.num_steps == 0 {
            return Err(SimError::ZeroSteps);
        }
        if !(self.g > 0.0) || !self.g.is_finite() {
            return Err(SimError::InvalidGravitationalConstant(self.g));
        }
        Ok(())
    }
}
