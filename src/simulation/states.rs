//! Core state types for the N-body simulation.
//!
//! - `Body`       single point mass, used when building systems
//! - `System`     the body set in structure-of-arrays form
//! - `Trajectory` append-only record of per-step position snapshots
//!
//! All vectors are `NVec3` in SI units (m, m/s, kg).

use std::io::Write;

use nalgebra::Vector3;

use super::error::SimError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }
}

/// Ordered body set. Index `i` refers to the same body in all three vectors
/// for the whole run; masses are never mutated once the system is built.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub positions: Vec<NVec3>,
    pub velocities: Vec<NVec3>,
    pub masses: Vec<f64>,
}

impl System {
    pub fn from_bodies(bodies: &[Body]) -> Self {
        Self {
            positions: bodies.iter().map(|b| b.x).collect(),
            velocities: bodies.iter().map(|b| b.v).collect(),
            masses: bodies.iter().map(|b| b.m).collect(),
        }
    }

    /// Number of bodies (taken from `masses`)
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn bodies(&self) -> Vec<Body> {
        self.positions
            .iter()
            .zip(self.velocities.iter())
            .zip(self.masses.iter())
            .map(|((x, v), m)| Body::new(*x, *v, *m))
            .collect()
    }

    /// Check the shape and mass invariants before a run starts
    /// - at least one body
    /// - positions, velocities and masses have the same length
    /// - every mass is strictly positive (NaN is rejected)
    pub fn validate(&self) -> Result<(), SimError> {
        let (np, nv, nm) = (self.positions.len(), self.velocities.len(), self.masses.len());
        if np != nv || np != nm {
            return Err(SimError::LengthMismatch {
                positions: np,
                velocities: nv,
                masses: nm,
            });
        }
        if nm == 0 {
            return Err(SimError::EmptySystem);
        }
        for (index, &mass) in self.masses.iter().enumerate() {
            if !(mass > 0.0) || !mass.is_finite() {
                return Err(SimError::NonPositiveMass { index, mass });
            }
        }
        Ok(())
    }
}

/// Per-step position snapshots, `snapshots[k]` being the positions after
/// step `k`. The configuration before the first step is not part of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    snapshots: Vec<Vec<NVec3>>,
}

impl Trajectory {
    pub fn with_capacity(num_steps: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(num_steps),
        }
    }

    /// Append a copy of `positions` as the next snapshot
    pub fn record(&mut self, positions: &[NVec3]) {
        self.snapshots.push(positions.to_vec());
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Bodies per snapshot (0 for an empty trajectory)
    pub fn n_bodies(&self) -> usize {
        self.snapshots.first().map_or(0, Vec::len)
    }

    pub fn snapshot(&self, step: usize) -> Option<&[NVec3]> {
        self.snapshots.get(step).map(Vec::as_slice)
    }

    pub fn snapshots(&self) -> &[Vec<NVec3>] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&[NVec3]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    /// Positions of body `i` over time, one entry per step
    pub fn body_path(&self, i: usize) -> impl Iterator<Item = NVec3> + '_ {
        self.snapshots.iter().filter_map(move |s| s.get(i).copied())
    }

    /// Write as CSV: `step,body,x,y,z`, one row per body per step
    pub fn write_csv<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        writeln!(w, "step,body,x,y,z")?;
        for (step, snapshot) in self.snapshots.iter().enumerate() {
            for (body, x) in snapshot.iter().enumerate() {
                writeln!(w, "{},{},{:e},{:e},{:e}", step, body, x.x, x.y, x.z)?;
            }
        }
        w.flush()
    }
}
