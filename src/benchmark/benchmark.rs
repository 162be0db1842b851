use std::time::Instant;

use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::params::Parameters;
use crate::simulation::forces::{ForceEngine, NewtonianGravity, NewtonianGravityPairwise};
use crate::simulation::integrator::verlet_step;

/// Helper to build a manual System of size `n`
/// Deterministic positions spread over ~1e11 m, no rand needed
fn make_system(n: usize) -> System {
    let bodies: Vec<Body> = (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 0.37).sin() * 1e11,
                (i_f * 0.13).cos() * 1e11,
                (i_f * 0.07).sin() * 1e11,
            );
            Body::new(x, NVec3::zeros(), 1e30)
        })
        .collect();

    System::from_bodies(&bodies)
}

fn time_forces<F: ForceEngine>(engine: &F, sys: &System) -> Option<f64> {
    // Warm up
    engine.compute_forces(&sys.positions, &sys.masses).ok()?;

    let t0 = Instant::now();
    engine.compute_forces(&sys.positions, &sys.masses).ok()?;
    Some(t0.elapsed().as_secs_f64())
}

/// Time the ordered and unordered force sums for growing N
/// Paste output directly into a spreadsheet to graph
pub fn bench_gravity() {
    let ns = [100, 200, 400, 800, 1600, 3200];

    println!("N,ordered_s,pairwise_s");
    for n in ns {
        let sys = make_system(n);

        let ordered = time_forces(&NewtonianGravity::default(), &sys);
        let pairwise = time_forces(&NewtonianGravityPairwise::default(), &sys);

        match (ordered, pairwise) {
            (Some(a), Some(b)) => println!("{},{:.6},{:.6}", n, a, b),
            _ => println!("{},degenerate,degenerate", n),
        }
    }
}

/// Time a full velocity-Verlet step (one force evaluation) for growing N
pub fn bench_verlet() {
    let ns = [100, 200, 400, 800, 1600];
    let steps = 3;
    let params = Parameters::new(1e5, steps);
    let engine = NewtonianGravity::default();

    println!("N,step_ms");
    'sizes: for n in ns {
        let sys = make_system(n);
        let mut positions = sys.positions.clone();
        let mut velocities = sys.velocities.clone();
        let mut forces = match engine.compute_forces(&positions, &sys.masses) {
            Ok(f) => f,
            Err(e) => {
                println!("{},{}", n, e);
                continue;
            }
        };

        let t0 = Instant::now();
        for _ in 0..params.num_steps {
            match verlet_step(&engine, &positions, &velocities, &forces, &sys.masses, params.dt) {
                Ok(next) => {
                    positions = next.positions;
                    velocities = next.velocities;
                    forces = next.forces;
                }
                Err(e) => {
                    println!("{},{}", n, e);
                    continue 'sizes;
                }
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / params.num_steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
