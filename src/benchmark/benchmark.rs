use std::time::Instant;

use crate::simulation::forces::{ForceModel, LennardJones};
use crate::simulation::integrator::{euler_integrator, verlet_integrator};
use crate::simulation::states::{NVec3, ParticleSystem};

/// Helper to build a cubic lattice of `n_side^3` particles at rest
/// Spacing 1.5 sigma keeps lattice neighbors near the potential minimum
fn make_lattice(n_side: usize) -> ParticleSystem {
    let spacing = 1.5;
    let n = n_side * n_side * n_side;

    let mut positions = Vec::with_capacity(n);
    for ix in 0..n_side {
        for iy in 0..n_side {
            for iz in 0..n_side {
                positions.push(NVec3::new(
                    ix as f64 * spacing,
                    iy as f64 * spacing,
                    iz as f64 * spacing,
                ));
            }
        }
    }

    // equal lengths by construction
    ParticleSystem {
        positions,
        velocities: vec![NVec3::zeros(); n],
        masses: vec![1.0; n],
    }
}

/// Time one full all-pairs force evaluation for a range of lattice sizes
pub fn bench_forces() {
    // Different lattice sizes to test
    let sides = [4, 6, 8, 10, 12];

    for n_side in sides {
        let sys = make_lattice(n_side);
        let n = sys.particle_count();

        let lj = LennardJones::default();

        // Warm up
        let _ = lj.compute_forces(&sys.positions);

        // Time one direct n^2 evaluation
        let t0 = Instant::now();
        let forces = lj.compute_forces(&sys.positions);
        let dt_eval = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, pairs = {:9}, eval = {:8.6} s, |F[0]| = {:.3e}",
            n * (n - 1) / 2,
            dt_eval,
            forces[0].norm()
        );
    }
}

/// Time one integrator step (euler vs verlet) for a range of lattice sizes
/// Both paths cost one force evaluation per step, so the gap is pure
/// integrator overhead
pub fn bench_step() {
    let sides = [4, 6, 8, 10];
    let steps = 10; // integrator steps per timing loop

    for n_side in sides {
        let sys_template = make_lattice(n_side);
        let n = sys_template.particle_count();
        let lj = LennardJones::default();
        let dt = 0.001;

        // Euler: the driver refreshes forces after every step
        let mut sys_euler = sys_template.clone();
        let mut forces = lj.compute_forces(&sys_euler.positions);

        // Warm-up
        euler_integrator(&mut sys_euler, &forces, dt);
        forces = lj.compute_forces(&sys_euler.positions);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys_euler, &forces, dt);
            forces = lj.compute_forces(&sys_euler.positions);
        }
        let euler_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Verlet: the returned mid-step forces feed the next step
        let mut sys_verlet = sys_template.clone();
        let mut forces = lj.compute_forces(&sys_verlet.positions);

        // Warm-up
        forces = verlet_integrator(&mut sys_verlet, &forces, dt, &lj);

        let t1 = Instant::now();
        for _ in 0..steps {
            forces = verlet_integrator(&mut sys_verlet, &forces, dt, &lj);
        }
        let verlet_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {:5}, euler step = {:8.6} s, verlet step = {:8.6} s",
            n, euler_per_step, verlet_per_step
        );
    }
}
