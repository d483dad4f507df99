//! Fixed-step time integrators for the particle system
//!
//! Provides a first-order semi-implicit Euler step and a second-order
//! velocity-Verlet step. Neither holds state of its own: particle state
//! lives in [`ParticleSystem`] and the force array is threaded through by
//! the caller

use super::forces::ForceModel;
use super::states::{NVec3, ParticleSystem};

/// Advance the system by one step of semi-implicit Euler.
///
/// `forces` must hold the forces at the current (pre-step) positions; this
/// integrator never re-evaluates them. Velocities update first from the
/// current accelerations, then positions advance using the already-updated
/// velocities. First-order accurate, so it serves as the baseline against
/// [`verlet_integrator`].
pub fn euler_integrator(system: &mut ParticleSystem, forces: &[NVec3], dt: f64) {
    let n = system.particle_count();
    if n == 0 { // no particles, return
        return;
    }

    for i in 0..n {
        // a_n = F_n / m
        let a = forces[i] / system.masses[i];

        // Kick: v_n+1 = v_n + dt * a_n
        system.velocities[i] += dt * a;

        // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
        system.positions[i] += dt * system.velocities[i];
    }
}

/// Advance the system by one step of velocity-Verlet.
///
/// `forces` must hold the forces at the current (pre-step) positions.
/// Positions advance with the old accelerations, forces are re-evaluated
/// once at the new positions through `model`, and velocities finish with
/// the average of old and new accelerations.
///
/// Returns the forces at the new positions so the caller can feed them
/// straight into the next step; the single mid-step evaluation is the only
/// force computation per step.
pub fn verlet_integrator(
    system: &mut ParticleSystem,
    forces: &[NVec3],
    dt: f64,
    model: &dyn ForceModel,
) -> Vec<NVec3> {
    let n = system.particle_count();
    if n == 0 { // no particles, nothing to return either
        return Vec::new();
    }

    let half_dt = 0.5 * dt; // half step dt/2

    // a_old[i] holds a_n for particle i at the current positions
    let mut a_old = vec![NVec3::zeros(); n];
    for i in 0..n {
        a_old[i] = forces[i] / system.masses[i];
    }

    // Drift: x_n+1 = x_n + dt * v_n + (dt^2 / 2) * a_n
    for i in 0..n {
        system.positions[i] += dt * system.velocities[i] + half_dt * dt * a_old[i];
    }

    // a_n+1 from x_n+1, the one force evaluation of this step
    let new_forces = model.compute_forces(&system.positions);

    // Kick: v_n+1 = v_n + (dt/2) * (a_n + a_n+1)
    for i in 0..n {
        let a_new = new_forces[i] / system.masses[i];
        system.velocities[i] += half_dt * (a_old[i] + a_new);
    }

    new_forces
}
