//! Headless step driver for simulation scenarios
//!
//! Owns the run loop. Forces are evaluated once at the starting
//! configuration, then every step consumes the forces valid at its entry:
//! verlet hands back the forces it computed mid-step and the driver threads
//! them into the next step, while euler leaves forces stale and the driver
//! re-evaluates after the step

use std::path::Path;

use crate::configuration::config::IntegratorConfig;
use crate::errors::{LjsimError, Result};
use crate::output::trajectory::TrajectoryWriter;
use crate::simulation::forces::{ForceModel, LennardJones};
use crate::simulation::integrator::{euler_integrator, verlet_integrator};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::ParticleSystem;

/// Run a scenario to completion, mutating its particle system in place.
///
/// Prints an observable row (step, time, kinetic, potential, total energy)
/// every `log_every` steps and writes an XYZ frame every `dump_every`
/// steps when a trajectory path is configured. The starting configuration
/// counts as step 0 for both.
pub fn run_scenario(scenario: &mut Scenario) -> Result<()> {
    let engine = &scenario.engine;
    let parameters = &scenario.parameters;
    let model = &scenario.forces;
    let system = &mut scenario.system;

    // Trajectory writer, created only when frames will actually be dumped
    let mut dump = match &engine.trajectory {
        Some(path) if parameters.dump_every > 0 => {
            let writer = TrajectoryWriter::create(path).map_err(|e| traj_error(path, e))?;
            Some((writer, path.as_path()))
        }
        _ => None,
    };

    // Forces at the starting configuration, evaluated exactly once before
    // the loop
    let mut forces = model.compute_forces(&system.positions);

    let mut time = 0.0;

    if parameters.log_every > 0 {
        println!(
            "{:>10} {:>12} {:>14} {:>14} {:>14}",
            "step", "time", "kinetic", "potential", "total"
        );
        print_observables(0, time, system, model);
    }
    if let Some((writer, path)) = dump.as_mut() {
        writer
            .write_frame(system, 0, time)
            .map_err(|e| traj_error(path, e))?;
    }

    for step in 1..=parameters.n_steps {
        match engine.integrator {
            IntegratorConfig::Euler => {
                euler_integrator(system, &forces, parameters.dt);
                // Euler consumed the entry forces, refresh for the next step
                forces = model.compute_forces(&system.positions);
            }
            IntegratorConfig::Verlet => {
                forces = verlet_integrator(system, &forces, parameters.dt, model);
            }
        }
        time += parameters.dt;

        if parameters.log_every > 0 && step % parameters.log_every == 0 {
            print_observables(step, time, system, model);
        }
        if let Some((writer, path)) = dump.as_mut() {
            if step % parameters.dump_every == 0 {
                writer
                    .write_frame(system, step, time)
                    .map_err(|e| traj_error(path, e))?;
            }
        }
    }

    if let Some((writer, path)) = dump.as_mut() {
        writer.flush().map_err(|e| traj_error(path, e))?;
    }

    Ok(())
}

/// One observable row: step index, simulation time, and the energy split
fn print_observables(step: u64, time: f64, system: &ParticleSystem, model: &LennardJones) {
    let kinetic = system.kinetic_energy();
    let potential = model.potential_energy(&system.positions);
    println!(
        "{:>10} {:>12.4} {:>14.6} {:>14.6} {:>14.6}",
        step,
        time,
        kinetic,
        potential,
        kinetic + potential
    );
}

fn traj_error(path: &Path, source: std::io::Error) -> LjsimError {
    LjsimError::TrajectoryError {
        path: path.display().to_string(),
        source,
    }
}
