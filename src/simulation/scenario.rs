//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - particle state (`ParticleSystem` at t = 0)
//! - active force model (`LennardJones`)
//!
//! The bundle is consumed by the step driver; nothing here advances the
//! simulation itself

use std::path::PathBuf;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::errors::{LjsimError, Result};
use crate::simulation::engine::Engine;
use crate::simulation::forces::LennardJones;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, ParticleSystem};

/// Fully-initialized runtime bundle for one simulation run
///
/// Constructed from a [`ScenarioConfig`]: it contains the engine settings,
/// parameters, current particle state, and the active force model. The
/// driver mutates `system` in place, so callers can inspect the final
/// state after a run.
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: ParticleSystem,
    pub forces: LennardJones,
}

impl Scenario {
    /// Map the YAML-facing config into the runtime bundle.
    ///
    /// This is the single place where nonphysical inputs are rejected:
    /// the kernels downstream assume positive `dt`, `epsilon`, `sigma`
    /// and masses and do not re-validate per call.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        require_positive("dt", p_cfg.dt)?;
        require_positive("epsilon", p_cfg.epsilon)?;
        require_positive("sigma", p_cfg.sigma)?;
        for pc in &cfg.particles {
            require_positive("m", pc.m)?;
        }

        // Particles: map `ParticleConfig` -> parallel state arrays using
        // nalgebra vectors
        let positions: Vec<NVec3> = cfg
            .particles
            .iter()
            .map(|pc: &ParticleConfig| NVec3::new(pc.x[0], pc.x[1], pc.x[2]))
            .collect();
        let velocities: Vec<NVec3> = cfg
            .particles
            .iter()
            .map(|pc: &ParticleConfig| NVec3::new(pc.v[0], pc.v[1], pc.v[2]))
            .collect();
        let masses: Vec<f64> = cfg.particles.iter().map(|pc| pc.m).collect();

        // Initial system state at t = 0
        let system = ParticleSystem::new(positions, velocities, masses)?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            n_steps: p_cfg.n_steps,
            dt: p_cfg.dt,
            epsilon: p_cfg.epsilon,
            sigma: p_cfg.sigma,
            log_every: p_cfg.log_every,
            dump_every: p_cfg.dump_every,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            trajectory: e_cfg.trajectory.map(PathBuf::from),
        };

        // Force model from the potential constants
        let forces = LennardJones {
            epsilon: parameters.epsilon,
            sigma: parameters.sigma,
        };

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}

// Positive and finite; NaN fails the comparison and is rejected too
fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LjsimError::InvalidParameter { name, value })
    }
}
