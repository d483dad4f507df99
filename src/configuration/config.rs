//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     - engine options (integrator, trajectory output)
//! - [`ParametersConfig`] - numerical parameters and potential constants
//! - [`ParticleConfig`]   - initial state for each particle
//! - [`ScenarioConfig`]   - top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"      # or "euler"
//!   trajectory: "dimer.xyz"   # optional, omit for no trajectory output
//!
//! parameters:
//!   n_steps: 1000             # number of integration steps
//!   dt: 0.002                 # fixed step size
//!   epsilon: 1.0              # Lennard-Jones well depth
//!   sigma: 1.0                # Lennard-Jones zero-crossing distance
//!   log_every: 100            # observable print stride, 0 to disable
//!   dump_every: 10            # trajectory frame stride, 0 to disable
//!
//! particles:
//!   - x: [ -0.6, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//!   - x: [  0.6, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, which may use different structs optimized for performance.

use serde::Deserialize;

/// Which integrator method used by the engine
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler. First order, one force evaluation per step, baseline only
    Euler,

    #[serde(rename = "verlet")] // Velocity-Verlet. Second order, symplectic, long-term energy behavior, fixed step size
    Verlet,
}

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    pub trajectory: Option<String>,   // XYZ trajectory output path, omit to disable dumping
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub n_steps: u64,    // number of integration steps
    pub dt: f64,         // fixed time step size
    pub epsilon: f64,    // Lennard-Jones well depth
    pub sigma: f64,      // Lennard-Jones zero-crossing distance
    pub log_every: u64,  // observable print stride, 0 disables printing
    pub dump_every: u64, // trajectory frame stride, 0 disables dumping
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: [f64; 3], // Initial position vector `x` in simulation units
    pub v: [f64; 3], // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the particle, must be positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (integrator, output)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub particles: Vec<ParticleConfig>, // Particles that define the initial state of the system
}
