//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and step count,
//! - Lennard-Jones well depth and diameter (`epsilon`, `sigma`),
//! - observable and trajectory output strides

#[derive(Debug, Clone)]
pub struct Parameters {
    pub n_steps: u64,    // number of integration steps
    pub dt: f64,         // step size
    pub epsilon: f64,    // Lennard-Jones well depth
    pub sigma: f64,      // Lennard-Jones zero-crossing distance
    pub log_every: u64,  // print observables every this many steps, 0 = never
    pub dump_every: u64, // write a trajectory frame every this many steps, 0 = never
}
