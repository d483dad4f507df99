//! Core state types for the molecular-dynamics engine.
//!
//! [`ParticleSystem`] holds the mutable particle state as three parallel
//! arrays (positions, velocities, masses), all indexed by particle.
//! Forces are deliberately not stored here: each step produces a fresh
//! force array that the driver threads into the next step.

use nalgebra::Vector3;

use crate::errors::{LjsimError, Result};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub positions: Vec<NVec3>,  // position per particle
    pub velocities: Vec<NVec3>, // velocity per particle
    pub masses: Vec<f64>,       // mass per particle, positive by contract
}

impl ParticleSystem {
    /// Build a system from equal-length position/velocity/mass arrays.
    ///
    /// Fails with [`LjsimError::ShapeMismatch`] when the three lengths
    /// disagree, so shape violations surface at construction rather than
    /// as index panics mid-run.
    pub fn new(positions: Vec<NVec3>, velocities: Vec<NVec3>, masses: Vec<f64>) -> Result<Self> {
        if positions.len() != velocities.len() || positions.len() != masses.len() {
            return Err(LjsimError::ShapeMismatch {
                positions: positions.len(),
                velocities: velocities.len(),
                masses: masses.len(),
            });
        }
        Ok(Self {
            positions,
            velocities,
            masses,
        })
    }

    /// Number of particles in the system
    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// Total kinetic energy, sum of 0.5 * m * |v|^2 over all particles
    pub fn kinetic_energy(&self) -> f64 {
        self.velocities
            .iter()
            .zip(self.masses.iter())
            .map(|(v, m)| 0.5 * m * v.norm_squared())
            .sum()
    }
}
