//! Force models for the particle system
//!
//! Defines the [`ForceModel`] evaluation interface (positions in, one net
//! force per particle out) and the direct all-pairs Lennard-Jones
//! implementation

use crate::simulation::states::NVec3;

/// Trait for force evaluation: anything that maps a position configuration
/// to one net force vector per particle.
///
/// The velocity-Verlet integrator re-evaluates forces mid-step through this
/// trait, so potentials can be swapped without touching integrator code.
pub trait ForceModel {
    /// Net force on every particle at the given positions.
    /// Returns a fresh array of length `positions.len()`.
    fn compute_forces(&self, positions: &[NVec3]) -> Vec<NVec3>;
}

/// Lennard-Jones 12-6 pair potential (direct n^2 sum)
///
///   V(r) = 4 * epsilon * [(sigma/r)^12 - (sigma/r)^6]
///
/// `epsilon` sets the well depth, `sigma` the distance at which the
/// potential crosses zero. The minimum sits at r = 2^(1/6) * sigma.
#[derive(Debug, Clone)]
pub struct LennardJones {
    pub epsilon: f64, // well depth
    pub sigma: f64,   // zero-crossing distance
}

impl Default for LennardJones {
    /// Reduced units: unit well depth and unit diameter
    fn default() -> Self {
        Self {
            epsilon: 1.0,
            sigma: 1.0,
        }
    }
}

impl LennardJones {
    /// Total potential energy at the given positions.
    ///
    /// Sums the pair potential over unordered pairs, skipping coincident
    /// pairs under the same zero-separation policy as the force kernel.
    pub fn potential_energy(&self, positions: &[NVec3]) -> f64 {
        let n = positions.len();
        let mut total = 0.0;

        for i in 0..n {
            let xi = positions[i];
            for j in (i + 1)..n {
                let r = (positions[j] - xi).norm();
                if r == 0.0 {
                    continue;
                }
                let inv = self.sigma / r;
                let inv6 = inv.powi(6);
                let inv12 = inv6 * inv6;
                total += 4.0 * self.epsilon * (inv12 - inv6);
            }
        }

        total
    }
}

impl ForceModel for LennardJones {
    fn compute_forces(&self, positions: &[NVec3]) -> Vec<NVec3> {
        let n = positions.len();
        // Fresh accumulator, one net force per particle
        let mut out = vec![NVec3::zeros(); n];

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = positions[i];

            for j in (i + 1)..n {
                // r_vec is the displacement vector from i to j
                let r_vec = positions[j] - xi;
                let r = r_vec.norm();

                // Coincident particles contribute nothing: the pair is
                // skipped outright rather than clamped or perturbed, so a
                // degenerate geometry can never inject NaN or infinity
                if r == 0.0 {
                    continue;
                }

                // (sigma/r)^6 and (sigma/r)^12
                let inv = self.sigma / r;
                let inv6 = inv.powi(6);
                let inv12 = inv6 * inv6;

                // Scalar force along the pair axis:
                //   F(r) = 24 * epsilon / r * (2 * (sigma/r)^12 - (sigma/r)^6)
                // positive = repulsive (close range), negative = attractive
                let magnitude = 24.0 * self.epsilon / r * (2.0 * inv12 - inv6);

                // Project onto the unit separation vector
                let force_on_j = magnitude * (r_vec / r);

                // -------------------------
                // Newton's third law:
                // F_j += +F along r_vec
                // F_i += -F along r_vec
                // (equal and opposite)
                // -------------------------
                out[j] += force_on_j;
                out[i] -= force_on_j;
            }
        }

        out
    }
}
