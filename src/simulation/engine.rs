//! High-level runtime engine settings
//!
//! Selects the integrator and the optional trajectory output target
//! used when building and running a `Scenario`

use std::path::PathBuf;

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
    pub trajectory: Option<PathBuf>,  // XYZ output path, None = no dumping
}
