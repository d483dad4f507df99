pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;
pub mod errors;

pub use simulation::states::{NVec3, ParticleSystem};
pub use simulation::forces::{ForceModel, LennardJones};
pub use simulation::integrator::{euler_integrator, verlet_integrator};
pub use simulation::scenario::Scenario;
pub use simulation::driver::run_scenario;

pub use configuration::config::{
    EngineConfig, IntegratorConfig, ParametersConfig, ParticleConfig, ScenarioConfig,
};

pub use errors::{LjsimError, Result};

pub use output::trajectory::TrajectoryWriter;

pub use benchmark::benchmark::{bench_forces, bench_step};
