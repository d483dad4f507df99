use thiserror::Error;

#[derive(Error, Debug)]
pub enum LjsimError {
    // State construction errors
    #[error("shape mismatch: {positions} positions, {velocities} velocities, {masses} masses")]
    ShapeMismatch {
        positions: usize,
        velocities: usize,
        masses: usize,
    },

    // Scenario configuration errors
    #[error("invalid parameter '{name}': {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f64 },

    // Output errors
    #[error("failed to write trajectory '{path}': {source}")]
    TrajectoryError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LjsimError>;
