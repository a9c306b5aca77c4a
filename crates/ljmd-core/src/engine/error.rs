use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::evaluator::NumericalError;
use crate::core::io::traits::TrajectoryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid simulation configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Cannot simulate an empty particle system")]
    EmptySystem,

    #[error("Numerical failure at step {step}: {source}")]
    Numerical {
        step: u64,
        #[source]
        source: NumericalError,
    },

    #[error("Failed to record trajectory frame at step {step}: {source}")]
    Trajectory {
        step: u64,
        #[source]
        source: TrajectoryError,
    },
}
