use ljmd::core::forcefield::evaluator::NumericalError;
use ljmd::core::io::traits::TrajectoryError;
use ljmd::core::models::particle::ParticleError;
use ljmd::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Numerical(#[from] NumericalError),

    #[error("Output error: {0}")]
    Output(#[from] TrajectoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid particle at index {index}: {source}")]
    Particle {
        index: usize,
        #[source]
        source: ParticleError,
    },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
