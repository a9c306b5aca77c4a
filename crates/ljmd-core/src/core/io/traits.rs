use crate::core::models::system::ParticleSystem;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A sink for snapshots of a running simulation.
///
/// Writers receive the system by shared reference and must not retain it past
/// the call; everything they need has to be copied or serialized immediately.
pub trait TrajectoryWriter {
    /// Records the state of `system` after `step` integration steps.
    ///
    /// # Errors
    ///
    /// Returns a [`TrajectoryError`] if the frame cannot be serialized or written.
    fn write_frame(&mut self, step: u64, system: &ParticleSystem) -> Result<(), TrajectoryError>;

    /// Flushes buffered output. Called once after the final frame.
    fn finish(&mut self) -> Result<(), TrajectoryError> {
        Ok(())
    }
}
