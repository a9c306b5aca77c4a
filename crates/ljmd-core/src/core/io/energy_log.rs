use super::traits::TrajectoryError;
use crate::core::forcefield::term::EnergySample;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV log of [`EnergySample`]s with a `step,time,kinetic,potential,total` header.
pub struct EnergyLogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl EnergyLogWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TrajectoryError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> EnergyLogWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_sample(&mut self, sample: &EnergySample) -> Result<(), TrajectoryError> {
        self.writer.serialize(sample)?;
        Ok(())
    }

    pub fn write_all(&mut self, samples: &[EnergySample]) -> Result<(), TrajectoryError> {
        for sample in samples {
            self.write_sample(sample)?;
        }
        self.finish()
    }

    pub fn finish(&mut self) -> Result<(), TrajectoryError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, TrajectoryError> {
        self.writer
            .into_inner()
            .map_err(|e| TrajectoryError::Io(e.into_error()))
    }
}
