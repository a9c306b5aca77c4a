use super::traits::{TrajectoryError, TrajectoryWriter};
use crate::core::models::system::ParticleSystem;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DEFAULT_SPECIES: &str = "LJ";

/// Extended-XYZ trajectory writer recording positions and velocities.
///
/// Each frame is the particle count, a comment line carrying the property
/// layout and the step number, then one `species x y z vx vy vz` line per
/// particle in system order.
pub struct XyzWriter<W: Write> {
    writer: W,
    species: String,
    frames_written: usize,
}

impl XyzWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TrajectoryError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> XyzWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            species: DEFAULT_SPECIES.to_string(),
            frames_written: 0,
        }
    }

    pub fn with_species(mut self, species: &str) -> Self {
        self.species = species.to_string();
        self
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrajectoryWriter for XyzWriter<W> {
    fn write_frame(&mut self, step: u64, system: &ParticleSystem) -> Result<(), TrajectoryError> {
        writeln!(self.writer, "{}", system.len())?;
        writeln!(
            self.writer,
            "Properties=species:S:1:pos:R:3:velo:R:3 step={}",
            step
        )?;
        for particle in system.particles() {
            let r = particle.position();
            let v = particle.velocity();
            writeln!(
                self.writer,
                "{} {:.10} {:.10} {:.10} {:.10} {:.10} {:.10}",
                self.species, r.x, r.y, r.z, v.x, v.y, v.z
            )?;
        }
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), TrajectoryError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle::Particle;
    use nalgebra::Vector3;

    fn sample_system() -> ParticleSystem {
        ParticleSystem::from(vec![
            Particle::new(1.0, 1.0, 1.0)
                .unwrap()
                .with_position(Vector3::new(0.0, 0.5, -1.0)),
            Particle::new(1.0, 1.0, 1.0)
                .unwrap()
                .with_position(Vector3::new(1.5, 0.0, 0.0))
                .with_velocity(Vector3::new(0.25, 0.0, 0.0)),
        ])
    }

    #[test]
    fn write_frame_emits_count_comment_and_particle_lines() {
        let mut writer = XyzWriter::new(Vec::new());
        writer.write_frame(7, &sample_system()).unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2");
        assert!(lines[1].ends_with("step=7"));
        assert_eq!(
            lines[2],
            "LJ 0.0000000000 0.5000000000 -1.0000000000 0.0000000000 0.0000000000 0.0000000000"
        );
        assert!(lines[3].starts_with("LJ 1.5000000000 "));
        assert!(lines[3].contains(" 0.2500000000 "));
    }

    #[test]
    fn frames_are_appended_in_order() {
        let mut writer = XyzWriter::new(Vec::new()).with_species("Ar");
        let system = sample_system();
        writer.write_frame(0, &system).unwrap();
        writer.write_frame(10, &system).unwrap();
        assert_eq!(writer.frames_written(), 2);

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let comments: Vec<_> = output
            .lines()
            .filter(|line| line.starts_with("Properties="))
            .collect();
        assert_eq!(comments.len(), 2);
        assert!(comments[1].ends_with("step=10"));
        assert!(output.lines().nth(2).unwrap().starts_with("Ar "));
    }

    #[test]
    fn create_writes_to_file_after_finish() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traj.xyz");
        let mut writer = XyzWriter::create(&path).unwrap();
        writer.write_frame(0, &sample_system()).unwrap();
        writer.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("2\n"));
    }

    #[test]
    fn create_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("traj.xyz");
        assert!(matches!(
            XyzWriter::create(&path),
            Err(TrajectoryError::Io(_))
        ));
    }
}
