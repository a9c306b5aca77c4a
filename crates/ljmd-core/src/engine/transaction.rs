use crate::core::models::system::ParticleSystem;
use nalgebra::Vector3;

/// Copy of the mutable state of every particle in a system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    positions: Vec<Vector3<f64>>,
    velocities: Vec<Vector3<f64>>,
    forces: Vec<Vector3<f64>>,
}

impl SystemSnapshot {
    pub fn capture(system: &ParticleSystem) -> Self {
        let particles = system.particles();
        Self {
            positions: particles.iter().map(|p| p.position()).collect(),
            velocities: particles.iter().map(|p| p.velocity()).collect(),
            forces: particles.iter().map(|p| p.force()).collect(),
        }
    }

    /// Writes the captured state back. The system must hold the same particles
    /// it held at capture time.
    pub fn restore(&self, system: &mut ParticleSystem) {
        debug_assert_eq!(system.len(), self.positions.len());
        for (i, particle) in system.particles_mut().iter_mut().enumerate() {
            particle.set_position(self.positions[i]);
            particle.set_velocity(self.velocities[i]);
            particle.set_force(self.forces[i]);
        }
    }
}

/// Runs `action` on the system and rolls every particle back if it fails.
pub fn atomic<F, R, E>(system: &mut ParticleSystem, action: F) -> Result<R, E>
where
    F: FnOnce(&mut ParticleSystem) -> Result<R, E>,
{
    // 1. Record the state before the action.
    let snapshot = SystemSnapshot::capture(system);

    // 2. Execute the action; on failure, revert to the recorded state.
    match action(system) {
        Ok(result) => Ok(result),
        Err(e) => {
            snapshot.restore(system);
            Err(e)
        }
    }
}
