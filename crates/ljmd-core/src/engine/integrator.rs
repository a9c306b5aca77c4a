use super::transaction;
use crate::core::forcefield::evaluator::{ForceEvaluator, NumericalError};
use crate::core::models::system::ParticleSystem;
use tracing::trace;

/// Velocity-Verlet time stepping with a fixed timestep.
///
/// Each step is half-kick, drift, force evaluation, half-kick. The first
/// half-kick uses the forces already stored on the particles, so a freshly
/// initialised system must be [primed](Self::prime) once before the first step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityVerlet {
    timestep: f64,
    evaluator: ForceEvaluator,
}

impl VelocityVerlet {
    pub fn new(timestep: f64, cutoff_radius: Option<f64>) -> Self {
        Self {
            timestep,
            evaluator: ForceEvaluator::new(cutoff_radius),
        }
    }

    #[inline]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    #[inline]
    pub fn evaluator(&self) -> &ForceEvaluator {
        &self.evaluator
    }

    /// Computes the forces for the current positions and returns the potential energy.
    pub fn prime(&self, system: &mut ParticleSystem) -> Result<f64, NumericalError> {
        self.evaluator.evaluate(system)
    }

    /// Advances the system by one timestep and returns the potential energy at
    /// the new positions.
    ///
    /// # Errors
    ///
    /// Returns [`NumericalError::InvalidTimestep`] before touching the system if
    /// the timestep is not positive and finite. Any error from the force
    /// evaluation rolls positions, velocities and forces back to their
    /// pre-step values.
    pub fn advance(&self, system: &mut ParticleSystem) -> Result<f64, NumericalError> {
        let dt = self.timestep;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(NumericalError::InvalidTimestep(dt));
        }
        let half_dt = 0.5 * dt;

        transaction::atomic(system, |system| {
            half_kick(system, half_dt);
            drift(system, dt);
            let potential = self.evaluator.evaluate(system)?;
            half_kick(system, half_dt);
            trace!(potential, "Velocity-Verlet step committed.");
            Ok(potential)
        })
    }
}

fn half_kick(system: &mut ParticleSystem, half_dt: f64) {
    for particle in system.particles_mut() {
        let velocity = particle.velocity() + particle.force() * (half_dt / particle.mass());
        particle.set_velocity(velocity);
    }
}

fn drift(system: &mut ParticleSystem, dt: f64) {
    for particle in system.particles_mut() {
        let position = particle.position() + particle.velocity() * dt;
        particle.set_position(position);
    }
}

/// Advances `system` by one velocity-Verlet step of length `dt`.
///
/// The particles' current forces must correspond to their current positions,
/// either from a previous step or from an explicit
/// [`evaluate_forces`](crate::core::forcefield::evaluator::evaluate_forces) call.
pub fn step(
    system: &mut ParticleSystem,
    dt: f64,
    cutoff_radius: Option<f64>,
) -> Result<(), NumericalError> {
    VelocityVerlet::new(dt, cutoff_radius)
        .advance(system)
        .map(|_| ())
}
