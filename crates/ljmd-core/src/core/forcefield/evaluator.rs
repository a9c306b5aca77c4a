use super::mixing::LennardJonesPair;
use super::potentials;
use crate::core::models::ids::ParticleId;
use crate::core::models::particle::Particle;
use crate::core::models::system::ParticleSystem;
use nalgebra::Vector3;
use thiserror::Error;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericalError {
    #[error("Particles {first} and {second} are coincident (zero separation)")]
    CoincidentParticles { first: ParticleId, second: ParticleId },

    #[error("Non-finite separation {distance} between particles {first} and {second}")]
    NonFiniteDistance {
        first: ParticleId,
        second: ParticleId,
        distance: f64,
    },

    #[error("Non-finite Lennard-Jones force between particles {first} and {second}")]
    NonFiniteForce { first: ParticleId, second: ParticleId },

    #[error("Cutoff radius must be positive, got {0}")]
    InvalidCutoff(f64),

    #[error("Timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
}

/// Naive O(n²) Lennard-Jones force evaluator with an optional hard cutoff.
///
/// Pairs whose separation exceeds the cutoff radius are skipped entirely: they
/// contribute neither force nor energy, and the potential is not shifted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceEvaluator {
    cutoff_radius: Option<f64>,
}

impl ForceEvaluator {
    pub fn new(cutoff_radius: Option<f64>) -> Self {
        Self { cutoff_radius }
    }

    pub fn cutoff_radius(&self) -> Option<f64> {
        self.cutoff_radius
    }

    /// Recomputes the force on every particle and returns the total potential energy.
    ///
    /// Forces are accumulated from zero in a scratch buffer and written into the
    /// particles only once every pair has been evaluated.
    ///
    /// # Errors
    ///
    /// Returns a [`NumericalError`] if two particles coincide, a separation or
    /// pair force is not finite, or the cutoff radius is not positive. The
    /// system is not modified in that case.
    pub fn evaluate(&self, system: &mut ParticleSystem) -> Result<f64, NumericalError> {
        let accumulated = self.compute(system)?;
        for (particle, force) in system
            .particles_mut()
            .iter_mut()
            .zip(accumulated.forces)
        {
            particle.set_force(force);
        }
        Ok(accumulated.potential)
    }

    /// Computes forces and potential energy without touching the system.
    pub fn compute(&self, system: &ParticleSystem) -> Result<PairAccumulator, NumericalError> {
        let cutoff_sq = self.cutoff_squared()?;
        let particles = system.particles();
        let n = particles.len();

        #[cfg(not(feature = "parallel"))]
        let accumulated = (0..n).try_fold(PairAccumulator::new(n), |mut acc, i| {
            acc.accumulate_row(particles, i, cutoff_sq)?;
            Ok::<_, NumericalError>(acc)
        })?;

        #[cfg(feature = "parallel")]
        let accumulated = (0..n)
            .into_par_iter()
            .try_fold(
                || PairAccumulator::new(n),
                |mut acc, i| {
                    acc.accumulate_row(particles, i, cutoff_sq)?;
                    Ok::<_, NumericalError>(acc)
                },
            )
            .try_reduce(|| PairAccumulator::new(n), |a, b| Ok(a.merge(b)))?;

        trace!(
            particles = n,
            pairs = accumulated.pairs_evaluated,
            potential = accumulated.potential,
            "Evaluated Lennard-Jones forces."
        );
        Ok(accumulated)
    }

    fn cutoff_squared(&self) -> Result<Option<f64>, NumericalError> {
        match self.cutoff_radius {
            None => Ok(None),
            Some(rc) if rc > 0.0 => Ok(Some(rc * rc)),
            Some(rc) => Err(NumericalError::InvalidCutoff(rc)),
        }
    }
}

/// Per-particle forces and potential energy summed over a set of pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct PairAccumulator {
    pub forces: Vec<Vector3<f64>>,
    pub potential: f64,
    pub pairs_evaluated: usize,
}

impl PairAccumulator {
    fn new(n: usize) -> Self {
        Self {
            forces: vec![Vector3::zeros(); n],
            potential: 0.0,
            pairs_evaluated: 0,
        }
    }

    /// Adds every pair `(i, j)` with `j > i`.
    fn accumulate_row(
        &mut self,
        particles: &[Particle],
        i: usize,
        cutoff_sq: Option<f64>,
    ) -> Result<(), NumericalError> {
        let pi = &particles[i];
        for (j, pj) in particles.iter().enumerate().skip(i + 1) {
            let r = pj.position() - pi.position();
            let dist_sq = r.norm_squared();

            if !dist_sq.is_finite() {
                return Err(NumericalError::NonFiniteDistance {
                    first: ParticleId::new(i),
                    second: ParticleId::new(j),
                    distance: dist_sq.sqrt(),
                });
            }
            if dist_sq == 0.0 {
                return Err(NumericalError::CoincidentParticles {
                    first: ParticleId::new(i),
                    second: ParticleId::new(j),
                });
            }
            if cutoff_sq.is_some_and(|limit| dist_sq > limit) {
                continue;
            }

            let pair = LennardJonesPair::mix(pi, pj);
            let (energy, factor) = potentials::lennard_jones_pair(dist_sq, pair.sigma, pair.epsilon);
            if !(energy.is_finite() && factor.is_finite()) {
                return Err(NumericalError::NonFiniteForce {
                    first: ParticleId::new(i),
                    second: ParticleId::new(j),
                });
            }

            let force_on_i = -(r * factor);
            self.forces[i] += force_on_i;
            self.forces[j] -= force_on_i;
            self.potential += energy;
            self.pairs_evaluated += 1;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Self) -> Self {
        for (own, theirs) in self.forces.iter_mut().zip(other.forces) {
            *own += theirs;
        }
        self.potential += other.potential;
        self.pairs_evaluated += other.pairs_evaluated;
        self
    }
}

/// Populates every particle's force and returns the total potential energy.
pub fn evaluate_forces(
    system: &mut ParticleSystem,
    cutoff_radius: Option<f64>,
) -> Result<f64, NumericalError> {
    ForceEvaluator::new(cutoff_radius).evaluate(system)
}
