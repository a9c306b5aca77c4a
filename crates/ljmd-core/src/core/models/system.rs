use super::ids::ParticleId;
use super::particle::{Particle, ParticleError};
use nalgebra::Vector3;

/// An ordered collection of particles.
///
/// Insertion order is the identity of each particle: the [`ParticleId`] handed
/// out by [`add_particle`](Self::add_particle) stays valid for the lifetime of
/// the system because particles are never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    /// Creates a particle at rest at the origin and appends it to the system.
    ///
    /// # Errors
    ///
    /// Returns a [`ParticleError`] if the parameters violate the particle
    /// invariants; the system is left unchanged.
    pub fn create_particle(
        &mut self,
        mass: f64,
        sigma: f64,
        epsilon: f64,
    ) -> Result<ParticleId, ParticleError> {
        let particle = Particle::new(mass, sigma, epsilon)?;
        Ok(self.add_particle(particle))
    }

    pub fn add_particle(&mut self, particle: Particle) -> ParticleId {
        let id = ParticleId::new(self.particles.len());
        self.particles.push(particle);
        id
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id.index())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles
            .iter()
            .enumerate()
            .map(|(index, particle)| (ParticleId::new(index), particle))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(Particle::mass).sum()
    }

    pub fn total_momentum(&self) -> Vector3<f64> {
        self.particles
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.momentum())
    }

    /// Mass-weighted mean position, or `None` for an empty system.
    pub fn center_of_mass(&self) -> Option<Vector3<f64>> {
        if self.is_empty() {
            return None;
        }
        let weighted = self
            .particles
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.position() * p.mass());
        Some(weighted / self.total_mass())
    }

    /// Velocity of the centre of mass, or `None` for an empty system.
    pub fn center_of_mass_velocity(&self) -> Option<Vector3<f64>> {
        if self.is_empty() {
            return None;
        }
        Some(self.total_momentum() / self.total_mass())
    }
}

impl From<Vec<Particle>> for ParticleSystem {
    fn from(particles: Vec<Particle>) -> Self {
        Self { particles }
    }
}

impl FromIterator<Particle> for ParticleSystem {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}
