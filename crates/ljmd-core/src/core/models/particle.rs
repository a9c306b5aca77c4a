use nalgebra::Vector3;
use thiserror::Error;

/// Error returned when a particle is constructed with unphysical parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParticleError {
    #[error("Particle mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("Lennard-Jones sigma must be positive and finite, got {0}")]
    InvalidSigma(f64),
    #[error("Lennard-Jones epsilon must be non-negative and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// A point particle interacting through a Lennard-Jones potential.
///
/// Mass and the Lennard-Jones parameters are fixed at construction. Position,
/// velocity and force are plain state: accessors return them by value and
/// setters overwrite them without any validation, so callers never hold a
/// reference into the particle's internals.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    mass: f64,
    sigma: f64,
    epsilon: f64,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    force: Vector3<f64>,
}

impl Particle {
    /// Creates a particle at rest at the origin with zero force.
    ///
    /// # Arguments
    ///
    /// * `mass` - The particle mass, must be positive.
    /// * `sigma` - The Lennard-Jones length parameter, must be positive.
    /// * `epsilon` - The Lennard-Jones well depth, must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns a [`ParticleError`] naming the first parameter that is
    /// out of range or not finite.
    pub fn new(mass: f64, sigma: f64, epsilon: f64) -> Result<Self, ParticleError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ParticleError::InvalidMass(mass));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ParticleError::InvalidSigma(sigma));
        }
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(ParticleError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            mass,
            sigma,
            epsilon,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            force: Vector3::zeros(),
        })
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    #[inline]
    pub fn force(&self) -> Vector3<f64> {
        self.force
    }

    pub fn set_position(&mut self, position: Vector3<f64>) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector3<f64>) {
        self.velocity = velocity;
    }

    pub fn set_force(&mut self, force: Vector3<f64>) {
        self.force = force;
    }

    pub fn set_position_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.position = Vector3::new(x, y, z);
    }

    pub fn set_velocity_xyz(&mut self, vx: f64, vy: f64, vz: f64) {
        self.velocity = Vector3::new(vx, vy, vz);
    }

    pub fn set_force_xyz(&mut self, fx: f64, fy: f64, fz: f64) {
        self.force = Vector3::new(fx, fy, fz);
    }

    /// Kinetic energy `0.5 * m * |v|^2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    #[inline]
    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }
}
