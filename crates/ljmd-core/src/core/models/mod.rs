//! # Core Models Module
//!
//! Data structures describing the simulated bodies.
//!
//! - [`particle`] - A single Lennard-Jones particle with its mechanical state
//! - [`system`] - The ordered collection of particles a simulation operates on
//! - [`ids`] - Stable particle identifiers
//!
//! ```ignore
//! use ljmd::core::models::system::ParticleSystem;
//! use nalgebra::Vector3;
//!
//! let mut system = ParticleSystem::new();
//! let id = system.create_particle(1.0, 1.0, 1.0)?;
//! system.particle_mut(id).unwrap().set_position(Vector3::new(1.5, 0.0, 0.0));
//! ```

pub mod ids;
pub mod particle;
pub mod system;
