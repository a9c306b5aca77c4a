//! # ljmd
//!
//! A small molecular-dynamics kernel for particles interacting through the
//! Lennard-Jones 12-6 potential, integrated with velocity-Verlet.
//!
//! ## Layout
//!
//! - **[`core`]: Data and physics.** Particle and system models, the pair
//!   potential with Lorentz-Berthelot mixing, the pairwise force evaluator and
//!   trajectory/energy writers.
//!
//! - **[`engine`]: Time stepping.** Run configuration, the velocity-Verlet
//!   integrator, step-level rollback on numerical failure and progress
//!   reporting.
//!
//! - **[`workflows`]: Entry points.** Complete runs that tie the engine to
//!   output sinks and return sampled energies.
//!
//! Units are reduced and left to the caller; the library only requires that
//! they are consistent.

pub mod core;
pub mod engine;
pub mod workflows;
