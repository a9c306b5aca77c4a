//! # Force Field Module
//!
//! Lennard-Jones interactions between particles.
//!
//! ## Overview
//!
//! Pair potentials are pure functions of distance and parameters; the evaluator
//! applies them to every pair of a system:
//!
//! - [`potentials`] - 12-6 energy and radial force factor of a single pair
//! - [`mixing`] - Lorentz-Berthelot combination of unlike parameters
//! - [`evaluator`] - O(n²) pair loop writing per-particle forces, with an optional cutoff
//! - [`term`] - Energy bookkeeping shared by the engine and the I/O writers
//!
//! With the `parallel` feature the pair loop is split across rayon workers,
//! each summing into its own force buffer. Summation order then differs from
//! the serial loop, so results agree only up to floating-point rounding.
//!
//! ## Usage
//!
//! ```ignore
//! use ljmd::core::forcefield::evaluator::evaluate_forces;
//!
//! let potential = evaluate_forces(&mut system, Some(2.5))?;
//! ```

pub mod evaluator;
pub mod mixing;
pub mod potentials;
pub mod term;
