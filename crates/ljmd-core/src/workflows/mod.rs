//! # Workflows Module
//!
//! Top-level entry points that drive the engine for a complete run.
//!
//! - **Simulation Workflow** ([`simulate`]) - Primes forces, integrates for a fixed
//!   number of steps, samples energies and streams trajectory frames.

pub mod simulate;
