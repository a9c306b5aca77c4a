//! # Core Module
//!
//! Stateless building blocks of the simulation.
//!
//! - **Particles and systems** ([`models`]) - point masses with Lennard-Jones
//!   parameters and the ordered collection they live in
//! - **Interactions** ([`forcefield`]) - the 12-6 potential, mixing rules and
//!   the all-pairs force evaluator
//! - **Output** ([`io`]) - extended-XYZ trajectories and CSV energy logs

pub mod forcefield;
pub mod io;
pub mod models;
