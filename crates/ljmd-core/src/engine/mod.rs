//! # Engine Module
//!
//! The stateful time-stepping layer of LJMD.
//!
//! ## Overview
//!
//! The engine advances a [`ParticleSystem`](crate::core::models::system::ParticleSystem)
//! through time using the force field from [`crate::core::forcefield`]. It owns
//! none of the particles: every operation borrows the system for the duration
//! of a single call.
//!
//! ## Architecture
//!
//! - **Integration** ([`integrator`]) - Velocity-Verlet stepping
//! - **Transactions** ([`transaction`]) - Snapshot and rollback of particle state so a
//!   failed step leaves no partial update behind
//! - **Configuration** ([`config`]) - Validated run parameters
//! - **State Tracking** ([`state`]) - Results of a finished run
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level errors carrying the failing step

pub mod config;
pub mod error;
pub mod integrator;
pub mod progress;
pub mod state;
pub mod transaction;
