//! Output of simulation results.
//!
//! Trajectory frames go through the [`traits::TrajectoryWriter`] trait so the
//! workflow does not depend on a concrete format. Energies are logged as CSV.

pub mod energy_log;
pub mod traits;
pub mod xyz;
