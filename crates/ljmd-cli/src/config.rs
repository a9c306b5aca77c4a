mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_energy_config, build_run_config};
pub use models::{AppConfig, EnergyConfig};
