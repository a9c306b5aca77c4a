use ljmd::core::models::system::ParticleSystem;
use ljmd::engine::config::SimulationConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub system: ParticleSystem,
    pub simulation: SimulationConfig,
    pub trajectory_path: Option<PathBuf>,
    pub energy_log_path: Option<PathBuf>,
}

pub struct EnergyConfig {
    pub system: ParticleSystem,
    pub cutoff_radius: Option<f64>,
}
