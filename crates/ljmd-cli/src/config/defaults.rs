pub struct DefaultsConfig {
    pub timestep: f64,
    pub steps: u64,
    pub energy_interval: u64,
    pub trajectory_interval: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            timestep: 0.001,
            steps: 1000,
            energy_interval: 10,
            trajectory_interval: 100,
        }
    }
}
