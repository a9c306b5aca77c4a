use super::integrator::VelocityVerlet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Validated run parameters. Only [`SimulationConfigBuilder`] can construct one,
/// so both sampling intervals are always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    timestep: f64,
    num_steps: u64,
    cutoff_radius: Option<f64>,
    energy_interval: u64,
    trajectory_interval: u64,
}

impl SimulationConfig {
    #[inline]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    #[inline]
    pub fn num_steps(&self) -> u64 {
        self.num_steps
    }

    #[inline]
    pub fn cutoff_radius(&self) -> Option<f64> {
        self.cutoff_radius
    }

    #[inline]
    pub fn energy_interval(&self) -> u64 {
        self.energy_interval
    }

    #[inline]
    pub fn trajectory_interval(&self) -> u64 {
        self.trajectory_interval
    }

    pub fn integrator(&self) -> VelocityVerlet {
        VelocityVerlet::new(self.timestep, self.cutoff_radius)
    }
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    timestep: Option<f64>,
    num_steps: Option<u64>,
    cutoff_radius: Option<f64>,
    energy_interval: Option<u64>,
    trajectory_interval: Option<u64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestep(mut self, timestep: f64) -> Self {
        self.timestep = Some(timestep);
        self
    }
    pub fn num_steps(mut self, steps: u64) -> Self {
        self.num_steps = Some(steps);
        self
    }
    pub fn cutoff_radius(mut self, cutoff: Option<f64>) -> Self {
        self.cutoff_radius = cutoff;
        self
    }
    pub fn energy_interval(mut self, interval: u64) -> Self {
        self.energy_interval = Some(interval);
        self
    }
    pub fn trajectory_interval(mut self, interval: u64) -> Self {
        self.trajectory_interval = Some(interval);
        self
    }

    /// Validates the collected parameters.
    ///
    /// Sampling intervals default to every step when not set.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let timestep = self
            .timestep
            .ok_or(ConfigError::MissingParameter("timestep"))?;
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "timestep",
                reason: format!("must be positive and finite, got {}", timestep),
            });
        }

        let num_steps = self
            .num_steps
            .ok_or(ConfigError::MissingParameter("num_steps"))?;

        if let Some(cutoff) = self.cutoff_radius {
            if !(cutoff > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "cutoff_radius",
                    reason: format!("must be positive, got {}", cutoff),
                });
            }
        }

        let energy_interval = positive_interval("energy_interval", self.energy_interval)?;
        let trajectory_interval =
            positive_interval("trajectory_interval", self.trajectory_interval)?;

        Ok(SimulationConfig {
            timestep,
            num_steps,
            cutoff_radius: self.cutoff_radius,
            energy_interval,
            trajectory_interval,
        })
    }
}

fn positive_interval(name: &'static str, value: Option<u64>) -> Result<u64, ConfigError> {
    match value {
        None => Ok(1),
        Some(0) => Err(ConfigError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        }),
        Some(n) => Ok(n),
    }
}
