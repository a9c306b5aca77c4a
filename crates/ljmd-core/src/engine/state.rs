use crate::core::forcefield::term::EnergySample;

/// Outcome of a completed simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub steps_completed: u64,
    /// Energy samples in step order, starting with the primed step-0 state.
    pub samples: Vec<EnergySample>,
}

impl SimulationResult {
    pub fn initial_sample(&self) -> Option<&EnergySample> {
        self.samples.first()
    }

    pub fn final_sample(&self) -> Option<&EnergySample> {
        self.samples.last()
    }

    /// `|E_final - E_0| / |E_0|`, or the absolute drift when `E_0` is zero.
    pub fn relative_energy_drift(&self) -> Option<f64> {
        let initial = self.initial_sample()?.total;
        let last = self.final_sample()?.total;
        Some(relative_deviation(last, initial))
    }

    /// Largest relative deviation from the initial total energy over all samples.
    pub fn max_relative_energy_drift(&self) -> Option<f64> {
        let initial = self.initial_sample()?.total;
        self.samples
            .iter()
            .map(|sample| relative_deviation(sample.total, initial))
            .reduce(f64::max)
    }
}

fn relative_deviation(value: f64, reference: f64) -> f64 {
    let deviation = (value - reference).abs();
    if reference == 0.0 {
        deviation
    } else {
        deviation / reference.abs()
    }
}
