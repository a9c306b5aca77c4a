use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergyReport {
    pub fn new(kinetic: f64, potential: f64) -> Self {
        Self { kinetic, potential }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

impl Add for EnergyReport {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            kinetic: self.kinetic + rhs.kinetic,
            potential: self.potential + rhs.potential,
        }
    }
}

impl AddAssign for EnergyReport {
    fn add_assign(&mut self, rhs: Self) {
        self.kinetic += rhs.kinetic;
        self.potential += rhs.potential;
    }
}

impl Sum for EnergyReport {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, term| acc + term)
    }
}

/// Energies recorded at one point of a trajectory.
///
/// Field order is the column order of the CSV energy log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySample {
    pub step: u64,
    pub time: f64,
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl EnergySample {
    pub fn new(step: u64, time: f64, report: EnergyReport) -> Self {
        Self {
            step,
            time,
            kinetic: report.kinetic,
            potential: report.potential,
            total: report.total(),
        }
    }

    pub fn report(&self) -> EnergyReport {
        EnergyReport::new(self.kinetic, self.potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_returns_sum_of_kinetic_and_potential() {
        let report = EnergyReport::new(1.5, -2.0);
        assert_eq!(report.total(), -0.5);
    }

    #[test]
    fn add_sums_each_field() {
        let result = EnergyReport::new(1.0, 2.0) + EnergyReport::new(3.0, -4.0);
        assert_eq!(result, EnergyReport::new(4.0, -2.0));
    }

    #[test]
    fn add_assign_accumulates_each_field() {
        let mut report = EnergyReport::new(1.0, 2.0);
        report += EnergyReport::new(0.5, 0.5);
        assert_eq!(report, EnergyReport::new(1.5, 2.5));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: EnergyReport = std::iter::empty().sum();
        assert_eq!(total, EnergyReport::default());
    }

    #[test]
    fn sample_copies_report_and_precomputes_total() {
        let sample = EnergySample::new(10, 0.01, EnergyReport::new(0.25, -1.0));
        assert_eq!(sample.step, 10);
        assert_eq!(sample.total, -0.75);
        assert_eq!(sample.report(), EnergyReport::new(0.25, -1.0));
    }
}
