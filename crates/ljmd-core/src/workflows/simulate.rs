use crate::core::forcefield::term::{EnergyReport, EnergySample};
use crate::core::io::traits::TrajectoryWriter;
use crate::core::models::system::ParticleSystem;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::SimulationResult;
use tracing::{debug, info, instrument, warn};

const ENERGY_DRIFT_WARNING_THRESHOLD: f64 = 1e-3;

/// Runs a constant-energy simulation of `system` for `config.num_steps()` steps.
///
/// Energies are sampled at step 0, every `energy_interval` steps and at the
/// final step; trajectory frames follow the same rule with
/// `trajectory_interval`. The system is advanced in place.
///
/// # Errors
///
/// Returns [`EngineError::EmptySystem`] for a system without particles,
/// [`EngineError::Numerical`] with the failing step if a force evaluation or
/// step fails, and [`EngineError::Trajectory`] if the writer rejects a frame.
/// After a numerical failure the system holds the state of the last completed
/// step.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    system: &mut ParticleSystem,
    config: &SimulationConfig,
    reporter: &ProgressReporter,
    mut trajectory: Option<&mut dyn TrajectoryWriter>,
) -> Result<SimulationResult, EngineError> {
    if system.is_empty() {
        return Err(EngineError::EmptySystem);
    }

    // === Phase 0: Initial forces ===
    reporter.report(Progress::PhaseStart {
        name: "Initial Forces",
    });
    info!(
        particles = system.len(),
        steps = config.num_steps(),
        timestep = config.timestep(),
        cutoff = ?config.cutoff_radius(),
        "Starting simulation."
    );

    let integrator = config.integrator();
    let potential = integrator
        .prime(system)
        .map_err(|source| EngineError::Numerical { step: 0, source })?;

    let mut samples = Vec::new();
    record_sample(&mut samples, reporter, system, 0, config.timestep(), potential);
    write_frame(&mut trajectory, 0, system)?;

    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Integration ===
    reporter.report(Progress::PhaseStart {
        name: "Integration",
    });
    reporter.report(Progress::StepsStart {
        total_steps: config.num_steps(),
    });

    for step in 1..=config.num_steps() {
        let potential = integrator
            .advance(system)
            .map_err(|source| EngineError::Numerical { step, source })?;

        let is_last = step == config.num_steps();
        if is_last || step % config.energy_interval() == 0 {
            record_sample(&mut samples, reporter, system, step, config.timestep(), potential);
        }
        if is_last || step % config.trajectory_interval() == 0 {
            write_frame(&mut trajectory, step, system)?;
        }

        reporter.report(Progress::StepAdvanced);
    }

    if let Some(writer) = trajectory.as_mut() {
        writer
            .finish()
            .map_err(|source| EngineError::Trajectory {
                step: config.num_steps(),
                source,
            })?;
    }

    let result = SimulationResult {
        steps_completed: config.num_steps(),
        samples,
    };
    report_energy_drift(&result, reporter);

    reporter.report(Progress::StepsFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(result)
}

fn record_sample(
    samples: &mut Vec<EnergySample>,
    reporter: &ProgressReporter,
    system: &ParticleSystem,
    step: u64,
    timestep: f64,
    potential: f64,
) {
    let report = EnergyReport::new(system.kinetic_energy(), potential);
    let sample = EnergySample::new(step, step as f64 * timestep, report);
    debug!(
        step,
        kinetic = sample.kinetic,
        potential = sample.potential,
        total = sample.total,
        "Energy sample."
    );
    samples.push(sample);
    reporter.report(Progress::EnergySampled(sample));
}

fn write_frame(
    trajectory: &mut Option<&mut dyn TrajectoryWriter>,
    step: u64,
    system: &ParticleSystem,
) -> Result<(), EngineError> {
    if let Some(writer) = trajectory.as_mut() {
        writer
            .write_frame(step, system)
            .map_err(|source| EngineError::Trajectory { step, source })?;
    }
    Ok(())
}

fn report_energy_drift(result: &SimulationResult, reporter: &ProgressReporter) {
    let Some(drift) = result.relative_energy_drift() else {
        return;
    };
    reporter.report(Progress::Message(format!(
        "Relative energy drift: {:.3e}",
        drift
    )));
    if drift > ENERGY_DRIFT_WARNING_THRESHOLD {
        warn!(
            drift,
            "Relative energy drift exceeds {:e}; consider a smaller timestep.",
            ENERGY_DRIFT_WARNING_THRESHOLD
        );
        reporter.report(Progress::Message(format!(
            "Energy drift exceeds {:e}; consider a smaller timestep.",
            ENERGY_DRIFT_WARNING_THRESHOLD
        )));
    }
    info!(
        steps = result.steps_completed,
        drift, "Simulation complete."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::evaluator::NumericalError;
    use crate::core::io::traits::TrajectoryError;
    use crate::core::models::particle::Particle;
    use crate::engine::config::SimulationConfigBuilder;
    use nalgebra::Vector3;
    use std::io;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWriter {
        steps: Vec<u64>,
        finished: bool,
        fail_at: Option<u64>,
    }

    impl TrajectoryWriter for RecordingWriter {
        fn write_frame(&mut self, step: u64, _: &ParticleSystem) -> Result<(), TrajectoryError> {
            if self.fail_at == Some(step) {
                return Err(TrajectoryError::Io(io::Error::other("disk full")));
            }
            self.steps.push(step);
            Ok(())
        }

        fn finish(&mut self) -> Result<(), TrajectoryError> {
            self.finished = true;
            Ok(())
        }
    }

    fn dimer(separation: f64) -> ParticleSystem {
        ParticleSystem::from(vec![
            Particle::new(1.0, 1.0, 1.0).unwrap(),
            Particle::new(1.0, 1.0, 1.0)
                .unwrap()
                .with_position(Vector3::new(separation, 0.0, 0.0)),
        ])
    }

    fn config(steps: u64, energy_interval: u64, trajectory_interval: u64) -> SimulationConfig {
        SimulationConfigBuilder::new()
            .timestep(0.001)
            .num_steps(steps)
            .energy_interval(energy_interval)
            .trajectory_interval(trajectory_interval)
            .build()
            .unwrap()
    }

    #[test]
    fn samples_are_taken_at_start_intervals_and_end() {
        let mut system = dimer(1.5);
        let result = run(&mut system, &config(25, 10, 100), &ProgressReporter::new(), None).unwrap();

        let steps: Vec<_> = result.samples.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![0, 10, 20, 25]);
        assert_eq!(result.steps_completed, 25);
        assert!((result.samples[1].time - 0.01).abs() < 1e-15);
    }

    #[test]
    fn frames_follow_trajectory_interval_and_writer_is_finished() {
        let mut system = dimer(1.5);
        let mut writer = RecordingWriter::default();
        run(
            &mut system,
            &config(10, 1, 4),
            &ProgressReporter::new(),
            Some(&mut writer),
        )
        .unwrap();

        assert_eq!(writer.steps, vec![0, 4, 8, 10]);
        assert!(writer.finished);
    }

    #[test]
    fn zero_step_run_returns_only_initial_sample() {
        let mut system = dimer(1.5);
        let original = system.particles()[1].position();
        let result = run(&mut system, &config(0, 1, 1), &ProgressReporter::new(), None).unwrap();

        assert_eq!(result.samples.len(), 1);
        assert_eq!(result.relative_energy_drift(), Some(0.0));
        assert_eq!(system.particles()[1].position(), original);
    }

    #[test]
    fn empty_system_is_rejected() {
        let mut system = ParticleSystem::new();
        let result = run(&mut system, &config(10, 1, 1), &ProgressReporter::new(), None);
        assert!(matches!(result, Err(EngineError::EmptySystem)));
    }

    #[test]
    fn coincident_initial_positions_fail_at_step_zero() {
        let mut system = dimer(0.0);
        let result = run(&mut system, &config(10, 1, 1), &ProgressReporter::new(), None);
        assert!(matches!(
            result,
            Err(EngineError::Numerical {
                step: 0,
                source: NumericalError::CoincidentParticles { .. }
            })
        ));
    }

    #[test]
    fn trajectory_failure_reports_step() {
        let mut system = dimer(1.5);
        let mut writer = RecordingWriter {
            fail_at: Some(2),
            ..Default::default()
        };
        let result = run(
            &mut system,
            &config(5, 1, 1),
            &ProgressReporter::new(),
            Some(&mut writer),
        );

        assert!(matches!(result, Err(EngineError::Trajectory { step: 2, .. })));
        assert_eq!(writer.steps, vec![0, 1]);
    }

    #[test]
    fn huge_step_count_does_not_preallocate_samples() {
        let config = SimulationConfigBuilder::new()
            .timestep(0.001)
            .num_steps(u64::MAX)
            .energy_interval(1)
            .trajectory_interval(1)
            .build()
            .unwrap();
        let mut system = dimer(1.5);
        let mut writer = RecordingWriter {
            fail_at: Some(2),
            ..Default::default()
        };

        let result = run(&mut system, &config, &ProgressReporter::new(), Some(&mut writer));

        assert!(matches!(result, Err(EngineError::Trajectory { step: 2, .. })));
        assert_eq!(writer.steps, vec![0, 1]);
    }

    #[test]
    fn energy_drift_is_reported_as_a_message_before_steps_finish() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            match event {
                Progress::Message(msg) => events.lock().unwrap().push(msg),
                Progress::StepsFinish => events.lock().unwrap().push("finish".to_string()),
                _ => {}
            }
        }));

        let mut system = dimer(1.5);
        run(&mut system, &config(20, 5, 20), &reporter, None).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(events.len() >= 2);
        assert!(events[0].starts_with("Relative energy drift: "));
        assert_eq!(events.last().map(String::as_str), Some("finish"));
    }

    #[test]
    fn progress_reports_every_step_and_sample() {
        let counts = Mutex::new((0u64, 0usize, 0u64));
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            let mut counts = counts.lock().unwrap();
            match event {
                Progress::StepAdvanced => counts.0 += 1,
                Progress::EnergySampled(_) => counts.1 += 1,
                Progress::StepsStart { total_steps } => counts.2 = total_steps,
                _ => {}
            }
        }));

        let mut system = dimer(1.5);
        run(&mut system, &config(12, 5, 12), &reporter, None).unwrap();
        drop(reporter);

        let (steps, samples, total) = counts.into_inner().unwrap();
        assert_eq!(steps, 12);
        assert_eq!(samples, 4);
        assert_eq!(total, 12);
    }
}
