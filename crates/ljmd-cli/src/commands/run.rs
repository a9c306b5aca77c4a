use crate::cli::RunArgs;
use crate::config::{AppConfig, build_run_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ljmd::core::io::energy_log::EnergyLogWriter;
use ljmd::core::io::traits::TrajectoryWriter;
use ljmd::core::io::xyz::XyzWriter;
use ljmd::engine::progress::ProgressReporter;
use ljmd::engine::state::SimulationResult;
use ljmd::workflows::simulate;
use tracing::{info, instrument};

#[instrument(skip_all, name = "run_command")]
pub fn run(args: RunArgs, progress: &CliProgressHandler) -> Result<()> {
    let AppConfig {
        mut system,
        simulation,
        trajectory_path,
        energy_log_path,
    } = build_run_config(&args)?;
    info!(
        "Loaded {} particles from {:?}; integrating {} steps with dt = {}.",
        system.len(),
        args.config,
        simulation.num_steps(),
        simulation.timestep()
    );

    let mut trajectory = trajectory_path.as_ref().map(XyzWriter::create).transpose()?;
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let result = simulate::run(
        &mut system,
        &simulation,
        &reporter,
        trajectory
            .as_mut()
            .map(|writer| writer as &mut dyn TrajectoryWriter),
    )?;

    if let Some(path) = &trajectory_path {
        info!("Trajectory written to {:?}.", path);
    }
    if let Some(path) = &energy_log_path {
        let mut log = EnergyLogWriter::create(path)?;
        log.write_all(&result.samples)?;
        info!("Energy log with {} samples written to {:?}.", result.samples.len(), path);
    }

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &SimulationResult) {
    println!("Steps completed:  {}", result.steps_completed);
    if let (Some(first), Some(last)) = (result.initial_sample(), result.final_sample()) {
        println!("Initial energy:   {:.10}", first.total);
        println!("Final energy:     {:.10}", last.total);
    }
    if let Some(drift) = result.max_relative_energy_drift() {
        println!("Max energy drift: {:.3e}", drift);
    }
}
