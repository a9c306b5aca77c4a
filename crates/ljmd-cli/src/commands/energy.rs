use crate::cli::EnergyArgs;
use crate::config::{EnergyConfig, build_energy_config};
use crate::error::Result;
use ljmd::core::forcefield::evaluator::evaluate_forces;
use ljmd::core::forcefield::term::EnergyReport;
use ljmd::core::models::system::ParticleSystem;
use tracing::{debug, instrument};

#[instrument(skip_all, name = "energy_command")]
pub fn run(args: EnergyArgs) -> Result<()> {
    let (report, system) = evaluate(&args)?;

    println!("Particles:        {}", system.len());
    println!("Kinetic energy:   {:.10}", report.kinetic);
    println!("Potential energy: {:.10}", report.potential);
    println!("Total energy:     {:.10}", report.total());
    Ok(())
}

fn evaluate(args: &EnergyArgs) -> Result<(EnergyReport, ParticleSystem)> {
    let EnergyConfig {
        mut system,
        cutoff_radius,
    } = build_energy_config(args)?;
    debug!(?cutoff_radius, "Evaluating single-point energy.");

    let potential = evaluate_forces(&mut system, cutoff_radius)?;
    Ok((EnergyReport::new(system.kinetic_energy(), potential), system))
}
