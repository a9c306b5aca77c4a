use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ljmd - Lennard-Jones molecular dynamics with velocity-Verlet integration.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for force evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Integrate a particle system for a number of steps and write trajectory and energies.
    Run(RunArgs),
    /// Evaluate forces once and print the energies of the initial configuration.
    Energy(EnergyArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Path to the simulation input file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Write an extended-XYZ trajectory to this path.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub trajectory: Option<PathBuf>,

    /// Write the sampled energies as CSV to this path.
    #[arg(short = 'e', long, value_name = "PATH")]
    pub energy_log: Option<PathBuf>,

    // --- Simulation Overrides ---
    /// Override the number of integration steps.
    #[arg(short = 'n', long, value_name = "INT")]
    pub steps: Option<u64>,

    /// Override the integration timestep.
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub timestep: Option<f64>,

    #[command(flatten)]
    pub cutoff: CutoffOverride,

    // --- Output Overrides ---
    /// Override how often (in steps) energies are sampled.
    #[arg(long, value_name = "INT")]
    pub energy_interval: Option<u64>,

    /// Override how often (in steps) trajectory frames are written.
    #[arg(long, value_name = "INT")]
    pub trajectory_interval: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S simulation.steps=5000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Path to the simulation input file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    #[command(flatten)]
    pub cutoff: CutoffOverride,

    /// Set a specific configuration value, overriding the config file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive flags overriding `simulation.cutoff-radius`.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct CutoffOverride {
    /// Override the interaction cutoff radius.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,
    /// Evaluate every pair regardless of distance, ignoring any configured cutoff.
    #[arg(long)]
    pub no_cutoff: bool,
}

impl CutoffOverride {
    /// Returns `Some(cutoff)` if the command line decides the cutoff, `None` to defer to the file.
    pub fn resolve(&self) -> Option<Option<f64>> {
        match (self.cutoff, self.no_cutoff) {
            (Some(radius), _) => Some(Some(radius)),
            (None, true) => Some(None),
            (None, false) => None,
        }
    }
}
