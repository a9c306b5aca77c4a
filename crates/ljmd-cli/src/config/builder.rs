use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileParticle};
use super::models::{AppConfig, EnergyConfig};
use crate::cli::{EnergyArgs, RunArgs};
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use ljmd::core::models::particle::Particle;
use ljmd::core::models::system::ParticleSystem;
use ljmd::engine::config::SimulationConfigBuilder;
use tracing::debug;

pub fn build_run_config(args: &RunArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = FileConfig::from_file(&args.config)?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let sim_file = file_config.simulation.take().unwrap_or_default();
    let out_file = file_config.output.take().unwrap_or_default();

    let timestep = args
        .timestep
        .or(sim_file.timestep)
        .unwrap_or(defaults.timestep);
    let steps = args.steps.or(sim_file.steps).unwrap_or(defaults.steps);
    let cutoff_radius = args.cutoff.resolve().unwrap_or(sim_file.cutoff_radius);
    let energy_interval = args
        .energy_interval
        .or(out_file.energy_interval)
        .unwrap_or(defaults.energy_interval);
    let trajectory_interval = args
        .trajectory_interval
        .or(out_file.trajectory_interval)
        .unwrap_or(defaults.trajectory_interval);

    let simulation = SimulationConfigBuilder::new()
        .timestep(timestep)
        .num_steps(steps)
        .cutoff_radius(cutoff_radius)
        .energy_interval(energy_interval)
        .trajectory_interval(trajectory_interval)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let system = build_system(&file_config.particles)?;
    debug!(
        particles = system.len(),
        ?simulation,
        "Resolved run configuration."
    );

    Ok(AppConfig {
        system,
        simulation,
        trajectory_path: args.trajectory.clone(),
        energy_log_path: args.energy_log.clone(),
    })
}

pub fn build_energy_config(args: &EnergyArgs) -> Result<EnergyConfig> {
    let file_config = FileConfig::from_file(&args.config)?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let sim_file = file_config.simulation.take().unwrap_or_default();
    let cutoff_radius = args.cutoff.resolve().unwrap_or(sim_file.cutoff_radius);
    if let Some(radius) = cutoff_radius {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(CliError::Config(format!(
                "Cutoff radius must be positive and finite, got {}",
                radius
            )));
        }
    }

    Ok(EnergyConfig {
        system: build_system(&file_config.particles)?,
        cutoff_radius,
    })
}

fn build_system(particles: &[FileParticle]) -> Result<ParticleSystem> {
    if particles.is_empty() {
        return Err(CliError::Config(
            "The input defines no particles; add at least one [[particles]] entry.".to_string(),
        ));
    }

    let mut system = ParticleSystem::with_capacity(particles.len());
    for (index, spec) in particles.iter().enumerate() {
        let mut particle = Particle::new(spec.mass, spec.sigma, spec.epsilon)
            .map_err(|source| CliError::Particle { index, source })?;
        let [x, y, z] = spec.position;
        let [vx, vy, vz] = spec.velocity;
        particle.set_position_xyz(x, y, z);
        particle.set_velocity_xyz(vx, vy, vz);
        system.add_particle(particle);
    }
    Ok(system)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = parser::parse_key_value(kv_pair).map_err(into_config_error)?;

        match key {
            "simulation.timestep" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .timestep = Some(parse(key, value, "float")?);
            }
            "simulation.steps" => {
                config.simulation.get_or_insert_with(Default::default).steps =
                    Some(parse(key, value, "integer")?);
            }
            "simulation.cutoff-radius" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .cutoff_radius = Some(parse(key, value, "float")?);
            }
            "output.energy-interval" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .energy_interval = Some(parse(key, value, "integer")?);
            }
            "output.trajectory-interval" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .trajectory_interval = Some(parse(key, value, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse<T: std::str::FromStr>(key: &str, value: &str, expected: &'static str) -> Result<T> {
    parser::parse_value(key, value, expected).map_err(into_config_error)
}

fn into_config_error(e: ParseError) -> CliError {
    CliError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CutoffOverride;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};

    const INPUT: &str = r#"
        [simulation]
        timestep = 0.002
        steps = 400
        cutoff-radius = 3.0

        [output]
        energy-interval = 4

        [[particles]]
        mass = 1.0
        sigma = 1.0
        epsilon = 1.0
        position = [0.0, 0.0, 0.0]

        [[particles]]
        mass = 1.0
        sigma = 1.0
        epsilon = 1.0
        position = [1.5, 0.0, 0.0]
        velocity = [0.0, 0.5, 0.0]
        "#;

    fn write_input(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn run_args(config: &Path) -> RunArgs {
        RunArgs {
            config: config.to_path_buf(),
            trajectory: None,
            energy_log: None,
            steps: None,
            timestep: None,
            cutoff: CutoffOverride::default(),
            energy_interval: None,
            trajectory_interval: None,
            set_values: vec![],
        }
    }

    #[test]
    fn file_values_fill_in_over_defaults() {
        let (_dir, path) = write_input(INPUT);
        let app = build_run_config(&run_args(&path)).unwrap();
        let sim = app.simulation;

        assert_eq!(sim.timestep(), 0.002);
        assert_eq!(sim.num_steps(), 400);
        assert_eq!(sim.cutoff_radius(), Some(3.0));
        assert_eq!(sim.energy_interval(), 4);
        assert_eq!(
            sim.trajectory_interval(),
            DefaultsConfig::default().trajectory_interval
        );
        assert_eq!(app.system.len(), 2);
        assert_eq!(app.system.particles()[1].velocity().y, 0.5);
    }

    #[test]
    fn defaults_apply_when_file_has_only_particles() {
        let (_dir, path) = write_input(
            r#"
            [[particles]]
            mass = 1.0
            sigma = 1.0
            epsilon = 1.0
            position = [0.0, 0.0, 0.0]
            "#,
        );
        let sim = build_run_config(&run_args(&path)).unwrap().simulation;
        let defaults = DefaultsConfig::default();

        assert_eq!(sim.timestep(), defaults.timestep);
        assert_eq!(sim.num_steps(), defaults.steps);
        assert_eq!(sim.cutoff_radius(), None);
        assert_eq!(sim.energy_interval(), defaults.energy_interval);
    }

    #[test]
    fn cli_overrides_set_values_which_override_file() {
        let (_dir, path) = write_input(INPUT);
        let mut args = run_args(&path);
        args.set_values = vec![
            "simulation.steps=10".to_string(),
            "simulation.timestep=0.0005".to_string(),
            "output.trajectory-interval=7".to_string(),
        ];
        args.steps = Some(25);

        let sim = build_run_config(&args).unwrap().simulation;

        assert_eq!(sim.num_steps(), 25);
        assert_eq!(sim.timestep(), 0.0005);
        assert_eq!(sim.trajectory_interval(), 7);
    }

    #[test]
    fn cutoff_flags_override_file_cutoff() {
        let (_dir, path) = write_input(INPUT);
        let mut args = run_args(&path);

        args.cutoff = CutoffOverride {
            cutoff: None,
            no_cutoff: true,
        };
        assert_eq!(build_run_config(&args).unwrap().simulation.cutoff_radius(), None);

        args.cutoff = CutoffOverride {
            cutoff: Some(2.0),
            no_cutoff: false,
        };
        assert_eq!(
            build_run_config(&args).unwrap().simulation.cutoff_radius(),
            Some(2.0)
        );
    }

    #[test]
    fn unsupported_or_malformed_set_values_are_rejected() {
        let (_dir, path) = write_input(INPUT);
        for bad in ["simulation.temperature=300", "simulation.steps=many", "steps"] {
            let mut args = run_args(&path);
            args.set_values = vec![bad.to_string()];
            assert!(matches!(build_run_config(&args), Err(CliError::Config(_))));
        }
    }

    #[test]
    fn invalid_values_surface_as_config_errors() {
        let (_dir, path) = write_input(INPUT);
        let mut args = run_args(&path);
        args.timestep = Some(-1.0);
        assert!(matches!(build_run_config(&args), Err(CliError::Config(_))));

        let mut args = run_args(&path);
        args.energy_interval = Some(0);
        assert!(matches!(build_run_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_particle_reports_its_index() {
        let (_dir, path) = write_input(
            r#"
            [[particles]]
            mass = 1.0
            sigma = 1.0
            epsilon = 1.0
            position = [0.0, 0.0, 0.0]

            [[particles]]
            mass = 0.0
            sigma = 1.0
            epsilon = 1.0
            position = [1.0, 0.0, 0.0]
            "#,
        );
        let result = build_run_config(&run_args(&path));
        assert!(matches!(result, Err(CliError::Particle { index: 1, .. })));
    }

    #[test]
    fn input_without_particles_is_rejected() {
        let (_dir, path) = write_input("[simulation]\nsteps = 10\n");
        assert!(matches!(
            build_run_config(&run_args(&path)),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn energy_config_uses_file_cutoff_unless_overridden() {
        let (_dir, path) = write_input(INPUT);
        let mut args = EnergyArgs {
            config: path,
            cutoff: CutoffOverride::default(),
            set_values: vec![],
        };
        assert_eq!(build_energy_config(&args).unwrap().cutoff_radius, Some(3.0));

        args.set_values = vec!["simulation.cutoff-radius=1.2".to_string()];
        assert_eq!(build_energy_config(&args).unwrap().cutoff_radius, Some(1.2));

        args.cutoff.no_cutoff = true;
        assert_eq!(build_energy_config(&args).unwrap().cutoff_radius, None);

        args.cutoff = CutoffOverride {
            cutoff: Some(-1.0),
            no_cutoff: false,
        };
        assert!(matches!(
            build_energy_config(&args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let args = run_args(&dir.path().join("absent.toml"));
        assert!(matches!(build_run_config(&args), Err(CliError::Io(_))));
    }
}
