use gravsim::{Scenario, ScenarioConfig, Trajectory};
use gravsim::{bench_gravity, bench_verlet, background_density, total_energy};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Direct-summation gravitational N-body integrator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario and optionally write the trajectory as CSV
    Run {
        /// Scenario YAML, looked up under scenarios/ when not found as given
        #[arg(short, long, conflicts_with = "preset")]
        file_name: Option<String>,

        /// Built-in scenario
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// Seed for the cosmological preset
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// CSV output path (step,body,x,y,z)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Time the force engines and the integrator step
    Bench,
    /// Background density for scale factor `a`
    Density {
        #[arg(long)]
        a: f64,
        #[arg(long, default_value_t = 0.3)]
        omega_m: f64,
        #[arg(long, default_value_t = 0.7)]
        omega_lambda: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    FourBody,
    Cosmological,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<Scenario> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    Ok(scenario)
}

fn write_trajectory(trajectory: &Trajectory, path: &PathBuf) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    trajectory.write_csv(BufWriter::new(file))?;
    info!(
        "wrote {} snapshots x {} bodies to {}",
        trajectory.len(),
        trajectory.n_bodies(),
        path.display()
    );
    Ok(())
}

fn run_scenario(scenario: Scenario, output: Option<PathBuf>) -> Result<()> {
    let g = scenario.parameters.g;
    let e0 = total_energy(&scenario.system, g)?;

    let mut sim = scenario.into_simulation()?;
    let trajectory = sim.run()?;

    let e1 = total_energy(sim.system(), g)?;
    let drift = if e0 != 0.0 { ((e1 - e0) / e0).abs() } else { (e1 - e0).abs() };
    info!("total energy: initial {:e} J, final {:e} J, relative drift {:e}", e0, e1, drift);

    match output {
        Some(path) => write_trajectory(&trajectory, &path)?,
        None => {
            if let Some(last) = trajectory.last() {
                for (i, x) in last.iter().enumerate() {
                    println!("body {i}: [{:e}, {:e}, {:e}]", x.x, x.y, x.z);
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Command::Run { file_name, preset, seed, output } => {
            let scenario = match (file_name, preset) {
                (Some(f), _) => load_scenario_from_yaml(&f)?,
                (None, Some(Preset::FourBody)) => Scenario::four_body_square(),
                (None, Some(Preset::Cosmological)) => Scenario::cosmological(seed),
                (None, None) => {
                    warn!("no scenario given, using the four-body preset");
                    Scenario::four_body_square()
                }
            };
            run_scenario(scenario, output)?;
        }
        Command::Bench => {
            bench_gravity();
            bench_verlet();
        }
        Command::Density { a, omega_m, omega_lambda } => {
            anyhow::ensure!(a > 0.0, "scale factor must be positive, got {a}");
            println!("{:e} kg/m^3", background_density(a, omega_m, omega_lambda));
        }
    }

    Ok(())
}
