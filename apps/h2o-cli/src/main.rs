mod display;
mod error;
mod figure;
mod report;

use clap::{Parser, Subcommand};
use error::CliResult;
use h2o_curves::{ScenarioConfig, ScenarioName, assemble, load_yaml, save_yaml};
use h2o_eos::{EquationOfState, Water};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TABLE_ROWS: usize = 12;

#[derive(Parser)]
#[command(name = "h2o-cli")]
#[command(about = "Latent heats and specific volume of water and ice", long_about = None)]
struct Cli {
    /// Scenario configuration YAML (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enthalpies of vaporization, sublimation and fusion versus temperature
    Latent {
        /// Output image (.svg or .png); prints a table when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Specific volume of liquid water and ice at fixed pressure
    Volume {
        /// Output image (.svg or .png); prints a table when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the effective scenario configuration as YAML
    Config {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading scenario configuration");
            load_yaml(path)?
        }
        None => ScenarioConfig::default(),
    };

    match cli.command {
        Commands::Latent { output } => {
            cmd_scenario(ScenarioName::LatentHeat, &config, output.as_deref())
        }
        Commands::Volume { output } => {
            cmd_scenario(ScenarioName::Volume, &config, output.as_deref())
        }
        Commands::Config { output } => cmd_config(&config, output.as_deref()),
    }
}

fn cmd_scenario(
    name: ScenarioName,
    config: &ScenarioConfig,
    output: Option<&Path>,
) -> CliResult<()> {
    let water = Water::new();
    info!(scenario = %name, eos = water.name(), "assembling scenario");
    let scenario = assemble(name, &water, config);

    match output {
        Some(path) => {
            figure::render(&scenario, path)?;
            println!("✓ Wrote {} figure to {}", scenario.name, path.display());
            for failure in &scenario.failures {
                eprintln!("✗ {failure}");
            }
        }
        None => print!("{}", report::format_scenario(&scenario, TABLE_ROWS)),
    }

    // Partial figures are still written; missing curves fail the run.
    scenario.ensure_complete()?;
    Ok(())
}

fn cmd_config(config: &ScenarioConfig, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            save_yaml(path, config)?;
            println!("✓ Wrote configuration to {}", path.display());
        }
        None => print!("{}", config.to_yaml_string()?),
    }
    Ok(())
}
