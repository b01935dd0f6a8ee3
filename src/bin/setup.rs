use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shoppersim::orchestration::{EventType, RunEvent, RunLog};
use shoppersim::workspace::{ensure_workspace_structure, load_from, save_to};
use uuid::Uuid;

/// Record population defaults in the workspace config.toml.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix the master seed so every run is reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Default number of customers
    #[arg(long)]
    size: Option<usize>,

    /// Default output path for the customer list
    #[arg(long)]
    output: Option<PathBuf>,

    /// Default cap on profiles drawn per run
    #[arg(long)]
    max_attempts: Option<u64>,
}

fn main() -> Result<()> {
    shoppersim::logging::init_logging("warn")?;
    let cli = Cli::parse();
    let workspace = ensure_workspace_structure()?;
    let config_path = workspace.config_file();
    let mut config = load_from(&config_path)?;
    let mut changed = !config_path.exists();

    changed |= apply_override(&mut config.population.seed, cli.seed.map(Some));
    changed |= apply_override(&mut config.population.size, cli.size);
    changed |= apply_override(&mut config.output.path, cli.output);
    changed |= apply_override(&mut config.population.max_attempts, cli.max_attempts.map(Some));

    if changed {
        config.plan().validate()?;
        save_to(&config, &config_path)?;
        RunLog::for_workspace(&workspace).append_event(&RunEvent::new(
            Uuid::new_v4(),
            EventType::ConfigSaved,
            serde_json::to_value(&config)?,
        ))?;
        println!("Population settings recorded at {}", config_path.display());
    } else {
        println!("Population settings already configured.");
    }
    Ok(())
}

fn apply_override<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}
