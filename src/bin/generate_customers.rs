use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use shoppersim::orchestration::RunLog;
use shoppersim::runner::{run_generation, RunRequest};
use shoppersim::workspace::{ensure_workspace_structure, load_from, load_required, AppConfig};

/// Generate a synthetic supermarket customer population as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to read instead of the workspace config.toml (must exist)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the customer list
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Master seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of customers to generate
    #[arg(long)]
    size: Option<usize>,

    /// Give up after drawing this many profiles
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Reference date for age computation (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// JSON array of profiles to replay instead of synthesizing them
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Skip appending to the workspace event log
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    shoppersim::logging::init_logging("info")?;
    let cli = Cli::parse();
    let workspace = ensure_workspace_structure()?;
    let config = match &cli.config {
        Some(path) => load_required(path)?,
        None => load_from(workspace.config_file())?,
    };
    let request = build_request(&cli, &config);

    let log = (!cli.no_log).then(|| RunLog::for_workspace(&workspace));
    let report = run_generation(&request, log.as_ref())?;

    print!("{}", report.summary.render(&request.plan.habit_weights));
    println!(
        "Profiles drawn: {} ({} rejected)",
        report.attempts, report.rejected
    );
    println!("Seed: {}", report.seed);
    println!(
        "Wrote {} customers to {} (sha256 {})",
        report.written.records,
        report.written.path.display(),
        report.written.hash
    );
    Ok(())
}

fn build_request(cli: &Cli, config: &AppConfig) -> RunRequest {
    let mut plan = config.plan();
    if let Some(size) = cli.size {
        plan.size = size;
    }
    if let Some(limit) = cli.max_attempts {
        plan.max_attempts = Some(limit);
    }
    RunRequest {
        plan,
        seed: cli
            .seed
            .or(config.population.seed)
            .unwrap_or_else(rand::random),
        today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
        output: cli
            .output
            .clone()
            .unwrap_or_else(|| config.output.path.clone()),
        profiles: cli.profiles.clone(),
    }
}
