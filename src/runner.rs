//! End-to-end generation run: sample, persist, log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::orchestration::{GenerationDetails, RunLog};
use crate::population::{generate_population, PopulationPlan, PopulationSummary, SeedStreams};
use crate::profiles::{ProfileSource, ReplayProfileSource, SyntheticProfileSource};
use crate::storage::{write_population, PopulationWriteOutcome};

/// Fully resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub plan: PopulationPlan,
    pub seed: u64,
    pub today: NaiveDate,
    pub output: PathBuf,
    /// Replay profiles from this JSON file instead of synthesizing them.
    pub profiles: Option<PathBuf>,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub seed: u64,
    pub attempts: u64,
    pub rejected: u64,
    pub summary: PopulationSummary,
    pub written: PopulationWriteOutcome,
}

/// Generates a population, writes it and, when a log is given, records the run.
///
/// Events are only logged once the customer file is on disk; a failed
/// generation or write leaves both the output and the log untouched.
pub fn run_generation(request: &RunRequest, log: Option<&RunLog>) -> Result<RunReport> {
    let run_id = Uuid::new_v4();
    let streams = SeedStreams::new(request.seed);
    let mut source: Box<dyn ProfileSource> = match &request.profiles {
        Some(path) => Box::new(ReplayProfileSource::from_json_file(path)?),
        None => Box::new(SyntheticProfileSource::from_rng(
            streams.profile_rng(),
            request.today,
        )),
    };
    let mut rng = streams.habit_rng();
    let population = generate_population(&mut source, &mut rng, &request.plan, request.today)
        .context("Failed to generate customer population")?;

    let written = write_population(&request.output, &population.records)?;
    let details = GenerationDetails::new(&population, Some(request.seed), request.today);
    if let Some(log) = log {
        log.record_generation(run_id, &details)?;
        log.record_write(run_id, &written)?;
    }
    info!(
        run_id = %run_id,
        path = %written.path.display(),
        sha256 = %written.hash,
        "customers written"
    );

    Ok(RunReport {
        run_id,
        seed: request.seed,
        attempts: population.attempts,
        rejected: population.rejected,
        summary: details.summary,
        written,
    })
}
