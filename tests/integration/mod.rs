use chrono::{Duration, NaiveDate};
use shoppersim::orchestration::RunLog;
use shoppersim::population::{PopulationPlan, DAYS_PER_YEAR};
use shoppersim::runner::RunRequest;
use shoppersim::workspace::WorkspacePaths;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn run_log(&self) -> RunLog {
        RunLog::for_workspace(&WorkspacePaths::at(self.workspace.path()))
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.workspace.path().join("out").join(name)
    }

    pub fn request(&self, seed: u64, output: &str) -> RunRequest {
        RunRequest {
            plan: PopulationPlan::default(),
            seed,
            today: reference_day(),
            output: self.output_path(output),
            profiles: None,
        }
    }
}

pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

/// A birthdate whose derived age on [`reference_day`] is exactly `age`.
pub fn born_aged(age: i64) -> NaiveDate {
    reference_day() - Duration::days((age as f64 * DAYS_PER_YEAR).ceil() as i64)
}

mod age_filter;
mod reproducibility;
mod run_pipeline;
mod workspace_env;
pub mod support;
