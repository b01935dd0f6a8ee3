//! Append-only run history stored as JSON lines.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::population::{Population, PopulationSummary};
use crate::storage::PopulationWriteOutcome;
use crate::workspace::WorkspacePaths;

/// Type of events that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PopulationGenerated,
    PopulationWritten,
    ConfigSaved,
}

/// General-purpose run event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub event_id: Uuid,
    pub run_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl RunEvent {
    pub fn new(run_id: Uuid, event_type: EventType, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            run_id,
            event_type,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Structured payload logged once a population has been sampled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationDetails {
    pub seed: Option<u64>,
    pub today: NaiveDate,
    pub attempts: u64,
    pub rejected: u64,
    pub summary: PopulationSummary,
}

impl GenerationDetails {
    pub fn new(population: &Population, seed: Option<u64>, today: NaiveDate) -> Self {
        Self {
            seed,
            today,
            attempts: population.attempts,
            rejected: population.rejected,
            summary: PopulationSummary::from_records(&population.records),
        }
    }
}

/// Wraps the event log path.
#[derive(Debug, Clone)]
pub struct RunLog {
    events_path: PathBuf,
}

impl RunLog {
    pub fn at<P: Into<PathBuf>>(events_path: P) -> Self {
        Self {
            events_path: events_path.into(),
        }
    }

    pub fn for_workspace(paths: &WorkspacePaths) -> Self {
        Self::at(paths.events_file())
    }

    pub fn path(&self) -> &Path {
        &self.events_path
    }

    pub fn append_event(&self, event: &RunEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Failed opening event log {:?}", self.events_path))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<RunEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: RunEvent = serde_json::from_str(line)
                .with_context(|| format!("Malformed event in {:?}", self.events_path))?;
            events.push(event);
        }
        Ok(events)
    }

    pub fn record_generation(&self, run_id: Uuid, details: &GenerationDetails) -> Result<Uuid> {
        let event = RunEvent::new(
            run_id,
            EventType::PopulationGenerated,
            serde_json::to_value(details)?,
        );
        self.append_event(&event)?;
        Ok(event.event_id)
    }

    pub fn record_write(&self, run_id: Uuid, outcome: &PopulationWriteOutcome) -> Result<Uuid> {
        let event = RunEvent::new(
            run_id,
            EventType::PopulationWritten,
            serde_json::json!({
                "path": outcome.path,
                "records": outcome.records,
                "sha256": outcome.hash,
            }),
        );
        self.append_event(&event)?;
        Ok(event.event_id)
    }
}
