use anyhow::Result;
use shoppersim::orchestration::EventType;
use shoppersim::runner::run_generation;
use shoppersim::storage::{compute_hash, read_population};
use std::fs;

use crate::support::profile_files::write_profile_file;
use crate::{born_aged, IntegrationHarness};

#[test]
fn run_writes_customers_and_logs_events() -> Result<()> {
    let harness = IntegrationHarness::new();
    let log = harness.run_log();
    let request = harness.request(17, "customers.json");

    let report = run_generation(&request, Some(&log))?;
    assert_eq!(report.summary.customers, 100);
    assert_eq!(report.written.path, request.output);

    let bytes = fs::read(&request.output)?;
    assert_eq!(report.written.hash, compute_hash(&bytes));
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    let entries = value.as_array().expect("top-level array");
    assert_eq!(entries.len(), 100);
    for entry in entries {
        let object = entry.as_object().expect("record object");
        assert_eq!(object.len(), 3);
        assert!(object["age"].is_i64());
        assert!(["daily", "weekly", "sporadic"].contains(&object["habit"].as_str().unwrap()));
        assert!(object["budget"].is_number());
    }

    let events = log.load_events()?;
    let kinds: Vec<EventType> = events.iter().map(|e| e.event_type).collect();
    assert_eq!(
        kinds,
        vec![EventType::PopulationGenerated, EventType::PopulationWritten]
    );
    assert_eq!(events[0].details["seed"], 17);
    assert_eq!(events[1].details["sha256"], report.written.hash.as_str());
    Ok(())
}

#[test]
fn reruns_with_same_seed_write_identical_files() -> Result<()> {
    let harness = IntegrationHarness::new();
    let first = run_generation(&harness.request(8, "a.json"), None)?;
    let second = run_generation(&harness.request(8, "b.json"), None)?;
    assert_eq!(first.written.hash, second.written.hash);
    assert_eq!(
        read_population(&first.written.path)?,
        read_population(&second.written.path)?
    );
    Ok(())
}

#[test]
fn replayed_profiles_drive_ages() -> Result<()> {
    let harness = IntegrationHarness::new();
    let birthdates: Vec<_> = [17, 25, 99, 40, 63].into_iter().map(born_aged).collect();
    let profiles = write_profile_file(harness.workspace_path(), "profiles.json", &birthdates);
    let mut request = harness.request(4, "replayed.json");
    request.plan.size = 3;
    request.profiles = Some(profiles);

    let report = run_generation(&request, None)?;
    assert_eq!(report.attempts, 5);
    assert_eq!(report.rejected, 2);
    let records = read_population(&request.output)?.expect("output written");
    let ages: Vec<i64> = records.iter().map(|r| r.age).collect();
    assert_eq!(ages, vec![25, 40, 63]);
    Ok(())
}

#[test]
fn failed_generation_writes_nothing() {
    let harness = IntegrationHarness::new();
    let log = harness.run_log();
    let birthdates: Vec<_> = [30, 31].into_iter().map(born_aged).collect();
    let profiles = write_profile_file(harness.workspace_path(), "short.json", &birthdates);
    let mut request = harness.request(4, "never.json");
    request.profiles = Some(profiles);

    let err = run_generation(&request, Some(&log)).unwrap_err();
    assert!(format!("{err:#}").contains("exhausted"));
    assert!(!request.output.exists());
    assert!(log.load_events().unwrap().is_empty());
}

#[test]
fn attempt_limit_surfaces_as_error() {
    let harness = IntegrationHarness::new();
    let mut request = harness.request(4, "limited.json");
    request.plan.size = 1_000;
    request.plan.max_attempts = Some(10);
    let err = run_generation(&request, None).unwrap_err();
    assert!(format!("{err:#}").contains("gave up after 10 profiles"));
    assert!(!request.output.exists());
}

#[test]
fn failed_write_leaves_log_empty() -> Result<()> {
    let harness = IntegrationHarness::new();
    let log = harness.run_log();
    let blocker = harness.workspace_path().join("blocker");
    fs::write(&blocker, "not a directory")?;
    let mut request = harness.request(6, "unused.json");
    request.output = blocker.join("customers.json");

    let err = run_generation(&request, Some(&log)).unwrap_err();
    assert!(format!("{err:#}").contains("Failed creating output directory"));
    assert!(!request.output.exists());
    assert!(log.load_events()?.is_empty());
    Ok(())
}
