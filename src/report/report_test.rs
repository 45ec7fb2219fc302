//! Tests for report persistence and overall health

use super::*;
use crate::checker::clock::MockClock;
use chrono::{TimeZone, Utc};
use std::path::PathBuf;

fn fixed_clock() -> MockClock {
    MockClock::new(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
}

/// Unique temp directory so parallel tests do not collide
fn temp_report_dir() -> PathBuf {
    std::env::temp_dir().join(format!(
        "vahti-test-{}-{}",
        std::process::id(),
        uuid::Uuid::new_v4()
    ))
}

fn sample_result(endpoint: &str, status: HealthStatus) -> CheckResult {
    CheckResult {
        endpoint: endpoint.to_string(),
        url: format!("http://localhost:8080/{}", endpoint),
        http_code: Some(200),
        status,
        latency: 42,
        error: None,
        timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_write_report_creates_dir_and_file() {
    let dir = temp_report_dir().join("nested").join("monitoring");
    let clock = fixed_clock();
    let results = vec![
        sample_result("export", HealthStatus::Healthy),
        sample_result("health", HealthStatus::Slow),
    ];

    let path = write_report(&dir, &results, &clock).await.unwrap();

    // File name carries the capture time as epoch milliseconds
    let expected_name = format!("report-{}.json", clock.epoch_ms());
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected_name);
    assert_eq!(path.parent().unwrap(), dir);

    let body = std::fs::read_to_string(&path).unwrap();
    // Pretty-printed array
    assert!(body.starts_with("[\n"));

    let parsed: Vec<CheckResult> = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].endpoint, "export");
    assert_eq!(parsed[0].url, "http://localhost:8080/export");
    assert_eq!(parsed[1].endpoint, "health");

    std::fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).unwrap();
}

#[tokio::test]
async fn test_write_report_empty_results_is_valid_json() {
    let dir = temp_report_dir();
    let clock = fixed_clock();

    let path = write_report(&dir, &[], &clock).await.unwrap();

    let parsed: Vec<CheckResult> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(parsed.is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_write_report_dir_creation_failure() {
    // A regular file where the directory should go makes create_dir_all fail
    let base = temp_report_dir();
    std::fs::create_dir_all(&base).unwrap();
    let blocker = base.join("monitoring");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let clock = fixed_clock();
    let result = write_report(&blocker, &[], &clock).await;

    assert!(matches!(result, Err(ReportError::CreateDir { .. })));

    std::fs::remove_dir_all(&base).unwrap();
}

#[test]
fn test_all_healthy_requires_every_result_healthy() {
    let outcome = SweepOutcome::new(vec![
        sample_result("a", HealthStatus::Healthy),
        sample_result("b", HealthStatus::Healthy),
    ]);
    assert!(outcome.all_healthy());

    // Slow is not healthy
    let outcome = SweepOutcome::new(vec![
        sample_result("a", HealthStatus::Healthy),
        sample_result("b", HealthStatus::Slow),
    ]);
    assert!(!outcome.all_healthy());

    let outcome = SweepOutcome::new(vec![
        sample_result("a", HealthStatus::Error),
    ]);
    assert!(!outcome.all_healthy());
}

#[test]
fn test_all_healthy_vacuous_for_empty_run() {
    assert!(SweepOutcome::new(Vec::new()).all_healthy());
}
