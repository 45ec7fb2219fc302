//! Report persistence and overall health
//!
//! Writes one run's results as a pretty-printed JSON array to a timestamped
//! file inside the report directory. The write path returns errors instead
//! of panicking, with distinct variants per failure mode.

use crate::checker::{CheckResult, Clock, HealthStatus};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Structured result of one sweep run.
///
/// Exit-code mapping from this is performed only at the binary boundary.
#[derive(Debug)]
pub struct SweepOutcome {
    /// Per-endpoint results, in registry order
    pub results: Vec<CheckResult>,
}

impl SweepOutcome {
    pub fn new(results: Vec<CheckResult>) -> Self {
        SweepOutcome { results }
    }

    /// True only if every result is `healthy`; slow counts as unhealthy
    pub fn all_healthy(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status == HealthStatus::Healthy)
    }
}

/// Write the results to `<dir>/report-<epoch-ms>.json`.
///
/// Creates the directory, including parents, if absent. Returns the path
/// of the written file.
pub async fn write_report(
    dir: &Path,
    results: &[CheckResult],
    clock: &dyn Clock,
) -> Result<PathBuf, ReportError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ReportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(format!("report-{}.json", clock.epoch_ms()));
    let body = serde_json::to_vec_pretty(results)?;

    tokio::fs::write(&path, body)
        .await
        .map_err(|source| ReportError::WriteFailure {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), "Report written");

    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Tests can use unwrap/expect for brevity
#[path = "report_test.rs"]
mod tests;
