//! Classification policy for completed probes
//!
//! Deliberately coarse: any completed non-200 response is `Error`, without
//! distinguishing redirects, client errors, or server errors.

use serde::{Deserialize, Serialize};

/// Outcome of a single endpoint check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// HTTP 200 within the latency threshold
    Healthy,
    /// HTTP 200, but slower than the threshold
    Slow,
    /// Any other completed status, or a transport failure
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Slow => "slow",
            HealthStatus::Error => "error",
        }
    }
}

/// Classify a completed response by status code and measured latency.
///
/// Transport failures never reach this function; they are always `Error`.
pub fn classify(http_code: u16, latency_ms: u64, slow_threshold_ms: u64) -> HealthStatus {
    if http_code != 200 {
        return HealthStatus::Error;
    }
    if latency_ms < slow_threshold_ms {
        HealthStatus::Healthy
    } else {
        HealthStatus::Slow
    }
}
