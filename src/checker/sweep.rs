//! Single-endpoint probe and the parallel sweep
//!
//! Every probe produces a `CheckResult`, including transport failures: one
//! endpoint going down never aborts the run or affects the other probes.
//! Each endpoint is checked exactly once per run, no retries.

use crate::checker::classify::{classify, HealthStatus};
use crate::checker::clock::Clock;
use crate::config::SweepConfig;
use crate::registry::Endpoint;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of one endpoint probe, immutable once produced.
///
/// Field names follow the report artifact format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Name of the source endpoint
    pub endpoint: String,
    /// Echoed target address
    pub url: String,
    /// HTTP status code, absent if the request never completed
    #[serde(rename = "httpCode")]
    pub http_code: Option<u16>,
    /// Classification outcome
    pub status: HealthStatus,
    /// Milliseconds from request start to completion or failure
    pub latency: u64,
    /// Failure description, absent on success
    pub error: Option<String>,
    /// Capture time
    pub timestamp: DateTime<Utc>,
}

/// Build the shared HTTP client with the per-request timeout.
///
/// The timeout is the only cancellation mechanism; there is no overall
/// run deadline.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Probe one endpoint with a single GET and classify the outcome.
///
/// Never returns an error: transport failures (connection refused, DNS,
/// timeout) are folded into the result with `status = error`. The failure's
/// associated response status populates `httpCode` when one exists.
pub async fn check_endpoint(
    client: &Client,
    endpoint: &Endpoint,
    slow_threshold_ms: u64,
    clock: &dyn Clock,
) -> CheckResult {
    let timestamp = clock.now();
    let start = Instant::now();

    let mut request = client.get(&endpoint.url);
    for (name, value) in &endpoint.headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let outcome = request.send().await;
    let latency = start.elapsed().as_millis() as u64;

    let (http_code, status, error) = match outcome {
        Ok(response) => {
            let code = response.status().as_u16();
            let status = classify(code, latency, slow_threshold_ms);
            let error = if status == HealthStatus::Error {
                Some(format!("HTTP {}", response.status()))
            } else {
                None
            };
            (Some(code), status, error)
        }
        Err(e) => (
            e.status().map(|s| s.as_u16()),
            HealthStatus::Error,
            Some(e.to_string()),
        ),
    };

    match status {
        HealthStatus::Healthy => {
            debug!(
                endpoint = %endpoint.name,
                latency_ms = latency,
                "Check passed"
            );
        }
        HealthStatus::Slow => {
            warn!(
                endpoint = %endpoint.name,
                latency_ms = latency,
                "Check slow"
            );
        }
        HealthStatus::Error => {
            warn!(
                endpoint = %endpoint.name,
                latency_ms = latency,
                error = ?error,
                "Check failed"
            );
        }
    }

    CheckResult {
        endpoint: endpoint.name.clone(),
        url: endpoint.url.clone(),
        http_code,
        status,
        latency,
        error,
        timestamp,
    }
}

/// Probe all configured endpoints concurrently.
///
/// Single fan-out/fan-in barrier: all probes start together and the sweep
/// returns once every probe has finished, with results in registry order.
pub async fn run_sweep(
    client: &Client,
    config: &SweepConfig,
    clock: &dyn Clock,
) -> Vec<CheckResult> {
    info!(
        count = config.endpoints.len(),
        "Starting endpoint sweep"
    );

    let probes = config
        .endpoints
        .iter()
        .map(|endpoint| check_endpoint(client, endpoint, config.slow_threshold_ms, clock));
    let results = join_all(probes).await;

    let healthy = results
        .iter()
        .filter(|r| r.status == HealthStatus::Healthy)
        .count();
    let slow = results
        .iter()
        .filter(|r| r.status == HealthStatus::Slow)
        .count();
    let errors = results
        .iter()
        .filter(|r| r.status == HealthStatus::Error)
        .count();

    info!(healthy, slow, errors, "Sweep completed");

    results
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Tests can use unwrap/expect for brevity
#[path = "sweep_test.rs"]
mod tests;
