//! Sweep configuration
//!
//! An explicit configuration structure assembled once at startup and passed
//! into the checker, instead of global constants. Credentials come from the
//! environment, never from the binary.

use crate::registry::{builtin_endpoints, Endpoint};
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL for the built-in endpoint set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Latency above which an HTTP 200 is classified as slow (milliseconds)
pub const SLOW_THRESHOLD_MS: u64 = 500;

/// Default directory for report files, relative to the working directory
pub const DEFAULT_REPORT_DIR: &str = "monitoring";

/// Configuration for a single sweep run
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Endpoints to probe, in report order
    pub endpoints: Vec<Endpoint>,
    /// Per-request timeout enforced by the HTTP client
    pub timeout: Duration,
    /// Latency threshold separating healthy from slow (milliseconds)
    pub slow_threshold_ms: u64,
    /// Directory the report file is written into
    pub report_dir: PathBuf,
}

impl SweepConfig {
    /// Build the configuration from the environment.
    ///
    /// - `VAHTI_API_KEY`: credential for the keyed endpoints (optional)
    /// - `VAHTI_REPORT_DIR`: report directory override (optional)
    pub fn from_env() -> Self {
        let api_key = std::env::var("VAHTI_API_KEY").ok();
        let report_dir = std::env::var("VAHTI_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_DIR));

        SweepConfig {
            endpoints: builtin_endpoints(DEFAULT_BASE_URL, api_key.as_deref()),
            timeout: REQUEST_TIMEOUT,
            slow_threshold_ms: SLOW_THRESHOLD_MS,
            report_dir,
        }
    }

    /// Configuration with an explicit endpoint set (used by tests)
    pub fn with_endpoints(endpoints: Vec<Endpoint>) -> Self {
        SweepConfig {
            endpoints,
            timeout: REQUEST_TIMEOUT,
            slow_threshold_ms: SLOW_THRESHOLD_MS,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
        }
    }
}
