//! Endpoint checker
//!
//! One GET probe per endpoint, all launched concurrently:
//! - `classify` - the status/latency classification policy
//! - `clock` - injectable time source for capture timestamps
//! - `sweep` - single-endpoint probe and the parallel fan-out

pub mod classify;
pub mod clock;
pub mod sweep;

pub use classify::HealthStatus;
pub use clock::{Clock, SystemClock};
pub use sweep::{build_client, check_endpoint, run_sweep, CheckResult};
