//! Vahti - one-shot HTTP endpoint health sweep
//!
//! Probes a fixed set of HTTP endpoints in parallel, classifies each probe
//! by status code and latency, and writes a timestamped JSON report.

pub mod checker;
pub mod config;
pub mod registry;
pub mod report;
