use tracing::info;
use vahti::checker::{build_client, run_sweep, SystemClock};
use vahti::config::SweepConfig;
use vahti::report::{write_report, SweepOutcome};

/// Map overall health to the process exit code.
///
/// Exit-code policy lives only here, at the outermost boundary; everything
/// below returns structured results.
fn exit_code(outcome: &SweepOutcome) -> i32 {
    if outcome.all_healthy() {
        0
    } else {
        1
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting vahti health sweep");

    let config = SweepConfig::from_env();
    let client = build_client(config.timeout);
    let clock = SystemClock;

    let outcome = SweepOutcome::new(run_sweep(&client, &config, &clock).await);

    // A failed write surfaces as an error result rather than a panic
    let path = write_report(&config.report_dir, &outcome.results, &clock).await?;
    println!("Report written to {}", path.display());

    let code = exit_code(&outcome);
    if code != 0 {
        eprintln!("Some endpoints are unhealthy or slow.");
        std::process::exit(code);
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
