use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `MEDIASCAN_LOG=mediascan_core=trace`.
pub const LOG_ENV: &str = "MEDIASCAN_LOG";

/// Install the stderr log subscriber. Stdout is reserved for the report.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
