//! Tracing initialization (fmt subscriber + env filter).
//!
//! Log verbosity follows the standard `RUST_LOG` conventions:
//!
//! ```bash
//! RUST_LOG=mesctl=debug mesctl work-orders list
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber with console output.
///
/// Defaults to `info` when `RUST_LOG` is unset. Logs go to stderr so that
/// command output on stdout stays clean for piping.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
