//! Diagnostic logging.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs (delimiter choice, formula results)
//! - `RUST_LOG=csvsheet_core=info` - file loads only
//!
//! Logs go to stderr so the table and results on stdout stay clean.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Defaults to `warn` when RUST_LOG is unset.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .context("failed to install tracing subscriber")
}
