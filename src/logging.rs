//! Diagnostic logging for the command-line tools.

use anyhow::{anyhow, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
