//! Tracing subscriber setup shared by the binaries.

use crate::config::LogLevel;
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Application-specific environment variable for log filtering (overrides config).
pub const LOG_ENV_VAR: &str = "PMCTL_LOG";

/// Build the filter for `level`, unless `env_override` carries a directive string.
pub fn build_filter(level: LogLevel, env_override: Option<&str>) -> Result<EnvFilter> {
    match env_override.filter(|spec| !spec.trim().is_empty()) {
        Some(spec) => EnvFilter::try_new(spec)
            .with_context(|| format!("Invalid {LOG_ENV_VAR} directive: {spec}")),
        None => EnvFilter::try_new(level.as_directive()).context("Invalid log level directive"),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let env_override = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(level, env_override.as_deref())?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")
}
