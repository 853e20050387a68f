use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber. Output goes to stderr so `--print-config`
/// keeps stdout clean.
///
/// `RUST_LOG` wins over the configured level when it is set.
///
/// # Errors
/// Fails on an unparsable level directive or if a subscriber is already set.
pub fn init(cfg: &LoggingConfig) -> Result<()> {
    let filter = build_filter(cfg)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    }
    .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&cfg.level)
        .with_context(|| format!("invalid logging.level '{}'", cfg.level))
}
