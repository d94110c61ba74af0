//! Tracing subscriber setup for binaries built on these types

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{SharedError, SharedResult};

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `config.level`. Fails if a global
/// subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> SharedResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|_| SharedError::Config {
            key: "logging.level".to_string(),
            value: config.level.clone(),
        })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| SharedError::Logging(e.to_string()))?;
    tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
    Ok(())
}
