//! Startup configuration and tracing setup

use anyhow::{anyhow, Context};
use tk_shared::config::{AppConfig, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Load `.env`, read the environment and validate the result
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow!(e))
        .context("Invalid configuration")?;

    Ok(config)
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log level")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| anyhow!(e)).context("Failed to install tracing subscriber")
}
