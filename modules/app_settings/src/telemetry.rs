//! Process-wide diagnostics subscriber

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::contract::LoggingError;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this a
/// second time returns [`LoggingError::Init`].
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .try_init(),
    }
    .map_err(|e| LoggingError::Init(e.to_string()))
}
