//! Logging setup
//!
//! Console output always; a daily rolling file in the data directory when
//! enabled. `RUST_LOG` overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::APP_NAME;
use crate::domain::config::LogConfig;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_data_dir;

/// Build the filter: `RUST_LOG` if set, else the configured level
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber
///
/// Keep the returned guard alive for the lifetime of the process, or the
/// file writer stops flushing.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let console = tracing_subscriber::fmt::layer().with_target(false);

    let (file_layer, guard) = if config.file {
        let dir = get_or_create_data_dir()?;
        let appender = tracing_appender::rolling::daily(dir, format!("{APP_NAME}.log"));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Invalid {
            message: format!("Logging already initialized: {e}"),
        })?;

    Ok(guard)
}
