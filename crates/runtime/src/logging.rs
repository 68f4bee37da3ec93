//! Log subscriber setup and debug helpers.
use serde::Serialize;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;
use crate::error::Result;

/// Installs the global subscriber.
///
/// Console output goes to stderr (colorized unless disabled). When
/// `log_dir` is set, a plain-text copy is written there as well; keep the
/// returned guard alive for as long as file logging should flush.
///
/// Hosts that install their own subscriber should skip this: injector events
/// are plain `tracing` events and reach whatever subscriber is active.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

/// Logs `value` as pretty-printed JSON at debug level.
pub fn debug_json<T: Serialize + ?Sized>(label: &str, value: &T) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(json) => debug!("[{label}]\n{json}"),
        Err(err) => debug!("[{label}] <unserializable: {err}>"),
    }
}
