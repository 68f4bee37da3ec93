//! Errors surfaced by the runtime adapters.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("trader config was not loaded; nothing will be added to traders")]
    ConfigNotLoaded,

    #[error("failed to load trader config: {0:#}")]
    ConfigLoad(anyhow::Error),

    #[error("failed to install log subscriber")]
    LoggingInit(#[from] tracing_subscriber::util::TryInitError),
}
