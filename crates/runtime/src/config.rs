//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use trader_content::ContentFactory;

/// Configuration required to run the injector inside a host.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Root directory of the mod (contains `config/`).
    pub mod_dir: PathBuf,
    /// Explicit config file, overriding the lookup under `mod_dir/config/`.
    pub config_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    pub fn new(mod_dir: impl Into<PathBuf>) -> Self {
        Self {
            mod_dir: mod_dir.into(),
            config_path: None,
            logging: LoggingConfig::default(),
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    ///
    /// Environment variables:
    /// - `TRADER_INJECTOR_CONFIG` - Config file path (default: `<mod_dir>/config/config.jsonc`)
    /// - `TRADER_INJECTOR_LOG_LEVEL` - Default log level when `RUST_LOG` is unset (default: info)
    /// - `TRADER_INJECTOR_LOG_DIR` - Also write logs to this directory (default: off)
    /// - `TRADER_INJECTOR_LOG_ANSI` - Colorize console output (default: true)
    pub fn from_env(mod_dir: impl Into<PathBuf>) -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::new(mod_dir);

        config.config_path = env::var("TRADER_INJECTOR_CONFIG").ok().map(PathBuf::from);

        if let Ok(level) = env::var("TRADER_INJECTOR_LOG_LEVEL") {
            config.logging.level = level;
        }
        config.logging.log_dir = env::var("TRADER_INJECTOR_LOG_DIR").ok().map(PathBuf::from);
        if let Some(ansi) = read_env::<bool>("TRADER_INJECTOR_LOG_ANSI") {
            config.logging.ansi = ansi;
        }

        config
    }

    /// Config file to load.
    pub fn config_path(&self) -> PathBuf {
        match &self.config_path {
            Some(path) => path.clone(),
            None => ContentFactory::new(&self.mod_dir).config_path(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (`EnvFilter` syntax).
    pub level: String,
    pub log_dir: Option<PathBuf>,
    pub file_name: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            log_dir: None,
            file_name: "trader-injector.log".to_owned(),
            ansi: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
