//! Host lifecycle integration.
//!
//! The host calls [`ServerMod::pre_load`] before its database is loaded and
//! [`ServerMod::post_db_load`] once afterwards. [`AddToTraders`] reads the
//! trader config in the first phase and applies it in the second.
use tracing::{info, warn};
use trader_content::ConfigLoader;
use trader_core::{Database, IdGenerator, ProcessReport, TraderConfig, TraderMapper};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::ids::ObjectIdGenerator;
use crate::logging::debug_json;

/// Hooks a host server calls on its mods during startup.
pub trait ServerMod {
    /// Runs before the database is loaded.
    fn pre_load(&mut self) -> Result<()>;

    /// Runs once the database is loaded. Must not fail host startup.
    fn post_db_load(&mut self, db: &mut dyn Database);
}

/// Adds configured items and presets to trader assortments.
pub struct AddToTraders {
    config: RuntimeConfig,
    mapper: TraderMapper<Box<dyn IdGenerator>>,
    trader_config: Option<TraderConfig>,
    last_report: Option<ProcessReport>,
}

impl AddToTraders {
    pub fn new(config: RuntimeConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            config,
            mapper: TraderMapper::new(ids),
            trader_config: None,
            last_report: None,
        }
    }

    /// Uses [`ObjectIdGenerator`] for new ids.
    pub fn with_object_ids(config: RuntimeConfig) -> Self {
        Self::new(config, Box::new(ObjectIdGenerator::new()))
    }

    /// Supplies the trader config directly instead of reading it in `pre_load`.
    pub fn with_trader_config(mut self, trader_config: TraderConfig) -> Self {
        self.trader_config = Some(trader_config);
        self
    }

    pub fn trader_config(&self) -> Option<&TraderConfig> {
        self.trader_config.as_ref()
    }

    /// Report of the most recent `post_db_load`.
    pub fn last_report(&self) -> Option<&ProcessReport> {
        self.last_report.as_ref()
    }
}

impl ServerMod for AddToTraders {
    fn pre_load(&mut self) -> Result<()> {
        if self.trader_config.is_some() {
            return Ok(());
        }

        let path = self.config.config_path();
        let trader_config = match ConfigLoader::load(&path) {
            Ok(trader_config) => trader_config,
            Err(err) => {
                let err = RuntimeError::ConfigLoad(err);
                warn!("{err}");
                return Err(err);
            }
        };

        for warning in trader_config.validate() {
            warn!("{warning}");
        }
        info!(
            path = %path.display(),
            traders = trader_config.len(),
            entries = trader_config.request_count(),
            "trader config loaded"
        );
        debug_json("trader config", &trader_config);

        self.trader_config = Some(trader_config);
        Ok(())
    }

    fn post_db_load(&mut self, db: &mut dyn Database) {
        let Some(trader_config) = &self.trader_config else {
            warn!("{}", RuntimeError::ConfigNotLoaded);
            return;
        };

        let report = self.mapper.process(trader_config, db);
        self.last_report = Some(report);
    }
}
