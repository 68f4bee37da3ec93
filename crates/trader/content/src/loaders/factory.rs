//! Content factory resolving the standard files of a mod directory.

use std::path::{Path, PathBuf};

use trader_core::{DatabaseTables, TraderConfig};

use crate::loaders::{ConfigLoader, LoadResult, TablesLoader};

/// Content factory that loads injector content from a mod directory.
///
/// # Directory Structure
///
/// ```text
/// mod_dir/
/// └── config/
///     └── config.jsonc   (or config.json5 / config.json / config.toml / config.ron)
/// ```
pub struct ContentFactory {
    mod_dir: PathBuf,
}

impl ContentFactory {
    /// Config file names tried in order by [`ContentFactory::config_path`].
    pub const CONFIG_CANDIDATES: [&'static str; 5] = [
        "config.jsonc",
        "config.json5",
        "config.json",
        "config.toml",
        "config.ron",
    ];

    /// Creates a new content factory pointing to a mod directory.
    pub fn new(mod_dir: impl Into<PathBuf>) -> Self {
        Self {
            mod_dir: mod_dir.into(),
        }
    }

    /// Path of the config file: the first existing candidate under
    /// `config/`, or `config/config.jsonc` when none exists.
    pub fn config_path(&self) -> PathBuf {
        let config_dir = self.mod_dir.join("config");
        Self::CONFIG_CANDIDATES
            .iter()
            .map(|name| config_dir.join(name))
            .find(|path| path.is_file())
            .unwrap_or_else(|| config_dir.join(Self::CONFIG_CANDIDATES[0]))
    }

    /// Load the trader config from the mod directory.
    pub fn load_config(&self) -> LoadResult<TraderConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load host tables from a database directory.
    pub fn load_tables(&self, database_dir: &Path) -> LoadResult<DatabaseTables> {
        TablesLoader::load(database_dir)
    }

    /// Returns the mod directory path.
    pub fn mod_dir(&self) -> &Path {
        &self.mod_dir
    }
}
