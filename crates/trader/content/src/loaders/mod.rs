//! Content loaders for reading injector data from files.
//!
//! - [`ConfigLoader`] reads the trader config (JSONC, JSON5, TOML or RON)
//! - [`TablesLoader`] reads a host database dump into [`trader_core::DatabaseTables`]
//! - [`ContentFactory`] resolves the standard file locations of a mod directory

pub mod config;
pub mod factory;
pub mod tables;

pub use config::{ConfigFormat, ConfigLoader};
pub use factory::ContentFactory;
pub use tables::TablesLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a plain JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON {}: {}", path.display(), e))
}
