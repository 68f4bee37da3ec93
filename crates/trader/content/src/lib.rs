//! File loaders for the trader injector.
//!
//! This crate reads everything the injector consumes from disk:
//! - Trader config (JSONC by default; JSON5, TOML and RON also accepted)
//! - Host database tables (JSON directory layout or a single dump file)
//!
//! Loaded content is handed to `trader-core` as plain values; nothing here
//! mutates the database.

pub mod loaders;

pub use loaders::{ConfigFormat, ConfigLoader, ContentFactory, LoadResult, TablesLoader};
