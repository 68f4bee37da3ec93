//! Host-facing adapters for the trader injector.
//!
//! This crate wires `trader-core` and `trader-content` into a server's
//! startup sequence:
//! - [`lifecycle`] hosts the [`ServerMod`] hooks and the [`AddToTraders`] mod
//! - [`database`] adapts loaded tables to [`trader_core::Database`]
//! - [`ids`] generates host-style item ids
//! - [`config`] and [`logging`] cover environment configuration and log output
pub mod config;
pub mod database;
pub mod error;
pub mod ids;
pub mod lifecycle;
pub mod logging;

pub use config::{LoggingConfig, RuntimeConfig};
pub use database::InMemoryDatabase;
pub use error::{Result, RuntimeError};
pub use ids::ObjectIdGenerator;
pub use lifecycle::{AddToTraders, ServerMod};
pub use logging::{debug_json, init_logging};
