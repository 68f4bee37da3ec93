//! Trader assortment injection: data model and insertion logic.
//!
//! `trader-core` takes a [`TraderConfig`] (trader id → items/presets to sell)
//! and writes the requested offers into trader assortments through the
//! [`Database`] trait. It performs no I/O of its own; loaders live in
//! `trader-content` and concrete adapters in `trader-runtime`.
//!
//! - [`mapper`] walks the config and reports what was added or skipped
//! - [`insert`] adds single items and presets
//! - [`remap`] gives copied preset trees fresh ids
pub mod config;
pub mod env;
pub mod error;
pub mod insert;
pub mod mapper;
pub mod remap;
pub mod request;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigWarning, TraderConfig, TraderRequests};
pub use env::{Database, IdGenerator};
pub use error::{ErrorSeverity, InsertError};
pub use insert::{InsertedOffer, insert_item, insert_preset};
pub use mapper::{ProcessReport, TraderMapper};
pub use remap::{IdentifierMap, MAX_ID_ATTEMPTS, fresh_id};
pub use request::{Currency, InsertionRequest};
pub use types::{
    BarterOption, BarterScheme, DatabaseTables, ExtraFields, Globals, Item, ItemTemplate, ItemUpd,
    Preset, ROOT_CONTAINER, Templates, Trader, TraderAssort,
};
