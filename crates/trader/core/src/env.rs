//! Collaborator traits supplied by the host.
//!
//! The inserter never looks services up on its own: the database and id
//! generator are passed in, so tests can substitute in-memory fakes.

use crate::types::{Preset, TraderAssort};

/// Read access to the host catalogs plus write access to trader assortments.
pub trait Database {
    fn has_trader(&self, trader_id: &str) -> bool;

    /// Whether an item template with this id exists in the catalog.
    fn has_template(&self, template_id: &str) -> bool;

    fn preset(&self, preset_id: &str) -> Option<&Preset>;

    /// Mutable assortment of a trader, or `None` if the trader is unknown.
    fn assort_mut(&mut self, trader_id: &str) -> Option<&mut TraderAssort>;
}

/// Source of fresh item ids.
///
/// Implementations must never return the same id twice within a process.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn generate(&mut self) -> String {
        (**self).generate()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn generate(&mut self) -> String {
        (**self).generate()
    }
}
