//! [`trader_core::Database`] backed by in-memory tables.
use trader_core::{Database, DatabaseTables, Preset, TraderAssort};

/// Database implementation over loaded [`DatabaseTables`].
///
/// The host hands its tables over before injection and takes them back with
/// [`InMemoryDatabase::into_tables`] afterwards.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: DatabaseTables,
}

impl InMemoryDatabase {
    pub fn new(tables: DatabaseTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &DatabaseTables {
        &self.tables
    }

    pub fn into_tables(self) -> DatabaseTables {
        self.tables
    }

    /// Assortment of a trader, if the trader exists.
    pub fn assort(&self, trader_id: &str) -> Option<&TraderAssort> {
        self.tables.traders.get(trader_id).map(|trader| &trader.assort)
    }
}

impl From<DatabaseTables> for InMemoryDatabase {
    fn from(tables: DatabaseTables) -> Self {
        Self::new(tables)
    }
}

impl Database for InMemoryDatabase {
    fn has_trader(&self, trader_id: &str) -> bool {
        self.tables.traders.contains_key(trader_id)
    }

    fn has_template(&self, template_id: &str) -> bool {
        self.tables.templates.items.contains_key(template_id)
    }

    fn preset(&self, preset_id: &str) -> Option<&Preset> {
        self.tables.globals.item_presets.get(preset_id)
    }

    fn assort_mut(&mut self, trader_id: &str) -> Option<&mut TraderAssort> {
        self.tables
            .traders
            .get_mut(trader_id)
            .map(|trader| &mut trader.assort)
    }
}
