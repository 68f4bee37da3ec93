//! Host database tables touched by the injector.
//!
//! Only the parts the injector reads or writes are modelled; everything else
//! is kept opaque in `extra`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::assort::TraderAssort;
use super::item::ExtraFields;
use super::preset::Preset;

/// Catalog definition of an item. Only its existence matters here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "_parent", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ItemTemplate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parent: None,
            extra: ExtraFields::new(),
        }
    }
}

/// A trader entry. Traders without an `assort` table (for example ones whose
/// stock is generated at runtime) get an empty one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    #[serde(default)]
    pub assort: TraderAssort,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default)]
    pub items: HashMap<String, ItemTemplate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Globals {
    #[serde(rename = "ItemPresets", default)]
    pub item_presets: HashMap<String, Preset>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The loaded host database, as far as the injector is concerned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTables {
    #[serde(default)]
    pub traders: HashMap<String, Trader>,

    #[serde(default)]
    pub templates: Templates,

    #[serde(default)]
    pub globals: Globals,
}

impl DatabaseTables {
    pub fn add_template(&mut self, template: ItemTemplate) {
        self.templates.items.insert(template.id.clone(), template);
    }

    pub fn add_preset(&mut self, preset: Preset) {
        self.globals.item_presets.insert(preset.id.clone(), preset);
    }

    pub fn add_trader(&mut self, trader_id: impl Into<String>, trader: Trader) {
        self.traders.insert(trader_id.into(), trader);
    }
}
