//! Trader assortments: sellable items plus their pricing and loyalty indices.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::item::{ExtraFields, Item};

/// One price component of a purchase option (`{ count, _tpl }` on the wire).
///
/// Host barters may carry fractional counts and extra keys (dogtag `level`,
/// `side`); both are kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarterOption {
    pub count: Number,

    /// Template id of the currency (or barter item) being paid.
    #[serde(rename = "_tpl")]
    pub template_id: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl BarterOption {
    pub fn new(count: u64, template_id: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            template_id: template_id.into(),
            extra: ExtraFields::new(),
        }
    }

    /// Count as a whole number, if it is one.
    pub fn whole_count(&self) -> Option<u64> {
        self.count.as_u64()
    }
}

/// Purchase options of one offer. The outer list is the set of alternative
/// options; each inner list is the components paid together.
pub type BarterScheme = Vec<Vec<BarterOption>>;

/// A trader's sellable inventory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderAssort {
    #[serde(
        rename = "nextResupply",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_resupply: Option<u64>,

    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(default)]
    pub barter_scheme: HashMap<String, BarterScheme>,

    #[serde(default)]
    pub loyal_level_items: HashMap<String, u32>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl TraderAssort {
    /// Registers an offer: both index entries keyed by the root item's id.
    ///
    /// The root item itself must already be in `items`.
    pub fn register_offer(&mut self, offer_id: &str, scheme: BarterOption, loyalty_level: u32) {
        self.barter_scheme
            .insert(offer_id.to_owned(), vec![vec![scheme]]);
        self.loyal_level_items
            .insert(offer_id.to_owned(), loyalty_level);
    }

    /// Ids of every item currently in the assortment.
    pub fn item_ids(&self) -> HashSet<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn contains_item(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
