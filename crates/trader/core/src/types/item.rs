//! Item instances as they appear in trader assortments and presets.
//!
//! Field names follow the host's JSON tables (`_id`, `_tpl`, `parentId`, ...).
//! Fields this crate does not interpret are kept in `extra` so a table can be
//! read, mutated and written back without losing host data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parent and slot id shared by every sellable root item in an assortment.
pub const ROOT_CONTAINER: &str = "hideout";

/// Unconsumed JSON fields carried through a round trip.
pub type ExtraFields = BTreeMap<String, Value>;

/// A concrete item instance.
///
/// Items form trees through `parent_id`: a weapon preset is a root item plus
/// its attachments, each pointing at the item it is mounted on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,

    /// Catalog definition this instance is made from.
    #[serde(rename = "_tpl")]
    pub template_id: String,

    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(rename = "slotId", default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upd: Option<ItemUpd>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Item {
    /// Builds a sellable root item placed in the trader's root container.
    pub fn sellable(id: impl Into<String>, template_id: impl Into<String>, stack_count: u64) -> Self {
        Self {
            id: id.into(),
            template_id: template_id.into(),
            parent_id: Some(ROOT_CONTAINER.to_owned()),
            slot_id: Some(ROOT_CONTAINER.to_owned()),
            upd: Some(ItemUpd::stock(stack_count)),
            extra: ExtraFields::new(),
        }
    }

    /// Returns true if this item sits directly in the trader's root container.
    pub fn is_root_offer(&self) -> bool {
        self.parent_id.as_deref() == Some(ROOT_CONTAINER)
    }

    pub fn stack_count(&self) -> Option<u64> {
        self.upd.as_ref().and_then(|upd| upd.stack_objects_count)
    }
}

/// Mutable per-instance properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpd {
    #[serde(
        rename = "StackObjectsCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stack_objects_count: Option<u64>,

    #[serde(
        rename = "UnlimitedCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unlimited_count: Option<bool>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ItemUpd {
    /// Limited stock of `count` units.
    pub fn stock(count: u64) -> Self {
        Self {
            stack_objects_count: Some(count),
            unlimited_count: Some(false),
            extra: ExtraFields::new(),
        }
    }
}
