//! Item presets: predefined multi-part items such as assembled weapons.

use serde::{Deserialize, Serialize};

use super::item::{ExtraFields, Item};

/// A preset as stored in the host's global tables.
///
/// `items` is a tree rooted at `items[0]`. Item ids are only unique inside the
/// preset, so inserting a preset anywhere requires fresh ids (see
/// [`crate::remap::IdentifierMap`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Id of the root item inside `items`.
    #[serde(rename = "_parent", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(rename = "_items", default)]
    pub items: Vec<Item>,

    #[serde(
        rename = "_encyclopedia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub encyclopedia: Option<String>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Preset {
    pub fn new(id: impl Into<String>, items: Vec<Item>) -> Self {
        let parent = items.first().map(|root| root.id.clone());
        Self {
            id: id.into(),
            name: None,
            parent,
            items,
            encyclopedia: None,
            extra: ExtraFields::new(),
        }
    }

    pub fn root(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
