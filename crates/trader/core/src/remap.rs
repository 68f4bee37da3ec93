//! Re-identification of item trees.
//!
//! Preset item ids are only unique inside their preset. Before a preset can be
//! sold, its tree is copied and every item gets a fresh id. The remap runs in
//! two passes over the copy:
//!
//! 1. **Discovery**: walk the items in order and assign one fresh id to each
//!    own id the first time it is seen.
//! 2. **Rewrite**: replace each item's `id` and `parent_id` through the same
//!    map. The two lookups are independent, which keeps every internal
//!    parent edge pointing at the renamed parent.
//!
//! Parent ids that are not the id of any item in the tree (an external
//! attachment point) are left untouched.

use std::collections::{HashMap, HashSet};

use crate::env::IdGenerator;
use crate::types::Item;

/// How many times a colliding id is regenerated before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Draws ids from `ids` until one is not rejected by `is_taken`.
///
/// Returns `None` after [`MAX_ID_ATTEMPTS`] rejected ids.
pub fn fresh_id<G, F>(ids: &mut G, is_taken: F) -> Option<String>
where
    G: IdGenerator + ?Sized,
    F: Fn(&str) -> bool,
{
    (0..MAX_ID_ATTEMPTS)
        .map(|_| ids.generate())
        .find(|id| !is_taken(id))
}

/// Old id → new id, scoped to a single clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    ids: HashMap<String, String>,
}

impl IdentifierMap {
    /// Discovery pass: one fresh id per distinct own id in `items`.
    ///
    /// New ids avoid everything in `taken` and each other. Returns `None` if
    /// the generator cannot produce an unused id.
    pub fn discover<G>(items: &[Item], ids: &mut G, taken: &HashSet<&str>) -> Option<Self>
    where
        G: IdGenerator + ?Sized,
    {
        let mut map = HashMap::with_capacity(items.len());
        let mut issued: HashSet<String> = HashSet::with_capacity(items.len());

        for item in items {
            if map.contains_key(&item.id) {
                continue;
            }
            let new_id = fresh_id(ids, |id| taken.contains(id) || issued.contains(id))?;
            issued.insert(new_id.clone());
            map.insert(item.id.clone(), new_id);
        }

        Some(Self { ids: map })
    }

    /// Rewrite pass: renames ids and parent ids in place.
    pub fn rewrite(&self, items: &mut [Item]) {
        for item in items {
            if let Some(new_id) = self.ids.get(&item.id) {
                item.id = new_id.clone();
            }
            if let Some(parent_id) = item.parent_id.as_mut() {
                if let Some(new_parent) = self.ids.get(parent_id.as_str()) {
                    *parent_id = new_parent.clone();
                }
            }
        }
    }

    pub fn get(&self, old_id: &str) -> Option<&str> {
        self.ids.get(old_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }
}
