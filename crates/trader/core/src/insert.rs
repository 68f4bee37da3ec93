//! Adding single items and presets to a trader's assortment.
//!
//! Both paths leave the assortment untouched when they fail.

use tracing::debug;

use crate::env::{Database, IdGenerator};
use crate::error::InsertError;
use crate::remap::{IdentifierMap, MAX_ID_ATTEMPTS};
use crate::request::InsertionRequest;
use crate::types::{BarterOption, Item};

/// An offer that was added to a trader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertedOffer {
    pub trader_id: String,
    /// Id of the sellable root item; also the barter scheme / loyalty key.
    pub offer_id: String,
    pub template_id: String,
    /// Number of items appended to the assortment (root included).
    pub item_count: usize,
}

/// Adds one sellable item keyed by `trade_id`.
pub fn insert_item<D>(
    db: &mut D,
    trader_id: &str,
    request: &InsertionRequest,
    trade_id: String,
    scheme: BarterOption,
) -> Result<InsertedOffer, InsertError>
where
    D: Database + ?Sized,
{
    if !db.has_template(&request.target_id) {
        return Err(InsertError::UnknownItemTemplate(request.target_id.clone()));
    }
    let assort = db
        .assort_mut(trader_id)
        .ok_or_else(|| InsertError::UnknownTrader(trader_id.to_owned()))?;

    assort.items.push(Item::sellable(
        trade_id.clone(),
        request.target_id.clone(),
        request.stack_count,
    ));
    assort.register_offer(&trade_id, scheme, request.loyalty_level);

    debug!(trader = trader_id, offer = %trade_id, template = %request.target_id, "added item");

    Ok(InsertedOffer {
        trader_id: trader_id.to_owned(),
        offer_id: trade_id,
        template_id: request.target_id.clone(),
        item_count: 1,
    })
}

/// Adds a copy of a preset with fresh ids, keyed by the copy's root id.
///
/// The preset in the catalog is not modified, so the same preset can be
/// inserted any number of times.
pub fn insert_preset<D, G>(
    db: &mut D,
    trader_id: &str,
    request: &InsertionRequest,
    scheme: BarterOption,
    ids: &mut G,
) -> Result<InsertedOffer, InsertError>
where
    D: Database + ?Sized,
    G: IdGenerator + ?Sized,
{
    let preset_id = request.target_id.as_str();
    let preset = db
        .preset(preset_id)
        .ok_or_else(|| InsertError::UnknownPreset(preset_id.to_owned()))?;
    if preset.is_empty() {
        return Err(InsertError::EmptyPreset(preset_id.to_owned()));
    }
    let mut items = preset.items.clone();

    let assort = db
        .assort_mut(trader_id)
        .ok_or_else(|| InsertError::UnknownTrader(trader_id.to_owned()))?;

    let map = IdentifierMap::discover(&items, ids, &assort.item_ids()).ok_or_else(|| {
        InsertError::IdCollision {
            target_id: preset_id.to_owned(),
            attempts: MAX_ID_ATTEMPTS,
        }
    })?;
    map.rewrite(&mut items);

    let mut items = items.into_iter();
    let Some(root) = items.next() else {
        return Err(InsertError::EmptyPreset(preset_id.to_owned()));
    };
    let offer_id = root.id;
    let template_id = root.template_id;

    // The root is replaced by a sellable wrapper; attachments keep their slots.
    assort.items.push(Item::sellable(
        offer_id.clone(),
        template_id.clone(),
        request.stack_count,
    ));
    let before = assort.items.len();
    assort.items.extend(items);
    let item_count = assort.items.len() - before + 1;

    assort.register_offer(&offer_id, scheme, request.loyalty_level);

    debug!(
        trader = trader_id,
        preset = preset_id,
        offer = %offer_id,
        items = item_count,
        "added preset"
    );

    Ok(InsertedOffer {
        trader_id: trader_id.to_owned(),
        offer_id,
        template_id,
        item_count,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::request::Currency;
    use crate::test_support::{FakeDatabase, SequentialIds, child, root};
    use crate::types::{Preset, ROOT_CONTAINER, TraderAssort};

    const TRADER: &str = "therapist";

    fn rifle() -> Preset {
        Preset::new(
            "preset_rifle",
            vec![
                root("r", "tpl_rifle"),
                child("m", "tpl_mag", "r", "mod_magazine"),
                child("s", "tpl_stock", "r", "mod_stock"),
            ],
        )
    }

    fn usd(price: u64) -> BarterOption {
        BarterOption::new(price, Currency::Usd.template_id())
    }

    #[test]
    fn item_is_added_with_pricing_and_loyalty() {
        let mut db = FakeDatabase::new().with_trader(TRADER).with_template("abc123");
        let request = InsertionRequest::item("abc123", 500, Currency::Usd)
            .with_loyalty_level(1)
            .with_stack_count(3);

        let offer = insert_item(&mut db, TRADER, &request, "trade1".into(), usd(500)).unwrap();

        let assort = db.assort(TRADER);
        assert_eq!(offer.offer_id, "trade1");
        assert_eq!(assort.items.len(), 1);
        let item = &assort.items[0];
        assert_eq!(item.id, "trade1");
        assert_eq!(item.template_id, "abc123");
        assert_eq!(item.parent_id.as_deref(), Some(ROOT_CONTAINER));
        assert_eq!(item.slot_id.as_deref(), Some(ROOT_CONTAINER));
        assert_eq!(item.stack_count(), Some(3));
        assert_eq!(item.upd.as_ref().unwrap().unlimited_count, Some(false));
        assert_eq!(assort.barter_scheme["trade1"], vec![vec![usd(500)]]);
        assert_eq!(assort.loyal_level_items["trade1"], 1);
    }

    #[test]
    fn unknown_template_leaves_assort_untouched() {
        let mut db = FakeDatabase::new().with_trader(TRADER);
        let request = InsertionRequest::item("missing", 1, Currency::Roubles);

        let err = insert_item(&mut db, TRADER, &request, "t".into(), usd(1)).unwrap_err();

        assert_eq!(err, InsertError::UnknownItemTemplate("missing".into()));
        assert_eq!(db.assort(TRADER), &TraderAssort::default());
    }

    #[test]
    fn preset_is_cloned_with_new_ids() {
        let mut db = FakeDatabase::new().with_trader(TRADER).with_preset(rifle());
        let mut ids = SequentialIds::new("new");
        let request = InsertionRequest::preset("preset_rifle", 40_000, Currency::Roubles)
            .with_loyalty_level(2)
            .with_stack_count(5);

        let offer = insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap();

        let assort = db.assort(TRADER);
        assert_eq!(offer.item_count, 3);
        assert_eq!(assort.items.len(), 3);

        let root = &assort.items[0];
        assert_eq!(root.id, offer.offer_id);
        assert_eq!(root.template_id, "tpl_rifle");
        assert_eq!(root.parent_id.as_deref(), Some(ROOT_CONTAINER));
        assert_eq!(root.stack_count(), Some(5));

        for item in &assort.items[1..] {
            assert_eq!(item.parent_id.as_deref(), Some(root.id.as_str()));
            assert!(!["r", "m", "s"].contains(&item.id.as_str()));
        }
        assert_eq!(assort.items[1].slot_id.as_deref(), Some("mod_magazine"));
        assert_eq!(assort.barter_scheme.len(), 1);
        assert_eq!(assort.loyal_level_items[&offer.offer_id], 2);
    }

    #[test]
    fn preset_catalog_is_not_modified() {
        let mut db = FakeDatabase::new().with_trader(TRADER).with_preset(rifle());
        let mut ids = SequentialIds::new("new");
        let request = InsertionRequest::preset("preset_rifle", 1, Currency::Roubles);

        insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap();

        assert_eq!(db.tables.globals.item_presets["preset_rifle"], rifle());
    }

    #[test]
    fn inserting_a_preset_twice_yields_disjoint_trees() {
        let mut db = FakeDatabase::new().with_trader(TRADER).with_preset(rifle());
        let mut ids = SequentialIds::new("new");
        let request = InsertionRequest::preset("preset_rifle", 1, Currency::Roubles);

        let first = insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap();
        let second = insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap();

        let assort = db.assort(TRADER);
        let (a, b) = assort.items.split_at(first.item_count);
        let ids_a: HashSet<_> = a.iter().map(|i| i.id.as_str()).collect();
        let ids_b: HashSet<_> = b.iter().map(|i| i.id.as_str()).collect();
        assert!(ids_a.is_disjoint(&ids_b));
        assert_eq!(ids_a.len(), 3);
        assert_eq!(ids_b.len(), 3);

        // Same shape: template and slot per position, parents point at own root.
        for (x, y) in a.iter().zip(b) {
            assert_eq!(x.template_id, y.template_id);
            assert_eq!(x.slot_id, y.slot_id);
        }
        assert!(b[1..]
            .iter()
            .all(|i| i.parent_id.as_deref() == Some(second.offer_id.as_str())));
        assert_eq!(assort.barter_scheme.len(), 2);
    }

    #[test]
    fn new_ids_avoid_existing_assort_ids() {
        let mut db = FakeDatabase::new().with_trader(TRADER).with_preset(rifle());
        db.tables
            .traders
            .get_mut(TRADER)
            .unwrap()
            .assort
            .items
            .push(Item::sellable("new1", "tpl_existing", 1));
        let mut ids = SequentialIds::new("new");
        let request = InsertionRequest::preset("preset_rifle", 1, Currency::Roubles);

        insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap();

        let assort = db.assort(TRADER);
        let unique: HashSet<_> = assort.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), assort.items.len());
    }

    #[test]
    fn unknown_preset_is_reported() {
        let mut db = FakeDatabase::new().with_trader(TRADER);
        let mut ids = SequentialIds::new("new");
        let request = InsertionRequest::preset("nope", 1, Currency::Roubles);

        let err = insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap_err();

        assert_eq!(err, InsertError::UnknownPreset("nope".into()));
        assert_eq!(ids.issued(), 0);
    }

    #[test]
    fn empty_preset_is_an_error() {
        let mut db = FakeDatabase::new()
            .with_trader(TRADER)
            .with_preset(Preset::new("hollow", vec![]));
        let mut ids = SequentialIds::new("new");
        let request = InsertionRequest::preset("hollow", 1, Currency::Roubles);

        let err = insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap_err();

        assert_eq!(err, InsertError::EmptyPreset("hollow".into()));
        assert!(db.assort(TRADER).items.is_empty());
    }

    #[test]
    fn id_exhaustion_leaves_assort_untouched() {
        let mut db = FakeDatabase::new().with_trader(TRADER).with_preset(rifle());
        let mut ids = SequentialIds::repeating("stuck");
        let request = InsertionRequest::preset("preset_rifle", 1, Currency::Roubles);

        let err = insert_preset(&mut db, TRADER, &request, usd(1), &mut ids).unwrap_err();

        assert!(matches!(err, InsertError::IdCollision { .. }));
        assert!(db.assort(TRADER).items.is_empty());
        assert!(db.assort(TRADER).barter_scheme.is_empty());
    }
}
