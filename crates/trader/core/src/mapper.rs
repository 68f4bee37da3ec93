//! Applies a [`TraderConfig`] to a database.

use tracing::{info, warn};

use crate::config::{TraderConfig, TraderRequests};
use crate::env::{Database, IdGenerator};
use crate::error::InsertError;
use crate::insert::{InsertedOffer, insert_item, insert_preset};
use crate::remap::{MAX_ID_ATTEMPTS, fresh_id};
use crate::request::InsertionRequest;
use crate::types::BarterOption;

/// Outcome of one [`TraderMapper::process`] run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub inserted: Vec<InsertedOffer>,
    /// Entries (or whole traders) that were skipped, in encounter order.
    pub skipped: Vec<InsertError>,
}

impl ProcessReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn inserted_for<'a>(&'a self, trader_id: &'a str) -> impl Iterator<Item = &'a InsertedOffer> {
        self.inserted.iter().filter(move |o| o.trader_id == trader_id)
    }
}

/// Walks the config trader by trader and inserts every request.
///
/// Failures never stop the run: unknown traders skip their whole list, any
/// other error skips just that request.
pub struct TraderMapper<G> {
    ids: G,
}

impl<G: IdGenerator> TraderMapper<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    pub fn into_inner(self) -> G {
        self.ids
    }

    pub fn process<D>(&mut self, config: &TraderConfig, db: &mut D) -> ProcessReport
    where
        D: Database + ?Sized,
    {
        let mut report = ProcessReport::default();

        for entry in config {
            if !db.has_trader(&entry.trader_id) {
                let err = InsertError::UnknownTrader(entry.trader_id.clone());
                warn!(code = err.error_code(), "{err}");
                report.skipped.push(err);
                continue;
            }
            self.process_trader(entry, db, &mut report);
        }

        info!(
            inserted = report.inserted.len(),
            skipped = report.skipped.len(),
            "trader config applied"
        );
        report
    }

    fn process_trader<D>(&mut self, entry: &TraderRequests, db: &mut D, report: &mut ProcessReport)
    where
        D: Database + ?Sized,
    {
        let trader_id = entry.trader_id.as_str();
        let before = report.inserted.len();

        for request in &entry.requests {
            match self.process_request(trader_id, request, db) {
                Ok(offer) => report.inserted.push(offer),
                Err(err) => {
                    warn!(trader = trader_id, code = err.error_code(), "{err}");
                    report.skipped.push(err);
                }
            }
        }

        info!(
            trader = trader_id,
            added = report.inserted.len() - before,
            requested = entry.requests.len(),
            "trader processed"
        );
    }

    fn process_request<D>(
        &mut self,
        trader_id: &str,
        request: &InsertionRequest,
        db: &mut D,
    ) -> Result<InsertedOffer, InsertError>
    where
        D: Database + ?Sized,
    {
        let scheme = BarterOption::new(request.price, request.currency.template_id());

        if request.is_preset {
            return insert_preset(db, trader_id, request, scheme, &mut self.ids);
        }

        let assort = db
            .assort_mut(trader_id)
            .ok_or_else(|| InsertError::UnknownTrader(trader_id.to_owned()))?;
        let trade_id = fresh_id(&mut self.ids, |id| assort.contains_item(id)).ok_or_else(|| {
            InsertError::IdCollision {
                target_id: request.target_id.clone(),
                attempts: MAX_ID_ATTEMPTS,
            }
        })?;

        insert_item(db, trader_id, request, trade_id, scheme)
    }
}
