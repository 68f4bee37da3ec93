//! Trader configuration: which requests go to which trader.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::request::InsertionRequest;

/// Requests targeting a single trader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraderRequests {
    pub trader_id: String,
    pub requests: Vec<InsertionRequest>,
}

/// Mapping of trader id to insertion requests, in declaration order.
///
/// The on-disk form is a plain map (`{ "<trader id>": [ ... ] }`). Entries are
/// kept in the order the file declares them and a trader may appear only once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraderConfig {
    traders: Vec<TraderRequests>,
}

impl TraderConfig {
    /// Loyalty levels traders actually use.
    pub const LOYALTY_LEVELS: std::ops::RangeInclusive<u32> = 1..=4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends requests for a trader, merging with an existing entry.
    pub fn push(&mut self, trader_id: impl Into<String>, requests: Vec<InsertionRequest>) {
        let trader_id = trader_id.into();
        match self.traders.iter_mut().find(|e| e.trader_id == trader_id) {
            Some(entry) => entry.requests.extend(requests),
            None => self.traders.push(TraderRequests {
                trader_id,
                requests,
            }),
        }
    }

    pub fn with_trader(mut self, trader_id: impl Into<String>, requests: Vec<InsertionRequest>) -> Self {
        self.push(trader_id, requests);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraderRequests> {
        self.traders.iter()
    }

    pub fn requests(&self, trader_id: &str) -> Option<&[InsertionRequest]> {
        self.traders
            .iter()
            .find(|e| e.trader_id == trader_id)
            .map(|e| e.requests.as_slice())
    }

    pub fn trader_ids(&self) -> impl Iterator<Item = &str> {
        self.traders.iter().map(|e| e.trader_id.as_str())
    }

    /// Number of traders in the config.
    pub fn len(&self) -> usize {
        self.traders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traders.is_empty()
    }

    pub fn request_count(&self) -> usize {
        self.traders.iter().map(|e| e.requests.len()).sum()
    }

    /// Checks for entries that parse but are probably mistakes.
    ///
    /// Nothing here prevents insertion; callers log the warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for entry in &self.traders {
            if entry.requests.is_empty() {
                warnings.push(ConfigWarning::EmptyTrader {
                    trader_id: entry.trader_id.clone(),
                });
            }

            for request in &entry.requests {
                if request.price == 0 {
                    warnings.push(ConfigWarning::ZeroPrice {
                        trader_id: entry.trader_id.clone(),
                        target_id: request.target_id.clone(),
                    });
                }
                if request.stack_count == 0 {
                    warnings.push(ConfigWarning::ZeroStackCount {
                        trader_id: entry.trader_id.clone(),
                        target_id: request.target_id.clone(),
                    });
                }
                if !Self::LOYALTY_LEVELS.contains(&request.loyalty_level) {
                    warnings.push(ConfigWarning::LoyaltyLevelOutOfRange {
                        trader_id: entry.trader_id.clone(),
                        target_id: request.target_id.clone(),
                        level: request.loyalty_level,
                    });
                }
            }
        }

        warnings
    }
}

impl<'a> IntoIterator for &'a TraderConfig {
    type Item = &'a TraderRequests;
    type IntoIter = std::slice::Iter<'a, TraderRequests>;

    fn into_iter(self) -> Self::IntoIter {
        self.traders.iter()
    }
}

/// Suspicious but loadable config entries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("trader {trader_id} has no entries")]
    EmptyTrader { trader_id: String },

    #[error("{target_id} for trader {trader_id} has a price of 0")]
    ZeroPrice { trader_id: String, target_id: String },

    #[error("{target_id} for trader {trader_id} has a stack count of 0")]
    ZeroStackCount { trader_id: String, target_id: String },

    #[error("{target_id} for trader {trader_id} requires loyalty level {level}, traders use 1-4")]
    LoyaltyLevelOutOfRange {
        trader_id: String,
        target_id: String,
        level: u32,
    },
}

impl Serialize for TraderConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.traders.len()))?;
        for entry in &self.traders {
            map.serialize_entry(&entry.trader_id, &entry.requests)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TraderConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = TraderConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of trader id to a list of entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut traders: Vec<TraderRequests> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((trader_id, requests)) =
                    map.next_entry::<String, Vec<InsertionRequest>>()?
                {
                    if traders.iter().any(|e| e.trader_id == trader_id) {
                        return Err(de::Error::custom(format!(
                            "trader `{trader_id}` is listed more than once"
                        )));
                    }
                    traders.push(TraderRequests {
                        trader_id,
                        requests,
                    });
                }

                Ok(TraderConfig { traders })
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
