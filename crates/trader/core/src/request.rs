//! Insertion requests and currency resolution.

use serde::{Deserialize, Serialize};

/// Currency an offer is priced in.
///
/// Codes are matched exactly (`"EUR"`, `"USD"`). Every other code, including
/// `"ROUBLES"`, `"RUB"` and the empty string, resolves to roubles.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Currency {
    Eur,
    Usd,
    #[default]
    Roubles,
}

impl Currency {
    pub const EUR_TEMPLATE_ID: &'static str = "569668774bdc2da2298b4568";
    pub const USD_TEMPLATE_ID: &'static str = "5696686a4bdc2da3298b456a";
    pub const ROUBLES_TEMPLATE_ID: &'static str = "5449016a4bdc2d6f028b456f";

    /// Resolves a config currency code, falling back to roubles.
    pub fn resolve(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    /// Template id of the currency item used in barter schemes.
    pub const fn template_id(self) -> &'static str {
        match self {
            Self::Eur => Self::EUR_TEMPLATE_ID,
            Self::Usd => Self::USD_TEMPLATE_ID,
            Self::Roubles => Self::ROUBLES_TEMPLATE_ID,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::resolve(&code)
    }
}

/// One item or preset to add to a trader.
///
/// Config spelling:
///
/// ```jsonc
/// { "id": "5448fee04bdc2dbc018b4567", "preset": false, "price": 500,
///   "currency": "USD", "loyaltylevel": 1, "count": 3 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionRequest {
    /// Item template id, or preset id when `is_preset` is set.
    #[serde(rename = "id")]
    pub target_id: String,

    #[serde(rename = "preset", default)]
    pub is_preset: bool,

    pub price: u64,

    #[serde(default)]
    pub currency: Currency,

    #[serde(rename = "loyaltylevel")]
    pub loyalty_level: u32,

    #[serde(rename = "count")]
    pub stack_count: u64,
}

impl InsertionRequest {
    pub fn item(target_id: impl Into<String>, price: u64, currency: Currency) -> Self {
        Self {
            target_id: target_id.into(),
            is_preset: false,
            price,
            currency,
            loyalty_level: 1,
            stack_count: 1,
        }
    }

    pub fn preset(preset_id: impl Into<String>, price: u64, currency: Currency) -> Self {
        Self {
            is_preset: true,
            ..Self::item(preset_id, price, currency)
        }
    }

    pub fn with_loyalty_level(mut self, loyalty_level: u32) -> Self {
        self.loyalty_level = loyalty_level;
        self
    }

    pub fn with_stack_count(mut self, stack_count: u64) -> Self {
        self.stack_count = stack_count;
        self
    }
}
