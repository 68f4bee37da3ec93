//! Insertion errors.
//!
//! Every error here is local to one config entry (or one trader): the mapper
//! logs it, skips the entry and moves on. None of them abort a run.

/// Severity level of an error, used for log levels and reporting.
///
/// - **Validation**: the config references something the database does not have
/// - **Internal**: a collaborator broke its contract (e.g. the id generator)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    /// Config names a trader missing from the database. All of its entries are skipped.
    #[error("trader {0} not found in database")]
    UnknownTrader(String),

    #[error("item {0} not found in database")]
    UnknownItemTemplate(String),

    #[error("preset {0} not found in database")]
    UnknownPreset(String),

    /// Preset exists but has no items, so there is no root to sell.
    #[error("preset {0} has no items")]
    EmptyPreset(String),

    /// The id generator kept returning ids already used by the assortment.
    #[error("could not generate an unused id for {target_id} after {attempts} attempts")]
    IdCollision { target_id: String, attempts: usize },
}

impl InsertError {
    pub fn severity(&self) -> ErrorSeverity {
        use InsertError::*;
        match self {
            UnknownTrader(_) | UnknownItemTemplate(_) | UnknownPreset(_) | EmptyPreset(_) => {
                ErrorSeverity::Validation
            }
            IdCollision { .. } => ErrorSeverity::Internal,
        }
    }

    pub fn error_code(&self) -> &'static str {
        use InsertError::*;
        match self {
            UnknownTrader(_) => "INSERT_UNKNOWN_TRADER",
            UnknownItemTemplate(_) => "INSERT_UNKNOWN_ITEM_TEMPLATE",
            UnknownPreset(_) => "INSERT_UNKNOWN_PRESET",
            EmptyPreset(_) => "INSERT_EMPTY_PRESET",
            IdCollision { .. } => "INSERT_ID_COLLISION",
        }
    }
}
