//! Stored value and expiry types.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// When a stored value stops being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiry {
    /// Never expires and survives [`delete_all`](super::KeyValueStore::delete_all).
    Reserved,
    /// No expiration date; removed only by an explicit delete.
    Never,
    /// Expires at the given instant.
    At(DateTime<Utc>),
}

impl Expiry {
    /// Expire `seconds` from now.
    ///
    /// A lifetime past the latest representable instant becomes [`Expiry::Never`].
    pub fn after_seconds(seconds: u64) -> Self {
        i64::try_from(seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .map_or(Self::Never, Self::At)
    }

    /// Whether this expiry carries a date.
    pub fn has_date(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

/// A single value held by a key/value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredValue {
    /// The stored payload.
    pub value: String,
    /// When this value was written.
    pub created_at: DateTime<Utc>,
    /// Expiry policy.
    pub expiry: Expiry,
}

impl StoredValue {
    /// Create a value written now.
    pub fn new(value: impl Into<String>, expiry: Expiry) -> Self {
        Self {
            value: value.into(),
            created_at: Utc::now(),
            expiry,
        }
    }

    /// Check if the value has passed its expiry date.
    pub fn is_expired(&self) -> bool {
        match self.expiry {
            Expiry::At(at) => Utc::now() >= at,
            Expiry::Reserved | Expiry::Never => false,
        }
    }

    /// Check if the value is reserved.
    pub fn is_reserved(&self) -> bool {
        self.expiry == Expiry::Reserved
    }
}
