//! Transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use miniops_core::Entity;

/// Transaction identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u32);

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An immutable transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: DateTime<Utc>,
    /// Positive amount in smallest currency unit (e.g., cents).
    pub amount: i64,
    pub category: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: DateTime<Utc>,
        amount: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
        }
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }
}

/// Format an amount held in cents as a dollar string, e.g. `$120.50`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
