use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One quoted currency: its code, the quote date and the unit price
/// against the shared reference unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrencyRecord {
    pub currency: String,
    /// Informational only. Never used in conversions.
    pub date: String,
    pub price: f64,
}

impl CurrencyRecord {
    pub fn new(currency: impl Into<String>, date: impl Into<String>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            date: date.into(),
            price,
        }
    }

    /// Parses `date` as RFC 3339. `None` when the feed used some other format.
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
