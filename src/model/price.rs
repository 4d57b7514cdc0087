use chrono::{DateTime, Utc};

/// A single normalized price observation from the upstream price API.
///
/// Immutable once constructed. The price fetcher only constructs samples with a
/// non-negative, finite `price_usd`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    price_usd: f64,
    change_24h_pct: Option<f64>,
    fetched_at: DateTime<Utc>,
}

impl PriceSample {
    /// Creates a new price sample.
    ///
    /// # Arguments
    /// - `price_usd` - Token price in USD
    /// - `change_24h_pct` - 24 hour change in percent, if the provider reported one
    /// - `fetched_at` - When the sample was received
    pub fn new(price_usd: f64, change_24h_pct: Option<f64>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            price_usd,
            change_24h_pct,
            fetched_at,
        }
    }

    pub fn price_usd(&self) -> f64 {
        self.price_usd
    }

    pub fn change_24h_pct(&self) -> Option<f64> {
        self.change_24h_pct
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
