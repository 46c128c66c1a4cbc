use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::StrikeObservation;

/// Market data for one instrument, as the feed consumes it.
///
/// Implementations are free to back these calls with a per-expiry chain
/// endpoint or with an aggregated book summary fetched once per run.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current spot price of the underlying.
    async fn spot(&self) -> Result<Decimal>;

    /// Upcoming expiration dates, ascending.
    async fn expiries(&self) -> Result<Vec<NaiveDate>>;

    /// Open interest observations for one expiry. An unknown expiry
    /// yields an empty chain, not an error.
    async fn option_chain(&self, expiry: NaiveDate) -> Result<Vec<StrikeObservation>>;

    /// Combined open interest per strike for one expiry.
    async fn open_interest_by_strike(&self, expiry: NaiveDate)
        -> Result<BTreeMap<Decimal, u64>>;
}
