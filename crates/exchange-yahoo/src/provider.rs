use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use maxpain_core::traits::MarketDataProvider;
use maxpain_core::types::{OptionSide, StrikeObservation};
use rust_decimal::Decimal;
use tracing::debug;

use crate::client::YahooClient;
use crate::models::OptionBlock;

/// Equity-leg provider backed by the Yahoo per-expiry chain endpoint.
pub struct YahooProvider {
    client: YahooClient,
    symbol: String,
}

impl YahooProvider {
    pub fn new(client: YahooClient, symbol: String) -> Self {
        Self { client, symbol }
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn spot(&self) -> Result<Decimal> {
        let chain = self.client.option_chain(&self.symbol, None).await?;
        Ok(chain.quote.regular_market_price)
    }

    async fn expiries(&self) -> Result<Vec<NaiveDate>> {
        let chain = self.client.option_chain(&self.symbol, None).await?;
        Ok(chain
            .expiration_dates
            .iter()
            .filter_map(|&epoch| DateTime::from_timestamp(epoch, 0))
            .map(|dt| dt.date_naive())
            .collect())
    }

    async fn option_chain(&self, expiry: NaiveDate) -> Result<Vec<StrikeObservation>> {
        let epoch = expiry_epoch(expiry);
        let chain = self
            .client
            .option_chain(&self.symbol, Some(epoch))
            .await
            .with_context(|| format!("option chain for {} {expiry}", self.symbol))?;

        let observations = chain
            .options
            .first()
            .map(block_to_observations)
            .unwrap_or_default();
        debug!(
            symbol = self.symbol,
            %expiry,
            observations = observations.len(),
            "Fetched option chain"
        );
        Ok(observations)
    }

    async fn open_interest_by_strike(
        &self,
        expiry: NaiveDate,
    ) -> Result<BTreeMap<Decimal, u64>> {
        let observations = self.option_chain(expiry).await?;
        let mut by_strike = BTreeMap::new();
        for obs in observations {
            *by_strike.entry(obs.strike).or_insert(0) += obs.open_interest;
        }
        Ok(by_strike)
    }
}

/// Yahoo keys per-expiry chains by the expiry's midnight-UTC epoch.
fn expiry_epoch(expiry: NaiveDate) -> i64 {
    expiry.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn block_to_observations(block: &OptionBlock) -> Vec<StrikeObservation> {
    let calls = block.calls.iter().map(|row| StrikeObservation {
        strike: row.strike,
        open_interest: row.open_interest,
        side: OptionSide::Call,
    });
    let puts = block.puts.iter().map(|row| StrikeObservation {
        strike: row.strike,
        open_interest: row.open_interest,
        side: OptionSide::Put,
    });
    calls.chain(puts).collect()
}
