use anyhow::Result;
use governor::{clock::DefaultClock, state::InMemoryState, Quota, RateLimiter};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;

/// JSON-RPC envelope wrapping every Deribit public response.
#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct IndexPriceResult {
    index_price: Decimal,
}

/// One row of the aggregated option book summary.
#[derive(Debug, Clone, Deserialize)]
pub struct BookSummaryRow {
    pub instrument_name: String,
    /// Open interest in underlying units; fractional on Deribit.
    #[serde(default)]
    pub open_interest: f64,
}

pub struct DeribitClient {
    http_client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter<governor::state::direct::NotKeyed, InMemoryState, DefaultClock>>,
}

impl DeribitClient {
    pub fn new(base_url: String) -> Self {
        // Public endpoints allow 20 requests per second unauthenticated.
        let quota = Quota::per_second(NonZeroU32::new(20).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            http_client: Client::new(),
            base_url,
            rate_limiter,
        }
    }

    /// Current index price for e.g. `btc_usd`.
    pub async fn index_price(&self, index_name: &str) -> Result<Decimal> {
        self.rate_limiter.until_ready().await;
        let url = format!(
            "{}/api/v2/public/get_index_price?index_name={}",
            self.base_url, index_name
        );
        let response = self.http_client.get(&url).send().await?.error_for_status()?;
        let envelope: RpcEnvelope<IndexPriceResult> = response.json().await?;
        Ok(envelope.result.index_price)
    }

    /// Aggregated book summary for every live option on a currency.
    pub async fn option_book_summary(&self, currency: &str) -> Result<Vec<BookSummaryRow>> {
        self.rate_limiter.until_ready().await;
        let url = format!(
            "{}/api/v2/public/get_book_summary_by_currency?currency={}&kind=option",
            self.base_url, currency
        );
        let response = self.http_client.get(&url).send().await?.error_for_status()?;
        let envelope: RpcEnvelope<Vec<BookSummaryRow>> = response.json().await?;
        Ok(envelope.result)
    }
}
