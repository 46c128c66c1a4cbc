use anyhow::{Context, Result};
use governor::{clock::DefaultClock, state::InMemoryState, Quota, RateLimiter};
use reqwest::Client;
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::models::{OptionChainResponse, OptionChainResult};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; maxpain-feed/0.1)";

pub struct YahooClient {
    http_client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter<governor::state::direct::NotKeyed, InMemoryState, DefaultClock>>,
}

impl YahooClient {
    pub fn new(base_url: String) -> Self {
        // Yahoo throttles aggressively; stay well under its limits.
        let quota = Quota::per_second(NonZeroU32::new(2).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            http_client: Client::new(),
            base_url,
            rate_limiter,
        }
    }

    /// Fetches the option chain envelope for a symbol. With no `date`
    /// the response carries the quote and the full expiration list;
    /// with a `date` (epoch seconds) it carries that expiry's chain.
    pub async fn option_chain(
        &self,
        symbol: &str,
        date: Option<i64>,
    ) -> Result<OptionChainResult> {
        self.rate_limiter.until_ready().await;

        let mut url = format!("{}/v7/finance/options/{}", self.base_url, symbol);
        if let Some(epoch) = date {
            url = format!("{url}?date={epoch}");
        }

        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        let envelope: OptionChainResponse = response.json().await?;

        envelope
            .option_chain
            .result
            .into_iter()
            .next()
            .with_context(|| format!("empty option chain response for {symbol}"))
    }
}
