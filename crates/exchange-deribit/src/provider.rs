use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use maxpain_core::traits::MarketDataProvider;
use maxpain_core::types::StrikeObservation;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::client::{BookSummaryRow, DeribitClient};
use crate::instrument::parse_instrument_name;

/// Crypto-leg provider backed by the aggregated option book summary,
/// fetched once at construction and served as views afterwards.
pub struct DeribitProvider {
    client: DeribitClient,
    index_name: String,
    by_expiry: BTreeMap<NaiveDate, Vec<StrikeObservation>>,
}

impl DeribitProvider {
    /// Fetches the option book summary for `currency` and indexes it by
    /// expiry. Rows that are not options are skipped silently; rows
    /// with unparseable names are logged and skipped.
    pub async fn load(client: DeribitClient, currency: &str) -> Result<Self> {
        let rows = client.option_book_summary(currency).await?;
        let by_expiry = index_by_expiry(&rows);
        debug!(
            currency,
            instruments = rows.len(),
            expiries = by_expiry.len(),
            "Indexed option book summary"
        );

        Ok(Self {
            client,
            index_name: format!("{}_usd", currency.to_lowercase()),
            by_expiry,
        })
    }
}

#[async_trait]
impl MarketDataProvider for DeribitProvider {
    async fn spot(&self) -> Result<Decimal> {
        self.client.index_price(&self.index_name).await
    }

    async fn expiries(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.by_expiry.keys().copied().collect())
    }

    async fn option_chain(&self, expiry: NaiveDate) -> Result<Vec<StrikeObservation>> {
        Ok(self.by_expiry.get(&expiry).cloned().unwrap_or_default())
    }

    async fn open_interest_by_strike(
        &self,
        expiry: NaiveDate,
    ) -> Result<BTreeMap<Decimal, u64>> {
        let mut by_strike = BTreeMap::new();
        for obs in self.by_expiry.get(&expiry).into_iter().flatten() {
            *by_strike.entry(obs.strike).or_insert(0) += obs.open_interest;
        }
        Ok(by_strike)
    }
}

fn index_by_expiry(rows: &[BookSummaryRow]) -> BTreeMap<NaiveDate, Vec<StrikeObservation>> {
    let mut by_expiry: BTreeMap<NaiveDate, Vec<StrikeObservation>> = BTreeMap::new();
    for row in rows {
        let Some(parsed) = parse_instrument_name(&row.instrument_name) else {
            if row.instrument_name.matches('-').count() == 3 {
                warn!(instrument = row.instrument_name, "Unparseable option name, skipping");
            }
            continue;
        };
        if row.open_interest < 0.0 {
            warn!(instrument = row.instrument_name, "Negative open interest, skipping");
            continue;
        }
        by_expiry.entry(parsed.expiry).or_default().push(StrikeObservation {
            strike: parsed.strike,
            // Whole contracts; Deribit reports fractional OI in
            // underlying units.
            open_interest: row.open_interest.round() as u64,
            side: parsed.side,
        });
    }
    by_expiry
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxpain_core::types::OptionSide;
    use rust_decimal_macros::dec;

    fn row(name: &str, oi: f64) -> BookSummaryRow {
        BookSummaryRow {
            instrument_name: name.to_string(),
            open_interest: oi,
        }
    }

    #[test]
    fn groups_rows_by_expiry() {
        let rows = vec![
            row("BTC-2JAN26-95000-P", 120.0),
            row("BTC-2JAN26-100000-C", 310.5),
            row("BTC-27MAR26-120000-C", 44.0),
            row("BTC-PERPETUAL", 9000.0),
        ];

        let by_expiry = index_by_expiry(&rows);
        assert_eq!(by_expiry.len(), 2);

        let jan = &by_expiry[&NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()];
        assert_eq!(jan.len(), 2);
        assert_eq!(jan[0].side, OptionSide::Put);
        assert_eq!(jan[1].open_interest, 311);
    }

    #[test]
    fn expiries_come_out_ascending() {
        let rows = vec![
            row("BTC-27MAR26-120000-C", 1.0),
            row("BTC-2JAN26-95000-P", 1.0),
            row("BTC-30JAN26-100000-C", 1.0),
        ];

        let by_expiry = index_by_expiry(&rows);
        let dates: Vec<_> = by_expiry.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 27).unwrap(),
            ]
        );
    }

    #[test]
    fn open_interest_aggregates_across_sides() {
        let rows = vec![
            row("BTC-2JAN26-95000-P", 100.0),
            row("BTC-2JAN26-95000-C", 50.0),
        ];

        let by_expiry = index_by_expiry(&rows);
        let chain = &by_expiry[&NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()];
        let total: u64 = chain
            .iter()
            .filter(|o| o.strike == dec!(95000))
            .map(|o| o.open_interest)
            .sum();
        assert_eq!(total, 150);
    }
}
