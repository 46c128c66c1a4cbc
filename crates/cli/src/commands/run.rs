//! The daily fetch-compute-persist cycle.
//!
//! One invocation performs one full cycle and terminates. Per-expiry
//! provider failures degrade to skipped expiries; only a missing
//! primary spot aborts the run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use maxpain_core::types::{LogEntry, PainResult};
use maxpain_core::{AppConfig, ConfigLoader, MarketDataProvider};
use maxpain_data::{HistoryStore, SnapshotStore};
use maxpain_deribit::{DeribitClient, DeribitProvider};
use maxpain_signal::{
    align, append_if_new_day, build_snapshot, classify_phase, compute_max_pain, conviction_score,
    SpotBand, StrikeFilter,
};
use maxpain_yahoo::{YahooClient, YahooProvider};

pub async fn run(config_path: &str) -> Result<()> {
    let config = ConfigLoader::load_from(config_path)?;

    let yahoo = YahooProvider::new(
        YahooClient::new(config.yahoo.base_url.clone()),
        config.instruments.primary_symbol.clone(),
    );

    // The one fatal condition: no primary spot, no snapshot.
    let spot = yahoo.spot().await.with_context(|| {
        format!(
            "no spot price for primary instrument {}",
            config.instruments.primary_symbol
        )
    })?;
    info!(symbol = config.instruments.primary_symbol, %spot, "Primary spot");

    let primary_pain = primary_pain_results(&yahoo, &config, spot).await;

    let (secondary_spot, secondary_by_date) = secondary_leg(&config).await;

    let records = align(&primary_pain, &secondary_by_date);
    let phase = primary_pain
        .first()
        .map(|front| classify_phase(spot, front.strike, config.signal.pin_threshold_pct));
    let snapshot = build_snapshot(spot, secondary_spot, records, phase);

    SnapshotStore::new(PathBuf::from(&config.store.snapshot_path))
        .save(&snapshot)
        .context("saving snapshot document")?;

    let history_store = HistoryStore::new(PathBuf::from(&config.store.history_path));
    let log = history_store.load();
    let front = primary_pain.first();
    let entry = LogEntry {
        date: Utc::now().date_naive(),
        spot,
        primary_pain: front.map(|p| p.strike),
        score: front.map(|p| conviction_score(spot, p.strike, config.score.strike_target)),
    };
    let log = append_if_new_day(log, entry, config.store.retention);
    history_store.save(&log).context("saving history log")?;

    info!(
        records = snapshot.data.len(),
        entries = log.len(),
        phase = snapshot.phase.map(|p| p.to_string()).unwrap_or_default(),
        "Run complete"
    );
    Ok(())
}

/// Max pain per upcoming primary expiry. A failed chain fetch or an
/// expiry with no surviving strikes is skipped, not fatal.
async fn primary_pain_results(
    provider: &dyn MarketDataProvider,
    config: &AppConfig,
    spot: Decimal,
) -> Vec<PainResult> {
    let expiries = match provider.expiries().await {
        Ok(expiries) => expiries,
        Err(e) => {
            warn!(error = %e, "Primary expiry calendar unavailable");
            return Vec::new();
        }
    };

    let filter = strike_filter(config, Some(spot));
    let mut results = Vec::new();
    for expiry in expiries.into_iter().take(config.signal.expiry_lookahead) {
        match provider.option_chain(expiry).await {
            Ok(chain) => match compute_max_pain(&chain, &filter) {
                Some(strike) => results.push(PainResult { expiry, strike }),
                None => warn!(%expiry, "No surviving strikes, skipping expiry"),
            },
            Err(e) => warn!(%expiry, error = %e, "Option chain fetch failed, skipping expiry"),
        }
    }
    results
}

/// Secondary spot and per-expiry pain map. Every failure on this leg
/// degrades: a missing provider yields an empty map, a missing spot
/// yields `None`.
async fn secondary_leg(config: &AppConfig) -> (Option<Decimal>, BTreeMap<NaiveDate, Decimal>) {
    let client = DeribitClient::new(config.deribit.base_url.clone());
    let provider = match DeribitProvider::load(client, &config.instruments.secondary_symbol).await
    {
        Ok(provider) => provider,
        Err(e) => {
            warn!(error = %e, "Secondary provider unavailable");
            return (None, BTreeMap::new());
        }
    };

    let secondary_spot = match provider.spot().await {
        Ok(spot) => {
            info!(symbol = config.instruments.secondary_symbol, %spot, "Secondary spot");
            Some(spot)
        }
        Err(e) => {
            warn!(error = %e, "Secondary spot unavailable");
            None
        }
    };

    let filter = strike_filter(config, secondary_spot);
    let mut by_date = BTreeMap::new();
    let expiries = match provider.expiries().await {
        Ok(expiries) => expiries,
        Err(e) => {
            warn!(error = %e, "Secondary expiry calendar unavailable");
            return (secondary_spot, by_date);
        }
    };
    for expiry in expiries {
        match provider.option_chain(expiry).await {
            Ok(chain) => {
                if let Some(strike) = compute_max_pain(&chain, &filter) {
                    by_date.insert(expiry, strike);
                }
            }
            Err(e) => warn!(%expiry, error = %e, "Secondary chain unavailable, skipping expiry"),
        }
    }
    (secondary_spot, by_date)
}

fn strike_filter(config: &AppConfig, spot: Option<Decimal>) -> StrikeFilter {
    StrikeFilter {
        min_open_interest: config.signal.min_open_interest,
        spot_band: match (config.signal.strike_band_pct, spot) {
            (Some(band_pct), Some(spot)) => Some(SpotBand { spot, band_pct }),
            _ => None,
        },
    }
}
