use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub instruments: InstrumentsConfig,
    pub signal: SignalConfig,
    pub score: ScoreConfig,
    pub store: StoreConfig,
    pub yahoo: YahooConfig,
    pub deribit: DeribitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentsConfig {
    pub primary_symbol: String,
    pub secondary_symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Combined open interest floor. Strikes below it are dropped entirely.
    pub min_open_interest: u64,
    /// Optional proportional band around spot for candidate strikes
    /// (e.g. 0.5 = keep strikes within ±50% of spot).
    pub strike_band_pct: Option<Decimal>,
    /// How many upcoming primary expiries to process per run.
    pub expiry_lookahead: usize,
    /// Spot within this fraction of the front pain strike counts as pinned.
    pub pin_threshold_pct: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Reference strike for the conviction score.
    pub strike_target: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub snapshot_path: String,
    pub history_path: String,
    /// Number of log entries kept (sliding window, oldest dropped first).
    pub retention: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YahooConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeribitConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instruments: InstrumentsConfig {
                primary_symbol: "MSTR".to_string(),
                secondary_symbol: "BTC".to_string(),
            },
            signal: SignalConfig {
                min_open_interest: 10,
                strike_band_pct: Some(Decimal::new(5, 1)),
                expiry_lookahead: 6,
                pin_threshold_pct: Decimal::new(2, 2),
            },
            score: ScoreConfig {
                strike_target: Decimal::from(150),
            },
            store: StoreConfig {
                snapshot_path: "data/snapshot.json".to_string(),
                history_path: "data/history_log.json".to_string(),
                retention: 30,
            },
            yahoo: YahooConfig {
                base_url: "https://query1.finance.yahoo.com".to_string(),
            },
            deribit: DeribitConfig {
                base_url: "https://www.deribit.com".to_string(),
            },
        }
    }
}
