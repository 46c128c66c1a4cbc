pub mod config;
pub mod config_loader;
pub mod traits;
pub mod types;

pub use config::{
    AppConfig, DeribitConfig, InstrumentsConfig, ScoreConfig, SignalConfig, StoreConfig,
    YahooConfig,
};
pub use config_loader::ConfigLoader;
pub use traits::MarketDataProvider;
pub use types::{
    LogEntry, MergedExpiryRecord, OptionSide, PainResult, Phase, Snapshot, StrikeObservation,
};
