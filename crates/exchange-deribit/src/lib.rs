//! Deribit public API integration for the crypto leg of the feed.
//!
//! Deribit has no per-expiry chain endpoint worth polling; the whole
//! option book arrives as one aggregated summary, one row per
//! instrument. The provider fetches it once per run and serves
//! expiries, chains, and open interest as views over that summary.

pub mod client;
pub mod instrument;
pub mod provider;

pub use client::DeribitClient;
pub use instrument::{parse_instrument_name, ParsedInstrument};
pub use provider::DeribitProvider;
