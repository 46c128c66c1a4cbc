//! Yahoo Finance integration for the equity leg of the feed.

pub mod client;
pub mod models;
pub mod provider;

pub use client::YahooClient;
pub use provider::YahooProvider;
