//! Typed views of the Yahoo Finance options endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OptionChainResponse {
    #[serde(rename = "optionChain")]
    pub option_chain: OptionChainEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct OptionChainEnvelope {
    pub result: Vec<OptionChainResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainResult {
    pub quote: Quote,
    #[serde(default)]
    pub expiration_dates: Vec<i64>,
    #[serde(default)]
    pub options: Vec<OptionBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub regular_market_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct OptionBlock {
    #[serde(default)]
    pub calls: Vec<ContractRow>,
    #[serde(default)]
    pub puts: Vec<ContractRow>,
}

/// One contract row. Yahoo omits `openInterest` for dead strikes;
/// missing open interest is zero, never anything else.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRow {
    pub strike: Decimal,
    #[serde(default)]
    pub open_interest: u64,
}
