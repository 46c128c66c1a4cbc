//! Deribit instrument name dissection.
//!
//! Option names look like `BTC-27MAR26-100000-C`: currency, expiry in
//! `DDMMMYY`, strike, and side.

use chrono::NaiveDate;
use maxpain_core::types::OptionSide;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstrument {
    pub expiry: NaiveDate,
    pub strike: Decimal,
    pub side: OptionSide,
}

/// Parses an option instrument name. Returns `None` for futures,
/// perpetuals, and anything else that does not match the option shape.
pub fn parse_instrument_name(name: &str) -> Option<ParsedInstrument> {
    let mut parts = name.split('-');
    let _currency = parts.next()?;
    let expiry = parts.next()?;
    let strike = parts.next()?;
    let side = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let expiry = NaiveDate::parse_from_str(expiry, "%d%b%y").ok()?;
    let strike = Decimal::from_str(strike).ok()?;
    let side = match side {
        "C" => OptionSide::Call,
        "P" => OptionSide::Put,
        _ => return None,
    };

    Some(ParsedInstrument {
        expiry,
        strike,
        side,
    })
}
