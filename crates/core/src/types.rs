//! Domain types shared across the feed.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option contract side (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    Call,
    Put,
}

impl std::fmt::Display for OptionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "C"),
            Self::Put => write!(f, "P"),
        }
    }
}

/// Open interest observed at one strike, for one instrument and expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeObservation {
    pub strike: Decimal,
    pub open_interest: u64,
    pub side: OptionSide,
}

/// Max pain result for one (instrument, expiry) pair.
///
/// The strike is always one of the observed strikes for that expiry,
/// never interpolated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainResult {
    pub expiry: NaiveDate,
    pub strike: Decimal,
}

/// One merged per-date record in the snapshot.
///
/// `date` always originates from the primary instrument's expiry calendar.
/// `secondary_pain` is an exact same-date match or the nearest available
/// secondary value by absolute date distance; `None` means no secondary
/// value exists at all (serialized as JSON `null`, never a silent zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedExpiryRecord {
    pub date: NaiveDate,
    pub primary_pain: Decimal,
    pub secondary_pain: Option<Decimal>,
    pub is_monthly: bool,
}

/// Position of the primary spot relative to the front-expiry pain strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Spot within the pin threshold of the front pain strike.
    Pinned,
    AbovePain,
    BelowPain,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pinned => write!(f, "pinned"),
            Self::AbovePain => write!(f, "above_pain"),
            Self::BelowPain => write!(f, "below_pain"),
        }
    }
}

/// The current-state document, rebuilt wholesale on every run.
///
/// `data` is always present — an empty run serializes an empty array,
/// not a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_update: DateTime<Utc>,
    pub spot: Decimal,
    pub secondary_spot: Option<Decimal>,
    pub phase: Option<Phase>,
    pub data: Vec<MergedExpiryRecord>,
}

/// One row of the append-only history log. At most one entry per UTC
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub spot: Decimal,
    pub primary_pain: Option<Decimal>,
    pub score: Option<i64>,
}
