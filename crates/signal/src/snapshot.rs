//! Snapshot assembly.

use chrono::Utc;
use maxpain_core::types::{MergedExpiryRecord, Phase, Snapshot};
use rust_decimal::Decimal;

/// Assembles the current-state document. Pure assembly, no
/// recomputation; stamps the current instant.
pub fn build_snapshot(
    spot: Decimal,
    secondary_spot: Option<Decimal>,
    records: Vec<MergedExpiryRecord>,
    phase: Option<Phase>,
) -> Snapshot {
    Snapshot {
        last_update: Utc::now(),
        spot,
        secondary_spot,
        phase,
        data: records,
    }
}
