//! Max pain strike computation.

use std::collections::BTreeMap;

use maxpain_core::types::{OptionSide, StrikeObservation};
use rust_decimal::Decimal;

/// Candidate strike filter applied before loss minimization.
#[derive(Debug, Clone, Default)]
pub struct StrikeFilter {
    /// Combined open interest floor across both sides. Strikes below it
    /// are dropped entirely — as candidates and as loss contributors.
    pub min_open_interest: u64,
    /// Optional proportional band around spot. Strikes outside it are
    /// dropped (far OTM strikes with stale open interest).
    pub spot_band: Option<SpotBand>,
}

/// Proportional band around the current spot price.
#[derive(Debug, Clone)]
pub struct SpotBand {
    pub spot: Decimal,
    pub band_pct: Decimal,
}

impl SpotBand {
    fn contains(&self, strike: Decimal) -> bool {
        let width = self.spot * self.band_pct;
        strike >= self.spot - width && strike <= self.spot + width
    }
}

/// Returns the strike minimizing aggregate intrinsic loss to option
/// holders, or `None` when no strike survives filtering.
///
/// `loss(s) = Σ over call strikes k < s of (s − k)·OI(k)
///          + Σ over put strikes k > s of (k − s)·OI(k)`
///
/// Ties are broken toward the lowest strike. An empty surviving set is
/// an expected outcome (illiquid expiry), not an error.
pub fn compute_max_pain(
    observations: &[StrikeObservation],
    filter: &StrikeFilter,
) -> Option<Decimal> {
    // Combined open interest per strike, both sides.
    let mut combined: BTreeMap<Decimal, u64> = BTreeMap::new();
    for obs in observations {
        *combined.entry(obs.strike).or_insert(0) += obs.open_interest;
    }

    let surviving: Vec<Decimal> = combined
        .iter()
        .filter(|(strike, oi)| {
            **oi > 0
                && **oi >= filter.min_open_interest
                && filter
                    .spot_band
                    .as_ref()
                    .map_or(true, |band| band.contains(**strike))
        })
        .map(|(strike, _)| *strike)
        .collect();

    if surviving.is_empty() {
        return None;
    }

    let live: Vec<&StrikeObservation> = observations
        .iter()
        .filter(|obs| surviving.binary_search(&obs.strike).is_ok())
        .collect();

    let mut best: Option<(Decimal, Decimal)> = None;
    for &candidate in &surviving {
        let mut loss = Decimal::ZERO;
        for obs in &live {
            let oi = Decimal::from(obs.open_interest);
            match obs.side {
                OptionSide::Call if obs.strike < candidate => {
                    loss += (candidate - obs.strike) * oi;
                }
                OptionSide::Put if obs.strike > candidate => {
                    loss += (obs.strike - candidate) * oi;
                }
                _ => {}
            }
        }
        // Strict comparison keeps the lowest strike on a tie, since
        // candidates are visited in ascending order.
        match best {
            Some((_, best_loss)) if loss >= best_loss => {}
            _ => best = Some((candidate, loss)),
        }
    }

    best.map(|(strike, _)| strike)
}
