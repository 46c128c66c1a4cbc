//! Phase label derived from spot vs. the front-expiry pain strike.

use maxpain_core::types::Phase;
use rust_decimal::Decimal;

/// Classifies where spot sits relative to the front pain strike. Within
/// `pin_threshold_pct` of it counts as pinned.
pub fn classify_phase(spot: Decimal, front_pain: Decimal, pin_threshold_pct: Decimal) -> Phase {
    if front_pain > Decimal::ZERO {
        let drift = ((spot - front_pain) / front_pain).abs();
        if drift <= pin_threshold_pct {
            return Phase::Pinned;
        }
    }
    if spot > front_pain {
        Phase::AbovePain
    } else {
        Phase::BelowPain
    }
}
