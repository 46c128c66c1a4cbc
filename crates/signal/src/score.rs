//! Conviction score for the daily log entry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Scores how far the tape has run past the reference strike: +4 when
/// spot clears the target by 10%, +6 when the front-expiry pain sits
/// above the target.
pub fn conviction_score(spot: Decimal, front_pain: Decimal, strike_target: Decimal) -> i64 {
    let mut score = 0;
    if spot > strike_target * dec!(1.10) {
        score += 4;
    }
    if front_pain > strike_target {
        score += 6;
    }
    score
}
