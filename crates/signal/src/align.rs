//! Cross-asset expiry alignment.
//!
//! The two instruments' option markets do not share identical expiration
//! calendars. The primary calendar drives the output; each primary date
//! takes the exact secondary match when one exists, else the nearest
//! secondary date by absolute distance.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use maxpain_core::types::{MergedExpiryRecord, PainResult};
use rust_decimal::Decimal;

/// Merges per-date pain values of both instruments into one record per
/// primary expiry, preserving the primary ordering as received.
pub fn align(
    primary: &[PainResult],
    secondary_by_date: &BTreeMap<NaiveDate, Decimal>,
) -> Vec<MergedExpiryRecord> {
    primary
        .iter()
        .map(|result| MergedExpiryRecord {
            date: result.expiry,
            primary_pain: result.strike,
            secondary_pain: nearest_value(secondary_by_date, result.expiry),
            is_monthly: is_monthly_expiry(result.expiry),
        })
        .collect()
}

/// Exact match, or the value at the date with minimum absolute distance
/// (ties broken by the earlier date). `None` only when the map is empty.
/// Never interpolated or averaged across two neighbors.
fn nearest_value(map: &BTreeMap<NaiveDate, Decimal>, date: NaiveDate) -> Option<Decimal> {
    if let Some(value) = map.get(&date) {
        return Some(*value);
    }

    let mut best: Option<(i64, Decimal)> = None;
    for (&candidate, &value) in map {
        let distance = (candidate - date).num_days().abs();
        // Ascending key order keeps the earlier date on a distance tie.
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, value)),
        }
    }
    best.map(|(_, value)| value)
}

/// A standard monthly expiry falls on a Friday within the third-week
/// window (day 15 through 21 inclusive). Calendar classification only,
/// independent of the pain value.
pub fn is_monthly_expiry(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Fri && (15..=21).contains(&date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pain(expiry: NaiveDate, strike: Decimal) -> PainResult {
        PainResult { expiry, strike }
    }

    #[test]
    fn exact_match_is_preferred() {
        let primary = vec![pain(date(2026, 1, 2), dec!(170))];
        let secondary = BTreeMap::from([
            (date(2026, 1, 2), dec!(95000)),
            (date(2026, 1, 3), dec!(99000)),
        ]);

        let records = align(&primary, &secondary);
        assert_eq!(records[0].secondary_pain, Some(dec!(95000)));
    }

    #[test]
    fn nearest_date_wins_when_no_exact_match() {
        // 2026-01-16 is 14 days from 01-02 and 4 days from 01-20.
        let primary = vec![pain(date(2026, 1, 16), dec!(180))];
        let secondary = BTreeMap::from([
            (date(2026, 1, 2), dec!(95000)),
            (date(2026, 1, 20), dec!(105000)),
        ]);

        let records = align(&primary, &secondary);
        assert_eq!(records[0].secondary_pain, Some(dec!(105000)));
    }

    #[test]
    fn distance_tie_takes_earlier_date() {
        let primary = vec![pain(date(2026, 1, 10), dec!(180))];
        let secondary = BTreeMap::from([
            (date(2026, 1, 8), dec!(90000)),
            (date(2026, 1, 12), dec!(110000)),
        ]);

        let records = align(&primary, &secondary);
        assert_eq!(records[0].secondary_pain, Some(dec!(90000)));
    }

    #[test]
    fn lone_secondary_value_serves_every_primary_date() {
        let primary = vec![
            pain(date(2026, 1, 2), dec!(170)),
            pain(date(2026, 1, 9), dec!(175)),
        ];
        let secondary = BTreeMap::from([(date(2026, 1, 2), dec!(95000))]);

        let records = align(&primary, &secondary);
        assert_eq!(records[0].secondary_pain, Some(dec!(95000)));
        assert_eq!(records[1].secondary_pain, Some(dec!(95000)));
    }

    #[test]
    fn empty_secondary_yields_sentinel_not_zero() {
        let primary = vec![pain(date(2026, 1, 2), dec!(170))];
        let records = align(&primary, &BTreeMap::new());
        assert_eq!(records[0].secondary_pain, None);
    }

    #[test]
    fn primary_ordering_is_preserved() {
        let primary = vec![
            pain(date(2026, 1, 2), dec!(170)),
            pain(date(2026, 1, 9), dec!(175)),
            pain(date(2026, 1, 16), dec!(180)),
        ];
        let secondary = BTreeMap::from([(date(2026, 1, 9), dec!(100000))]);

        let dates: Vec<NaiveDate> = align(&primary, &secondary)
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(
            dates,
            vec![date(2026, 1, 2), date(2026, 1, 9), date(2026, 1, 16)]
        );
    }

    #[test]
    fn third_friday_is_monthly() {
        // 2026-01-16 is the third Friday of January 2026.
        assert!(is_monthly_expiry(date(2026, 1, 16)));
    }

    #[test]
    fn friday_outside_third_week_is_not_monthly() {
        // 2026-01-02 and 2026-01-09 are Fridays but too early.
        assert!(!is_monthly_expiry(date(2026, 1, 2)));
        assert!(!is_monthly_expiry(date(2026, 1, 9)));
    }

    #[test]
    fn third_week_non_friday_is_not_monthly() {
        // 2026-01-15 is a Thursday inside the window.
        assert!(!is_monthly_expiry(date(2026, 1, 15)));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        // 2026-05-15 is a Friday on the window floor;
        // 2025-11-21 is a Friday on the ceiling.
        assert!(is_monthly_expiry(date(2026, 5, 15)));
        assert!(is_monthly_expiry(date(2025, 11, 21)));
    }
}
