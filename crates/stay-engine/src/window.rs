//! Rolling 180-day window accounting.
//!
//! The Schengen 90/180 rule caps presence at [`STAY_CAP`] days within any
//! trailing window of [`WINDOW_DAYS`] calendar days. [`days_used_in_window`]
//! counts the days a trip history spends inside the window ending at a
//! reference date; [`has_valid_visa`] checks authorization for a single day.
//!
//! Both functions are total: they never fail, whatever the records contain.

use chrono::{Duration, NaiveDate};

use crate::records::{Trip, Visa};

/// Length of the rolling lookback window, in calendar days.
pub const WINDOW_DAYS: i64 = 180;

/// Maximum days of presence permitted inside one window.
pub const STAY_CAP: u32 = 90;

/// Count the days of recorded presence inside the 180-day window ending at
/// `reference`.
///
/// The window is the inclusive interval `[reference - 179d, reference]`.
/// Each trip contributes the inclusive day-count of its intersection with
/// the window; trips with no overlap, malformed dates, or a reversed range
/// contribute 0.
///
/// The result is the **sum of per-trip contributions**, not the number of
/// distinct days covered: two trips that overlap each other inside the
/// window count their shared days twice. Deduplicating would change the
/// forecasts' tie-breaks, so the summed behavior is kept deliberately.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stay_engine::{days_used_in_window, Trip};
///
/// let trips = vec![Trip::new("Lisbon", vec!["PRT".into()], "2024-04-01", "2024-04-10").unwrap()];
/// let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(days_used_in_window(reference, &trips), 10);
/// ```
pub fn days_used_in_window(reference: NaiveDate, trips: &[Trip]) -> u32 {
    trips
        .iter()
        .filter_map(Trip::span)
        .map(|(start, end)| span_days_in_window(reference, start, end))
        .sum()
}

/// Inclusive day-count of `[span_start, span_end]` clipped to the window
/// ending at `reference`. Shared with the forecasts, which evaluate a
/// hypothetical stay as one extra summand.
pub(crate) fn span_days_in_window(
    reference: NaiveDate,
    span_start: NaiveDate,
    span_end: NaiveDate,
) -> u32 {
    let window_start = reference - Duration::days(WINDOW_DAYS - 1);
    let window_end = reference;

    if span_start > window_end || span_end < window_start {
        return 0;
    }

    let overlap_start = span_start.max(window_start);
    let overlap_end = span_end.min(window_end);
    ((overlap_end - overlap_start).num_days() + 1) as u32
}

/// Whether any visa's inclusive `[start, end]` interval contains `reference`.
///
/// Visas with malformed dates are excluded from the check; an empty list
/// yields `false`.
pub fn has_valid_visa(reference: NaiveDate, visas: &[Visa]) -> bool {
    visas
        .iter()
        .filter_map(Visa::span)
        .any(|(start, end)| start <= reference && reference <= end)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn trip(start: &str, end: &str) -> Trip {
        Trip {
            name: String::new(),
            countries: vec![],
            start: start.into(),
            end: end.into(),
        }
    }

    fn visa(start: &str, end: &str) -> Visa {
        Visa {
            name: String::new(),
            start: start.into(),
            end: end.into(),
        }
    }

    // ── days_used_in_window ─────────────────────────────────────────────

    #[test]
    fn test_empty_history_uses_zero_days() {
        assert_eq!(days_used_in_window(date("2024-06-01"), &[]), 0);
    }

    #[test]
    fn test_trip_fully_inside_window_counts_inclusive_days() {
        // Window ending 2024-06-01 starts 2023-12-05; April 1-10 is inside.
        let trips = vec![trip("2024-04-01", "2024-04-10")];
        assert_eq!(days_used_in_window(date("2024-06-01"), &trips), 10);
    }

    #[test]
    fn test_single_day_trip_counts_one() {
        let trips = vec![trip("2024-05-15", "2024-05-15")];
        assert_eq!(days_used_in_window(date("2024-06-01"), &trips), 1);
    }

    #[test]
    fn test_trip_fully_outside_window_counts_zero() {
        // Window ending 2024-06-30 starts 2024-01-03; 2023 trip is older.
        let trips = vec![trip("2023-10-01", "2023-12-01")];
        assert_eq!(days_used_in_window(date("2024-06-30"), &trips), 0);
    }

    #[test]
    fn test_trip_clipped_at_window_start() {
        // Window ending 2024-06-30 starts 2024-01-03 (2024 is a leap year).
        // Trip Dec 20 - Jan 10 is clipped to Jan 3-10 = 8 days.
        let trips = vec![trip("2023-12-20", "2024-01-10")];
        assert_eq!(days_used_in_window(date("2024-06-30"), &trips), 8);
    }

    #[test]
    fn test_trip_clipped_at_window_end() {
        // Reference 2024-06-01 inside a trip running past it: only days up
        // to and including the reference count.
        let trips = vec![trip("2024-05-28", "2024-06-10")];
        assert_eq!(days_used_in_window(date("2024-06-01"), &trips), 5);
    }

    #[test]
    fn test_trip_ending_exactly_on_window_start_counts_one() {
        // Window ending 2024-06-30 starts 2024-01-03.
        let trips = vec![trip("2023-12-25", "2024-01-03")];
        assert_eq!(days_used_in_window(date("2024-06-30"), &trips), 1);
    }

    #[test]
    fn test_trip_spanning_entire_window_counts_window_length() {
        let trips = vec![trip("2023-01-01", "2025-01-01")];
        assert_eq!(
            days_used_in_window(date("2024-06-01"), &trips),
            WINDOW_DAYS as u32
        );
    }

    #[test]
    fn test_overlapping_trips_double_count() {
        // Jan 1-10 (10 days) and Jan 5-15 (11 days) both fully inside the
        // window: the sum is 21, not the 15 distinct days.
        let trips = vec![trip("2024-01-01", "2024-01-10"), trip("2024-01-05", "2024-01-15")];
        assert_eq!(days_used_in_window(date("2024-03-01"), &trips), 21);
    }

    #[test]
    fn test_malformed_trip_contributes_zero() {
        let trips = vec![trip("garbage", "2024-05-10"), trip("2024-05-01", "2024-05-10")];
        assert_eq!(days_used_in_window(date("2024-06-01"), &trips), 10);
    }

    #[test]
    fn test_reversed_trip_contributes_zero() {
        let trips = vec![trip("2024-05-10", "2024-05-01")];
        assert_eq!(days_used_in_window(date("2024-06-01"), &trips), 0);
    }

    #[test]
    fn test_ninety_days_ending_on_reference() {
        // March 4 - June 1, 2024 is exactly 90 days.
        let trips = vec![trip("2024-03-04", "2024-06-01")];
        assert_eq!(days_used_in_window(date("2024-06-01"), &trips), 90);
    }

    // ── has_valid_visa ──────────────────────────────────────────────────

    #[test]
    fn test_no_visas_is_invalid() {
        assert!(!has_valid_visa(date("2024-06-01"), &[]));
    }

    #[test]
    fn test_visa_covering_date_is_valid() {
        let visas = vec![visa("2024-01-01", "2024-12-31")];
        assert!(has_valid_visa(date("2024-06-01"), &visas));
    }

    #[test]
    fn test_visa_boundaries_are_inclusive() {
        let visas = vec![visa("2024-06-01", "2024-06-30")];
        assert!(has_valid_visa(date("2024-06-01"), &visas));
        assert!(has_valid_visa(date("2024-06-30"), &visas));
        assert!(!has_valid_visa(date("2024-05-31"), &visas));
        assert!(!has_valid_visa(date("2024-07-01"), &visas));
    }

    #[test]
    fn test_any_visa_suffices() {
        let visas = vec![visa("2023-01-01", "2023-12-31"), visa("2024-06-01", "2024-06-30")];
        assert!(has_valid_visa(date("2024-06-15"), &visas));
    }

    #[test]
    fn test_malformed_visa_never_matches() {
        let visas = vec![visa("2024/06/01", "2024-06-30")];
        assert!(!has_valid_visa(date("2024-06-15"), &visas));
    }
}
