//! Per-day legality classification for calendar views.
//!
//! A heatmap-style collaborator recomputes the window counter for every
//! calendar cell it draws. That recomputation is intentionally brute-force
//! but bounded: one [`year_overview`] call is O(366 × trips), each day an
//! independent [`assess_day`].

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::records::{Trip, Visa};
use crate::window::{days_used_in_window, has_valid_visa, STAY_CAP};

/// Window usage above which a non-travel day is flagged as close to the cap.
pub const NEAR_LIMIT_DAYS: u32 = 80;

/// Legality classification of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// No recorded presence, usage well under the cap.
    Clear,
    /// No recorded presence, but usage above [`NEAR_LIMIT_DAYS`].
    NearLimit,
    /// Recorded presence, compliant and authorized.
    Stay,
    /// Recorded presence with usage over the cap or no covering visa.
    Overstay,
}

/// One day's assessment, as consumed by a calendar renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAssessment {
    pub date: NaiveDate,
    /// Rolling-window usage for the window ending on this day.
    pub days_used: u32,
    pub has_visa: bool,
    pub status: DayStatus,
}

/// Classify a single day against the trip and visa history.
///
/// A day inside any trip is [`DayStatus::Overstay`] when window usage
/// exceeds [`STAY_CAP`] or no visa covers it, otherwise [`DayStatus::Stay`].
/// A day outside all trips is [`DayStatus::NearLimit`] when usage exceeds
/// [`NEAR_LIMIT_DAYS`], otherwise [`DayStatus::Clear`].
pub fn assess_day(day: NaiveDate, trips: &[Trip], visas: &[Visa]) -> DayAssessment {
    let days_used = days_used_in_window(day, trips);
    let has_visa = has_valid_visa(day, visas);
    let is_trip_day = trips.iter().any(|t| t.covers(day));

    let status = if is_trip_day {
        if days_used > STAY_CAP || !has_visa {
            DayStatus::Overstay
        } else {
            DayStatus::Stay
        }
    } else if days_used > NEAR_LIMIT_DAYS {
        DayStatus::NearLimit
    } else {
        DayStatus::Clear
    };

    DayAssessment {
        date: day,
        days_used,
        has_visa,
        status,
    }
}

/// Assess every day of a calendar year, January 1 through December 31.
pub fn year_overview(year: i32, trips: &[Trip], visas: &[Visa]) -> Vec<DayAssessment> {
    let mut out = Vec::with_capacity(366);
    let mut day = match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d,
        None => return out,
    };
    while day.year() == year {
        out.push(assess_day(day, trips, visas));
        day += Duration::days(1);
    }
    out
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

    #[test]
    fn test_day_with_no_history_is_clear() {
        let a = assess_day(date("2024-06-01"), &[], &[]);
        assert_eq!(a.status, DayStatus::Clear);
        assert_eq!(a.days_used, 0);
        assert!(!a.has_visa);
    }

    #[test]
    fn test_compliant_trip_day_is_stay() {
        let trips = vec![trip("2024-05-20", "2024-06-10")];
        let visas = vec![visa("2024-01-01", "2024-12-31")];
        let a = assess_day(date("2024-06-01"), &trips, &visas);
        assert_eq!(a.status, DayStatus::Stay);
        assert_eq!(a.days_used, 13);
        assert!(a.has_visa);
    }

    #[test]
    fn test_trip_day_without_visa_is_overstay() {
        let trips = vec![trip("2024-05-20", "2024-06-10")];
        let a = assess_day(date("2024-06-01"), &trips, &[]);
        assert_eq!(a.status, DayStatus::Overstay);
    }

    #[test]
    fn test_trip_day_over_cap_is_overstay_even_with_visa() {
        // 120 continuous days ending past the reference: usage 100 > 90.
        let trips = vec![trip("2024-02-23", "2024-06-22")];
        let visas = vec![visa("2024-01-01", "2024-12-31")];
        let a = assess_day(date("2024-06-01"), &trips, &visas);
        assert!(a.days_used > STAY_CAP);
        assert_eq!(a.status, DayStatus::Overstay);
    }

    #[test]
    fn test_non_trip_day_near_cap_is_near_limit() {
        // 85 days ending 2024-06-01; assessing the following week.
        let trips = vec![trip("2024-03-09", "2024-06-01")];
        let a = assess_day(date("2024-06-05"), &trips, &[]);
        assert_eq!(a.days_used, 85);
        assert_eq!(a.status, DayStatus::NearLimit);
    }

    #[test]
    fn test_near_limit_threshold_is_exclusive() {
        // Exactly 80 days used: still Clear, per the strict comparison.
        let trips = vec![trip("2024-03-14", "2024-06-01")];
        let a = assess_day(date("2024-06-05"), &trips, &[]);
        assert_eq!(a.days_used, 80);
        assert_eq!(a.status, DayStatus::Clear);
    }

    #[test]
    fn test_year_overview_covers_whole_leap_year() {
        let overview = year_overview(2024, &[], &[]);
        assert_eq!(overview.len(), 366);
        assert_eq!(overview[0].date, date("2024-01-01"));
        assert_eq!(overview[365].date, date("2024-12-31"));
    }

    #[test]
    fn test_year_overview_marks_trip_days() {
        let trips = vec![trip("2024-07-01", "2024-07-10")];
        let visas = vec![visa("2024-01-01", "2024-12-31")];
        let overview = year_overview(2024, &trips, &visas);
        let stays = overview.iter().filter(|a| a.status == DayStatus::Stay).count();
        assert_eq!(stays, 10);
    }
}
