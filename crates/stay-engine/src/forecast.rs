//! Forward simulation over the rolling window.
//!
//! Two bounded day-by-day scans sit on top of the window counter:
//!
//! - [`safe_until`] — assuming continuous presence from a start date, the
//!   last day before the 90-day cap is exceeded
//! - [`next_reentry_date`] — given history alone, the earliest future day
//!   on which entering keeps usage strictly under the cap
//!
//! Both take explicit date anchors (no system clock access) and report a
//! tagged [`Forecast`], so an exhausted search horizon stays
//! distinguishable from a genuine answer.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::records::Trip;
use crate::window::{days_used_in_window, span_days_in_window, STAY_CAP};

/// How far [`safe_until`] scans ahead, in days.
pub const SAFE_UNTIL_HORIZON_DAYS: i64 = 365;

/// How far [`next_reentry_date`] scans ahead, in days.
pub const REENTRY_HORIZON_DAYS: i64 = 180;

/// Outcome of a bounded forward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "date", rename_all = "snake_case")]
pub enum Forecast {
    /// The scan found a definitive answer before its horizon.
    Found(NaiveDate),
    /// The horizon was exhausted; the date is a sentinel, not a guarantee
    /// of anything beyond it.
    HorizonExhausted(NaiveDate),
}

impl Forecast {
    /// The forecast date, definitive or sentinel.
    pub fn date(self) -> NaiveDate {
        match self {
            Forecast::Found(d) | Forecast::HorizonExhausted(d) => d,
        }
    }

    /// Whether the scan terminated with a genuine answer rather than a
    /// horizon sentinel.
    pub fn is_definitive(self) -> bool {
        matches!(self, Forecast::Found(_))
    }
}

/// Forecast the last compliant day of a continuous stay beginning at
/// `start`, on top of the recorded trip history.
///
/// Scans candidate days from `start` forward, up to
/// [`SAFE_UNTIL_HORIZON_DAYS`] iterations. Each candidate `d` is evaluated
/// with a hypothetical stay `[start, d]` added to the history; the stay is
/// folded in as one extra summand, which is equivalent to appending a trip
/// record since usage is a per-trip sum, and the caller's history is never
/// touched. The first `d` pushing usage **over** [`STAY_CAP`] means `d`
/// itself is unsafe, so the result is `Found(d - 1)`.
///
/// If usage is already over the cap on `start` itself, the result is
/// `Found(start - 1)`: a date before the requested start, to be read as
/// "not safe to start at all". If the horizon is exhausted the result is
/// `HorizonExhausted(start + 365)` — an approximation, not a promise of
/// safety beyond the horizon.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stay_engine::{safe_until, Forecast};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// // With no prior history, day 90 of the stay is the last legal one.
/// assert_eq!(
///     safe_until(start, &[]),
///     Forecast::Found(NaiveDate::from_ymd_opt(2024, 3, 30).unwrap())
/// );
/// ```
pub fn safe_until(start: NaiveDate, trips: &[Trip]) -> Forecast {
    for offset in 0..SAFE_UNTIL_HORIZON_DAYS {
        let day = start + Duration::days(offset);
        let used = days_used_in_window(day, trips) + span_days_in_window(day, start, day);
        if used > STAY_CAP {
            return Forecast::Found(day - Duration::days(1));
        }
    }
    Forecast::HorizonExhausted(start + Duration::days(SAFE_UNTIL_HORIZON_DAYS))
}

/// Forecast the earliest day after `today` on which entering keeps usage
/// strictly below [`STAY_CAP`], from recorded history alone.
///
/// Entry is evaluated as a zero-duration probe: candidates run from
/// `today + 1` for up to [`REENTRY_HORIZON_DAYS`] iterations, each checked
/// against the existing history only. The first candidate with usage under
/// the cap is `Found`; if none qualifies the result is
/// `HorizonExhausted(today + 181)`, a degraded sentinel collaborators
/// should surface as such.
pub fn next_reentry_date(today: NaiveDate, trips: &[Trip]) -> Forecast {
    let mut candidate = today + Duration::days(1);
    for _ in 0..REENTRY_HORIZON_DAYS {
        if days_used_in_window(candidate, trips) < STAY_CAP {
            return Forecast::Found(candidate);
        }
        candidate += Duration::days(1);
    }
    Forecast::HorizonExhausted(candidate)
}

// ── Tests ───────────────────────────────────────────────────────────────────
