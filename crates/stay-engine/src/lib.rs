//! # stay-engine
//!
//! Deterministic Schengen 90/180 rolling-window computation.
//!
//! The engine answers, for any reference date, how many of the trailing
//! 180 calendar days were spent inside the Schengen zone, whether a visa
//! covers that date, the last day a continuous stay remains compliant,
//! and the earliest future date on which re-entry is legal again.
//!
//! Every function is pure and clock-free: the caller provides the trip
//! and visa records plus any "now" anchor, and identical inputs always
//! produce identical outputs. Collaborators (UI, persistence, map and
//! heatmap rendering) own all mutable state and call in on every change.
//!
//! ## Modules
//!
//! - [`records`] — Trip and visa records as persisted (string dates), lenient and strict parsing
//! - [`window`] — Rolling 180-day usage counter and visa validity check
//! - [`forecast`] — Safe-until and re-entry forward scans with tagged horizon sentinels
//! - [`overview`] — Per-day legality classification for calendar views
//! - [`roster`] — Static Schengen country roster and visited-set derivation
//! - [`error`] — Error types

pub mod error;
pub mod forecast;
pub mod overview;
pub mod records;
pub mod roster;
pub mod window;

pub use error::StayError;
pub use forecast::{
    next_reentry_date, safe_until, Forecast, REENTRY_HORIZON_DAYS, SAFE_UNTIL_HORIZON_DAYS,
};
pub use overview::{assess_day, year_overview, DayAssessment, DayStatus, NEAR_LIMIT_DAYS};
pub use records::{Trip, TravelLog, Visa, DATE_FORMAT};
pub use roster::{
    country_name, is_schengen_code, roster_progress, visited_countries, Country,
    SCHENGEN_COUNTRIES,
};
pub use window::{days_used_in_window, has_valid_visa, STAY_CAP, WINDOW_DAYS};
