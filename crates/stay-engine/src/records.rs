//! Trip and visa records as the persistence collaborator hands them over.
//!
//! Dates are stored as `YYYY-MM-DD` strings, exactly as serialized. The
//! engine parses them per call: [`Trip::span`] and [`Visa::span`] are
//! lenient (a malformed or reversed range yields `None`, which the window
//! counter treats as a zero contribution), while [`Trip::new`] and
//! [`Visa::new`] are the strict constructors for input-handling
//! collaborators and reject bad records up front.
//!
//! The engine never mutates these records; hypothetical stays used by the
//! forecasts are per-call values that are never written back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StayError;
use crate::roster;

/// Date format used by persisted records (`2026-03-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A continuous period of physical presence in Schengen territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Display name (e.g., "Summer in Italy").
    pub name: String,
    /// ISO 3166-1 alpha-3 codes of the countries visited.
    #[serde(default)]
    pub countries: Vec<String>,
    /// First day of presence, inclusive (`YYYY-MM-DD`).
    pub start: String,
    /// Last day of presence, inclusive (`YYYY-MM-DD`).
    pub end: String,
}

/// A continuous authorization period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visa {
    /// Display name (e.g., "Type D France").
    pub name: String,
    /// First valid day, inclusive (`YYYY-MM-DD`).
    pub start: String,
    /// Last valid day, inclusive (`YYYY-MM-DD`).
    pub end: String,
}

/// The flat record bundle a persistence collaborator serializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLog {
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub visas: Vec<Visa>,
}

impl Trip {
    /// Strict constructor for input-handling collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`StayError::InvalidDate`] if either date fails to parse,
    /// [`StayError::ReversedRange`] if `start` is after `end`, or
    /// [`StayError::UnknownCountry`] for a code outside the Schengen roster.
    pub fn new(
        name: impl Into<String>,
        countries: Vec<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, StayError> {
        parse_range_strict(start, end)?;
        for code in &countries {
            if !roster::is_schengen_code(code) {
                return Err(StayError::UnknownCountry(code.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            countries,
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// Parse this record's dates, leniently.
    ///
    /// Returns `None` if either date is malformed or the range is reversed;
    /// such a record contributes zero days rather than failing the whole
    /// computation.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        parse_range(&self.start, &self.end)
    }

    /// Whether `day` falls inside this trip's inclusive date range.
    ///
    /// Malformed records cover nothing.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.span().is_some_and(|(s, e)| s <= day && day <= e)
    }
}

impl Visa {
    /// Strict constructor for input-handling collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`StayError::InvalidDate`] if either date fails to parse, or
    /// [`StayError::ReversedRange`] if `start` is after `end`.
    pub fn new(name: impl Into<String>, start: &str, end: &str) -> Result<Self, StayError> {
        parse_range_strict(start, end)?;
        Ok(Self {
            name: name.into(),
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// Parse this record's dates, leniently. `None` excludes the visa from
    /// any validity check.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        parse_range(&self.start, &self.end)
    }
}

/// Lenient `YYYY-MM-DD` parse.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

fn parse_range(start: &str, end: &str) -> Option<(NaiveDate, NaiveDate)> {
    let s = parse_date(start)?;
    let e = parse_date(end)?;
    (s <= e).then_some((s, e))
}

fn parse_range_strict(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), StayError> {
    let s = parse_date(start).ok_or_else(|| StayError::InvalidDate(start.to_string()))?;
    let e = parse_date(end).ok_or_else(|| StayError::InvalidDate(end.to_string()))?;
    if s > e {
        return Err(StayError::ReversedRange(format!("{start} > {end}")));
    }
    Ok((s, e))
}

// ── Tests ───────────────────────────────────────────────────────────────────
