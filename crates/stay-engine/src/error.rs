//! Error types for stay-engine operations.
//!
//! Only the strict, validating constructors raise these. The core window
//! and forecast operations are total: malformed records degrade to a zero
//! contribution instead of failing the whole computation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StayError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Reversed date range: {0}")]
    ReversedRange(String),

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),
}

pub type Result<T> = std::result::Result<T, StayError>;
