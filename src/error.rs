//! Error types for the Shift Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Conditions where simply no pay is due (missing pay schedule, zero-length
//! shifts, a missing holiday calendar) are not errors; they produce zero
//! results instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Shift Payroll Engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/workplaces.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/workplaces.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A displayed month was outside of 1..=12 or could not be represented.
    #[error("Invalid display month {year}-{month}")]
    InvalidDisplayMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-based).
        month: u32,
    },

    /// A shift in a request cannot be paid by the engine.
    #[error("Invalid shift '{shift_id}': {reason}")]
    InvalidShift {
        /// The id of the rejected shift.
        shift_id: String,
        /// Why the shift was rejected.
        reason: String,
    },

    /// The payday rule kept landing on weekends or holidays.
    ///
    /// This signals a malformed holiday calendar rather than a data-entry
    /// problem, so it is surfaced to the caller.
    #[error(
        "Payday adjustment for workplace '{workplace_id}' did not reach a business day within {max_steps} days of {start}"
    )]
    PaydayAdjustmentExhausted {
        /// The workplace whose payday could not be resolved.
        workplace_id: String,
        /// The unadjusted payday the search started from.
        start: NaiveDate,
        /// The number of days that were tried.
        max_steps: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
