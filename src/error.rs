//! Error types for the Equity Vesting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during vesting calculation.

use thiserror::Error;

/// The main error type for the Equity Vesting Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vesting_engine::error::EngineError;
///
/// let error = EngineError::RosterNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An employee's grant contained no units to vest.
    #[error("Invalid grant for employee '{employee_id}': total units must be positive, got {total_units}")]
    InvalidGrant {
        /// The ID of the employee with the invalid grant.
        employee_id: String,
        /// The non-positive unit count that was rejected.
        total_units: i64,
    },

    /// A vesting schedule contained inconsistent parameters.
    #[error("Invalid schedule field '{field}': {message}")]
    InvalidSchedule {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No cached result exists for the requested employee.
    #[error("No result found for employee: {employee_id}")]
    ResultNotFound {
        /// The employee ID that was not found in the cache.
        employee_id: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A batch worker task panicked or was aborted before completing.
    #[error("Batch worker failed: {message}")]
    WorkerFailed {
        /// A description of the worker failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
