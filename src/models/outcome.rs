//! Vesting outcome model.
//!
//! This module contains the [`VestingOutcome`] type that captures the result
//! of evaluating an employee's grant as of a given date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the result of a vesting calculation for one employee.
///
/// # Example
///
/// ```
/// use vesting_engine::models::VestingOutcome;
/// use chrono::NaiveDate;
///
/// let outcome = VestingOutcome {
///     employee_id: "emp001".to_string(),
///     vested_units: 12000,
///     unvested_units: 36000,
///     next_vest_date: Some(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()),
///     as_of_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
/// assert_eq!(outcome.total_units(), 48000);
/// assert!(!outcome.is_fully_vested());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingOutcome {
    /// The ID of the employee this outcome belongs to.
    pub employee_id: String,
    /// Units vested as of the evaluation date.
    pub vested_units: i64,
    /// Units still unvested as of the evaluation date.
    pub unvested_units: i64,
    /// One month after the evaluation date while anything remains unvested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_vest_date: Option<NaiveDate>,
    /// The date the grant was evaluated at.
    pub as_of_date: NaiveDate,
}

impl VestingOutcome {
    /// Returns the total number of units in the underlying grant.
    pub fn total_units(&self) -> i64 {
        self.vested_units + self.unvested_units
    }

    /// Returns true if every unit in the grant has vested.
    pub fn is_fully_vested(&self) -> bool {
        self.unvested_units == 0
    }
}
