//! Employee model.
//!
//! This module defines the Employee struct representing a grant holder
//! in the vesting calculation system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::VestingSchedule;

/// Represents an employee holding an equity grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The date the grant began vesting.
    pub start_date: NaiveDate,
    /// The total number of units in the grant.
    pub total_units: i64,
    /// The vesting schedule attached to the grant.
    pub schedule: VestingSchedule,
}
