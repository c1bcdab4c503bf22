//! Request types for the Equity Vesting Engine API.
//!
//! This module defines the JSON request structures for the batch and
//! query endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, VestingPolicy, VestingSchedule};

/// Request body for the `/batch` endpoint.
///
/// Contains the employees to evaluate and the date to evaluate them at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// The employees to process.
    pub employees: Vec<EmployeeRequest>,
    /// The date every grant is evaluated at.
    pub as_of_date: NaiveDate,
}

/// Employee information in a batch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The date the grant began vesting.
    pub start_date: NaiveDate,
    /// The total number of units in the grant.
    pub total_units: i64,
    /// The vesting schedule attached to the grant.
    pub schedule: ScheduleRequest,
}

/// Vesting schedule information in a batch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Months from the start date before any units vest.
    pub cliff_months: i32,
    /// Total length of the schedule in months.
    pub vesting_months: i32,
    /// The accrual policy applied after the cliff.
    pub policy: VestingPolicy,
}

/// Request body for the `/results/query` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsQueryRequest {
    /// The employees whose cached outcomes are requested.
    pub employee_ids: Vec<String>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            start_date: req.start_date,
            total_units: req.total_units,
            schedule: req.schedule.into(),
        }
    }
}

impl From<ScheduleRequest> for VestingSchedule {
    fn from(req: ScheduleRequest) -> Self {
        VestingSchedule {
            cliff_months: req.cliff_months,
            vesting_months: req.vesting_months,
            policy: req.policy,
        }
    }
}
