//! Vesting schedule model and related types.
//!
//! This module defines the VestingSchedule struct and VestingPolicy enum
//! that describe how an employee's grant vests over time.

use serde::{Deserialize, Serialize};

/// Represents the vesting policy applied after the cliff.
///
/// The policy is a closed set: requests and roster files naming any other
/// policy are rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VestingPolicy {
    /// Equal monthly accrual between the cliff and the end of the schedule.
    Linear,
    /// Annual tranches of 10%, 20%, 30%, 40% for years one through four past the cliff.
    Backloaded,
}

/// Represents the vesting schedule attached to an equity grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    /// Months from the start date before any units vest.
    pub cliff_months: i32,
    /// Total length of the schedule in months, measured from the start date.
    pub vesting_months: i32,
    /// The accrual policy applied after the cliff.
    pub policy: VestingPolicy,
}

impl VestingSchedule {
    /// Returns the number of months between the cliff and the end of the schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesting_engine::models::{VestingPolicy, VestingSchedule};
    ///
    /// let schedule = VestingSchedule {
    ///     cliff_months: 12,
    ///     vesting_months: 48,
    ///     policy: VestingPolicy::Linear,
    /// };
    /// assert_eq!(schedule.post_cliff_months(), 36);
    /// ```
    pub fn post_cliff_months(&self) -> i32 {
        self.vesting_months - self.cliff_months
    }
}
